use actix_web::web;
use prayer_times::{PrayerTimeRequest, PrayerTimeResult};
use serde::Deserialize;

use crate::app_container::Application;
use crate::errors::ApiError;
use crate::routes::query::FirstValueQuery;

#[derive(Deserialize, Debug)]
struct Request {
    sehir: Option<String>,
    #[serde(rename = "sehirId")]
    sehir_id: Option<String>,
    dil: Option<String>,
}

impl From<Request> for PrayerTimeRequest {
    fn from(value: Request) -> Self {
        PrayerTimeRequest::new(value.sehir, value.sehir_id, value.dil)
    }
}

#[tracing::instrument(err, skip(app), level = "info")]
async fn get_prayer_times(
    data: FirstValueQuery<Request>,
    app: web::Data<Application>,
) -> Result<web::Json<PrayerTimeResult>, ApiError> {
    let request: PrayerTimeRequest = data.into_inner().into();
    let prayer_times = app.prayer_times.prayer_times(&request).await?;
    Ok(web::Json(prayer_times))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/namaz-vakitleri").route(web::get().to(get_prayer_times)));
}
