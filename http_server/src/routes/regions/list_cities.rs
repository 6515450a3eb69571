use actix_web::web;
use itertools::Itertools;
use regions::RegionError;
use serde::Deserialize;

use super::Region;
use crate::app_container::Application;
use crate::errors::ApiError;
use crate::routes::query::FirstValueQuery;

#[derive(Deserialize, Debug)]
struct Request {
    country: Option<String>,
}

#[tracing::instrument(err, skip(app), level = "info")]
async fn list_cities(
    data: FirstValueQuery<Request>,
    app: web::Data<Application>,
) -> Result<web::Json<Vec<Region>>, ApiError> {
    let country = data
        .country
        .as_deref()
        .ok_or(RegionError::InvalidCountry)?;
    let cities = app.regions.list_cities(country)?;
    Ok(web::Json(cities.into_iter().map_into().collect_vec()))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/get-cities").route(web::get().to(list_cities)));
}
