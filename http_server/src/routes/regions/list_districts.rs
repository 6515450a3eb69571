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
    #[serde(rename = "cityId")]
    city_id: Option<String>,
}

#[tracing::instrument(err, skip(app), level = "info")]
async fn list_districts(
    data: FirstValueQuery<Request>,
    app: web::Data<Application>,
) -> Result<web::Json<Vec<Region>>, ApiError> {
    let country = data
        .country
        .as_deref()
        .ok_or(RegionError::InvalidCountry)?;
    // An unknown country is reported before a missing city id.
    let city_id = match data.city_id.as_deref() {
        Some(city_id) => city_id,
        None => {
            app.regions.list_cities(country)?;
            return Err(RegionError::InvalidCity.into());
        }
    };
    let districts = app.regions.list_districts(country, city_id)?;
    Ok(web::Json(districts.into_iter().map_into().collect_vec()))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/get-districts").route(web::get().to(list_districts)));
}
