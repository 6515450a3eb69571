use actix_web::web;
use itertools::Itertools;

use super::Region;
use crate::app_container::Application;

#[tracing::instrument(skip(app), level = "info")]
async fn list_countries(app: web::Data<Application>) -> web::Json<Vec<Region>> {
    web::Json(app.regions.list_countries().into_iter().map_into().collect_vec())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/get-countries").route(web::get().to(list_countries)));
}
