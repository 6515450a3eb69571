use actix_web::web;
use regions::RegionSummary;
use serde::Serialize;

mod list_cities;
mod list_countries;
mod list_districts;

#[derive(Serialize, Debug)]
struct Region {
    id: String,
    name: String,
}

impl From<RegionSummary> for Region {
    fn from(value: RegionSummary) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(list_countries::init_routes)
        .configure(list_cities::init_routes)
        .configure(list_districts::init_routes);
}
