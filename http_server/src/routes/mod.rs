mod api_doc;
mod prayer_times;
mod query;
mod regions;

use actix_web::web;

fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(regions::init_routes)
        .configure(prayer_times::init_routes)
        .configure(api_doc::init_routes);
}

/// Every endpoint answers both at the root and under `/api`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(init_routes))
        .configure(init_routes);
}
