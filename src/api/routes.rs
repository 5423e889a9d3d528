// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Each resource carries its own default so a method mismatch answers 405;
    // the config-level default would otherwise swallow it with a 404.
    cfg.service(
        web::resource("/")
            .route(web::post().to(handlers::run_eval))
            .default_service(web::route().to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/dataset")
            .route(web::get().to(handlers::dataset))
            .default_service(web::route().to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/assert")
            .route(web::post().to(handlers::assert_echo))
            .default_service(web::route().to(handlers::method_not_allowed)),
    )
    .default_service(web::route().to(handlers::not_found));
}
