mod api;
mod banner;
mod config;
mod errors;
mod reader;
mod runner;

use actix_web::{middleware, web, App, HttpServer};
use api::{configure_routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let addr = match std::env::args().nth(1) {
        Some(addr) => addr,
        None => {
            eprintln!("usage: evalmock <addr>");
            std::process::exit(2);
        }
    };

    let app_config = config::AppConfig::from_env();
    log::info!(
        "eval mock on addr {} (evaluator: {})",
        addr,
        app_config.evaluator.display()
    );

    let state = AppState::new(app_config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
