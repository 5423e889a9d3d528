// src/api/handlers/mod.rs
mod run;
mod dataset;
mod assert;

pub use run::run_eval;
pub use dataset::dataset;
pub use assert::assert_echo;

use actix_web::{HttpRequest, HttpResponse};

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::warn!("unknown path: {}", req.path());
    HttpResponse::NotFound().body("not found")
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().body("method not allowed")
}
