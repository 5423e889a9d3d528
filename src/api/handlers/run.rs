// src/api/handlers/run.rs
use actix_web::{web, HttpResponse};

use crate::api::AppState;
use crate::errors::EvalMockError;
use crate::runner;

/// `POST /` — runs the evaluator for the model named in the request body and
/// relays the first line of its output carrying a non-empty `final_report`.
///
/// The body is decoded by hand rather than through `web::Json` so that a
/// malformed body surfaces as a 500 like every other failure here.
pub async fn run_eval(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    match runner::run_eval(&state.config, &body).await {
        Ok(report) => match serde_json::to_string(&report) {
            Ok(encoded) => HttpResponse::Ok()
                .content_type("application/json")
                .body(encoded),
            Err(e) => {
                let e = EvalMockError::Encode(e);
                log::error!("error /: {e}");
                HttpResponse::InternalServerError().body(e.to_string())
            }
        },
        Err(e) => {
            log::error!("error /: {e}");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
