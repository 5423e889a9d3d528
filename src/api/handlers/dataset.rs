// src/api/handlers/dataset.rs
use actix_web::HttpResponse;
use serde_json::json;

/// `GET /dataset` — fixed dataset fixture, identical on every call.
pub async fn dataset() -> HttpResponse {
    let fixture = json!({
        "data": [
            { "input": "test-match" }
        ]
    });

    match serde_json::to_string(&fixture) {
        Ok(encoded) => HttpResponse::Ok()
            .content_type("application/json")
            .body(encoded),
        Err(e) => {
            log::error!("error /dataset: {e}");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
