// src/api/handlers/assert.rs
use actix_web::{web, HttpResponse};
use futures::StreamExt;

/// `POST /assert` — echoes the request body back verbatim.
///
/// The payload is collected in full before any status is committed, so a
/// mid-stream read failure still yields a clean 500 instead of a 200 with a
/// truncated body.
pub async fn assert_echo(mut payload: web::Payload) -> HttpResponse {
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        match chunk {
            Ok(bytes) => body.extend_from_slice(&bytes),
            Err(e) => {
                log::error!("error /assert: {e}");
                return HttpResponse::InternalServerError().body(e.to_string());
            }
        }
    }

    if body.is_empty() {
        return HttpResponse::BadRequest().body("no data");
    }

    HttpResponse::Ok().body(body.freeze())
}
