use actix_web::HttpResponse;

/// Liveness probe.
pub async fn handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Server is Running!")
}
