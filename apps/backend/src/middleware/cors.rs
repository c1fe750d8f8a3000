use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the configured origins:
/// - Only allow methods actually used by the API
/// - Any request header may be sent
/// - Credentials are allowed, so every origin is listed explicitly
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .supports_credentials()
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
