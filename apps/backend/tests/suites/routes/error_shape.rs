//! Error responses follow RFC 7807 and carry the request's trace id.

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use wordle_backend::errors::{DomainError, ErrorCode};
use wordle_backend::test_support::{create_test_app_builder, fixture_state};
use wordle_backend::AppError;

async fn fail_with(error: AppError) -> Result<HttpResponse, AppError> {
    Err(error)
}

#[actix_web::test]
async fn test_every_domain_error_maps_to_problem_details() {
    let app = create_test_app_builder(fixture_state(5))
        .with_routes(|cfg| {
            cfg.route(
                "/not_found",
                web::get().to(|| fail_with(DomainError::session_not_found("x").into())),
            )
            .route(
                "/invalid",
                web::get().to(|| fail_with(DomainError::invalid_guess("x").into())),
            )
            .route(
                "/budget",
                web::get().to(|| {
                    fail_with(DomainError::GuessBudgetExceeded { max_guesses: 6 }.into())
                }),
            )
            .route(
                "/config",
                web::get().to(|| fail_with(DomainError::config("no answers").into())),
            );
        })
        .build()
        .await;

    let cases = [
        ("/not_found", ErrorCode::GameNotFound, StatusCode::NOT_FOUND),
        ("/invalid", ErrorCode::InvalidGuess, StatusCode::BAD_REQUEST),
        ("/budget", ErrorCode::NoMoreGuesses, StatusCode::BAD_REQUEST),
        ("/config", ErrorCode::ConfigError, StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (path, code, status) in cases {
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        let problem =
            assert_problem_details_from_service_response(resp, code.as_str(), status, None).await;
        assert_ne!(problem.trace_id, "unknown", "{path} should carry a real trace id");
    }
}

#[actix_web::test]
async fn test_success_responses_carry_trace_header() {
    let app = create_test_app_builder(fixture_state(6)).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header");
    assert!(uuid::Uuid::parse_str(trace_id).is_ok());
}

#[actix_web::test]
async fn test_problem_title_is_humanized() {
    let app = create_test_app_builder(fixture_state(7)).build().await;

    let req = test::TestRequest::post()
        .uri("/guess")
        .set_json(serde_json::json!({ "game_id": uuid::Uuid::new_v4().to_string(), "guess": "crane" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem_details_from_service_response(
        resp,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
    assert_eq!(problem.title, "Game Not Found");
    assert_eq!(problem.type_, "/errors/GAME_NOT_FOUND");
}
