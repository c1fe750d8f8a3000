use actix_web::test;
use serde_json::Value;
use wordle_backend::test_support::{create_test_app_builder, fixture_state};
use wordle_backend::SessionId;

use crate::common::start_game;

#[actix_web::test]
async fn test_start_returns_uuid_game_id() {
    let app = create_test_app_builder(fixture_state(1)).build().await;

    let game_id = start_game(&app).await;
    assert!(game_id.parse::<SessionId>().is_ok(), "{game_id} should be a uuid");
}

#[actix_web::test]
async fn test_each_start_creates_a_distinct_game() {
    let app = create_test_app_builder(fixture_state(2)).build().await;

    let first = start_game(&app).await;
    let second = start_game(&app).await;
    assert_ne!(first, second);
}

#[actix_web::test]
async fn test_start_ignores_request_body() {
    let app = create_test_app_builder(fixture_state(3)).build().await;

    let req = test::TestRequest::post()
        .uri("/start")
        .set_payload("not json at all")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["game_id"].is_string());
}

#[actix_web::test]
async fn test_start_requires_post() {
    let app = create_test_app_builder(fixture_state(4)).build().await;

    let req = test::TestRequest::get().uri("/start").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 405);
}
