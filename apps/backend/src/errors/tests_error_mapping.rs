// Unit tests for error mapping - pure domain logic without HTTP transport
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_session_not_found_to_404() {
    let app: AppError = DomainError::session_not_found("nope").into();
    assert_eq!(app.code(), ErrorCode::GameNotFound);
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.detail(), "Game not found");
}

#[test]
fn maps_invalid_guess_to_400() {
    let app: AppError = DomainError::invalid_guess("zzzzz").into();
    assert_eq!(app.code().as_str(), "INVALID_GUESS");
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "Invalid guess");
}

#[test]
fn maps_budget_exhaustion_to_400() {
    let app: AppError = DomainError::GuessBudgetExceeded { max_guesses: 6 }.into();
    assert_eq!(app.code(), ErrorCode::NoMoreGuesses);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "No more guesses");
}

#[test]
fn maps_config_and_infra_to_500() {
    let app: AppError = DomainError::config("no answers").into();
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
    assert!(matches!(app, AppError::Config { .. }));

    let app: AppError =
        DomainError::infra(InfraErrorKind::SessionIdExhausted, "collisions").into();
    assert_eq!(app.code(), ErrorCode::Internal);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn humanized_titles() {
    assert_eq!(AppError::humanize_code("GAME_NOT_FOUND"), "Game Not Found");
    assert_eq!(AppError::humanize_code("INTERNAL"), "Internal");
}
