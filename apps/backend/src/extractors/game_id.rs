use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::DomainError;
use crate::services::SessionId;

/// Game id taken from the `{game_id}` route segment.
///
/// Only the shape is checked here; a well-formed id that names no live
/// game is reported by the engine. Malformed ids are not found either.
#[derive(Debug, Clone, Copy)]
pub struct GameId(pub SessionId);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("game_id") {
            Some(raw) => raw.parse::<SessionId>().map(GameId).map_err(AppError::from),
            None => Err(AppError::from(DomainError::session_not_found(""))),
        };
        ready(result)
    }
}
