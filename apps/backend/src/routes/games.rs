//! Game HTTP routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{Feedback, GameStatus};
use crate::error::AppError;
use crate::extractors::{GameId, ValidatedJson};
use crate::services::{GameView, SessionId};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub game_id: String,
}

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub game_id: String,
    pub guess: String,
}

#[derive(Debug, Serialize)]
pub struct GuessResponse {
    pub feedback: Feedback,
    pub correct: bool,
    pub guesses: usize,
    pub max_guesses: usize,
}

#[derive(Debug, Serialize)]
pub struct GuessEntry {
    pub guess: String,
    pub feedback: Feedback,
}

#[derive(Debug, Serialize)]
pub struct GameViewResponse {
    pub game_id: String,
    pub guesses: Vec<GuessEntry>,
    pub guesses_used: usize,
    pub max_guesses: usize,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl From<GameView> for GameViewResponse {
    fn from(view: GameView) -> Self {
        Self {
            game_id: view.id.to_string(),
            guesses: view
                .history
                .into_iter()
                .map(|record| GuessEntry {
                    guess: record.guess.to_string(),
                    feedback: record.feedback,
                })
                .collect(),
            guesses_used: view.guesses_used,
            max_guesses: view.max_guesses,
            status: view.status,
            answer: view.answer.map(|w| w.to_string()),
        }
    }
}

/// POST /start
///
/// Starts a game with a random answer and returns its id.
async fn start_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let id = app_state.engine().start_game()?;
    Ok(HttpResponse::Ok().json(StartResponse {
        game_id: id.to_string(),
    }))
}

/// POST /guess
///
/// Scores one guess. Unknown games are 404; malformed or unknown words and
/// guesses past the budget are 400.
async fn submit_guess(
    app_state: web::Data<AppState>,
    body: ValidatedJson<GuessRequest>,
) -> Result<web::Json<GuessResponse>, AppError> {
    let req = body.into_inner();
    let id: SessionId = req.game_id.parse()?;

    let outcome = app_state.engine().submit_guess(&id, &req.guess)?;

    Ok(web::Json(GuessResponse {
        feedback: outcome.feedback,
        correct: outcome.correct,
        guesses: outcome.guesses_used,
        max_guesses: outcome.max_guesses,
    }))
}

/// GET /games/{game_id}
///
/// Read-only view of a game's history. The answer is included only after
/// the game is won or lost.
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameViewResponse>, AppError> {
    let view = app_state.engine().game_view(&game_id.0)?;
    Ok(web::Json(view.into()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/start").route(web::post().to(start_game)));
    cfg.service(web::resource("/guess").route(web::post().to(submit_guess)));
    cfg.service(web::resource("/games/{game_id}").route(web::get().to(get_game)));
}
