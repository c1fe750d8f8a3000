use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use wordle_backend::config::AppConfig;
use wordle_backend::infra::state::build_state;
use wordle_backend::middleware::cors::cors_middleware;
use wordle_backend::middleware::request_trace::RequestTrace;
use wordle_backend::middleware::structured_logger::StructuredLogger;
use wordle_backend::middleware::trace_span::TraceSpan;
use wordle_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    // Vocabulary problems are fatal at startup, never per request
    let app_state = match config
        .load_vocabulary()
        .and_then(|vocabulary| build_state().with_vocabulary(vocabulary).build())
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        allowed_words = app_state.engine().vocabulary().allowed_len(),
        answer_words = app_state.engine().vocabulary().answers_len(),
        cors_origins = ?config.cors_origins,
        "starting wordle backend"
    );

    let data = web::Data::new(app_state);
    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
