use actix_web::web;

pub mod games;
pub mod health;

/// Register every application route. Shared by `main` and the test app
/// builder so both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));
    cfg.configure(health::configure_routes);
    cfg.configure(games::configure_routes);
}
