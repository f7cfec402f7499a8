use actix_web::web;

pub mod dashboard;
pub mod interaction_handlers;
pub mod profile;

/// Route table shared by the server binary and the integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard::index))
        .route("/student/{id}", web::get().to(profile::show))
        .route(
            "/student/{id}/actions",
            web::post().to(interaction_handlers::log_action),
        )
        .route(
            "/student/{id}/notes",
            web::post().to(interaction_handlers::add_note),
        )
        .route(
            "/student/{id}/notes/{note_id}",
            web::post().to(interaction_handlers::update_note),
        )
        .route(
            "/student/{id}/notes/{note_id}/delete",
            web::post().to(interaction_handlers::delete_note),
        );
}
