use actix_web::{App, HttpServer, middleware, web};

use undergrad_crm::api::ApiClient;
use undergrad_crm::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let api_base =
        std::env::var("CRM_API_BASE").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let api = ApiClient::new(api_base.clone());

    log::info!("Starting server at http://{bind_addr} (backend API at {api_base})");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(api.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Directory, profile, and profile form actions
            .configure(handlers::routes)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
