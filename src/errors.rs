use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure talking to the backend API.
    Upstream(reqwest::Error),
    /// Backend API answered with a non-2xx status.
    Status(reqwest::StatusCode, String),
    Template(askama::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upstream(e) => write!(f, "Upstream error: {e}"),
            AppError::Status(code, path) => write!(f, "Upstream returned {code} for {path}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        log::error!("{self}");
        match self {
            AppError::Upstream(_) | AppError::Status(..) => {
                HttpResponse::BadGateway().body("Backend API unavailable")
            }
            AppError::Template(_) => HttpResponse::InternalServerError().body("Internal Server Error"),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Upstream(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an Askama template into a 200 HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(tmpl.render()?))
}
