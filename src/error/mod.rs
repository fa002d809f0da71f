//! Error types and HTTP response handling.
//!
//! `AppError` aggregates every error the application can surface from a
//! request handler and implements `IntoResponse`, so handlers simply return
//! `Result<_, AppError>`. Internal errors are logged with full detail but
//! render a generic page to avoid leaking implementation details.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Template rendering or registration error.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    TemplateErr(#[from] tera::Error),

    /// I/O error, primarily from binding the listen socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found.
    ///
    /// Results in 404 Not Found with the provided message on the error page.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For the `NotFound` variant, showing its message
/// - 500 Internal Server Error - For everything else, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => error_page(StatusCode::NOT_FOUND, &msg).into_response(),
            err => {
                tracing::error!("{err}");
                error_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
                    .into_response()
            }
        }
    }
}

/// Renders the minimal self-contained error page.
///
/// Built with `format!` rather than the template engine so it stays available
/// when template rendering itself is what failed.
fn error_page(status: StatusCode, message: &str) -> (StatusCode, Html<String>) {
    let body = format!(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{code} - Bedwars Leaderboard</title>\
         <link rel=\"stylesheet\" href=\"/static/css/style.css\"></head>\n\
         <body class=\"error-page\"><main><h1>{code}</h1><p>{message}</p>\
         <p><a href=\"/\">Back to the leaderboard</a></p></main></body>\n</html>\n",
        code = status.as_u16(),
        message = message,
    );
    (status, Html(body))
}
