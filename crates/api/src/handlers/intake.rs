//! Handlers for the application form.
//!
//! A submission is appended to the spreadsheet and confirmed by email, both
//! best-effort: failures are logged and the applicant is redirected to the
//! confirmation page either way.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use loom_core::{Submission, SIZE_OPTIONS};

use crate::pages;
use crate::routes::intake::SUCCESS_PATH;
use crate::state::AppState;

/// GET /
pub async fn show_form() -> Html<String> {
    Html(pages::render_form(&SIZE_OPTIONS))
}

/// POST /
///
/// Missing required fields are rejected by the `Form` extractor before this
/// body runs, so neither integration is touched for an incomplete form.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(submission): Form<Submission>,
) -> Redirect {
    tracing::info!(
        full_name = %submission.full_name,
        email = %submission.email,
        "Form submission received"
    );

    let row = submission.to_row();
    match state.sheet.append(&row).await {
        Ok(()) => tracing::info!(columns = row.len(), "Submission added to spreadsheet"),
        Err(e) => tracing::error!(error = %e, "Failed to add submission to spreadsheet"),
    }

    match state
        .mailer
        .send(&submission.email, &submission.full_name)
        .await
    {
        Ok(()) => tracing::info!(to = %submission.email, "Confirmation email delivered"),
        Err(e) => tracing::error!(
            error = %e,
            to = %submission.email,
            "Failed to send confirmation email"
        ),
    }

    Redirect::to(SUCCESS_PATH)
}

/// GET /success
pub async fn show_success() -> Html<&'static str> {
    Html(pages::SUCCESS_PAGE)
}
