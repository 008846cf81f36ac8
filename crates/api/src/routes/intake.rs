use axum::routing::get;
use axum::Router;

use crate::handlers::intake;
use crate::state::AppState;

/// Path the browser is sent to after every submission.
pub const SUCCESS_PATH: &str = "/success";

/// Mount the application form and its confirmation page.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(intake::show_form).post(intake::submit_form))
        .route(SUCCESS_PATH, get(intake::show_success))
}
