use crate::domain::error::ApiError;
use crate::domain::ports::response_hook::ResponseHook;

/// Default hook: observe, then hand the error back unchanged.
pub struct PassThroughHook;

impl ResponseHook for PassThroughHook {
    fn on_error(&self, error: ApiError) -> ApiError {
        match &error {
            ApiError::Server { status, .. } => {
                tracing::debug!(status, message = %error.message(), "api error response")
            }
            other => tracing::debug!(error = %other, "api request failed"),
        }
        error
    }
}
