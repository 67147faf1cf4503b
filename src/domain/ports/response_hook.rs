use crate::domain::error::ApiError;

/// Interception point applied to every failed API request before the error
/// reaches the caller. The returned error is what the caller sees.
pub trait ResponseHook: Send + Sync {
    fn on_error(&self, error: ApiError) -> ApiError;
}
