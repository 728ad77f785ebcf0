use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Body of every failed API response. `message` is a code such as
/// `product.not_found` that clients translate.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn json(name: &str, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.into(),
        })
    }
}

/// Maps a domain error onto its HTTP status and response body.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
