use business::domain::product::errors::ProductError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The form failed validation; nothing was sent.
    #[error("{0}")]
    Validation(#[from] ProductError),
    #[error("client.http: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with a failure status. `message` is its error code.
    #[error("client.status {status}: {message}")]
    Status { status: u16, message: String },
}
