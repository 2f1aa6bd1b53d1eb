use thiserror::Error;

/// Errors from the outbound create-order call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Http(String),

    #[error("gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode gateway response: {0}")]
    Decode(String),
}
