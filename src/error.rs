//! Failures that leave a gateway and become HTTP 500 responses.
//!
//! Content that arrives but cannot be used is not an error here; see
//! [`crate::dust_client::GeneratedContent`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Dust API call failed with status {0}")]
    DustStatus(u16),

    #[error("Internal server error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenAI API key not configured")]
    NotConfigured,

    #[error("OpenAI API error: {0}")]
    ImageApi(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_caller_facing() {
        assert_eq!(
            GatewayError::DustStatus(502).to_string(),
            "Dust API call failed with status 502"
        );
        assert_eq!(
            GatewayError::NotConfigured.to_string(),
            "OpenAI API key not configured"
        );
        assert_eq!(
            GatewayError::ImageApi("boom".to_string()).to_string(),
            "OpenAI API error: boom"
        );
    }
}
