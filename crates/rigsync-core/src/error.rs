use std::time::Duration;

use thiserror::Error;

use crate::rig::RigEndpoint;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),

    #[error("Rig at {0} closed the connection")]
    Closed(RigEndpoint),

    #[error("No response from rig within {0:?}")]
    Timeout(Duration),

    #[error("Response is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid rig address '{input}': {reason}")]
    Address { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_display_names_endpoint() {
        let err = Error::Closed(RigEndpoint::new("localhost", 4532));
        assert_eq!(err.to_string(), "Rig at localhost:4532 closed the connection");
    }

    #[test]
    fn test_address_display() {
        let err = Error::Address {
            input: "localhost".to_string(),
            reason: "expected host:port".to_string(),
        };
        assert!(err.to_string().contains("localhost"));
        assert!(err.to_string().contains("expected host:port"));
    }
}
