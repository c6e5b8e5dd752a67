//! Agent gateway
//!
//! The remote backend that receives a question and returns an answer. The
//! [`AgentGateway`] trait is the seam the lifecycle controller talks through;
//! production uses [`HttpGateway`], tests script their own implementations.

mod http;

pub use http::HttpGateway;

use crate::ids::SessionId;
use async_trait::async_trait;
use thiserror::Error;

/// Why a gateway exchange failed.
///
/// All three kinds land the lifecycle in the same `Failed` state; the
/// distinction survives only in the diagnostic text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Network/connectivity failure before any response arrived
    #[error("connection failed: {message}")]
    Transport { message: String },

    /// Non-success status from the gateway
    #[error("gateway returned {status}: {message}")]
    Gateway { status: u16, message: String },

    /// Success status but no recognizable answer field in the body
    #[error("gateway response carried no answer field")]
    MalformedResponse,
}

impl GatewayError {
    /// Human-readable diagnostic shown to the user in the `Failed` state.
    ///
    /// Gateway failures surface whatever the backend said; transport and
    /// shape problems get a generic message instead of wire-level detail.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Gateway { message, .. } => message.clone(),
            Self::Transport { .. } => {
                "Could not reach the agent. Check your connection and try again.".to_string()
            }
            Self::MalformedResponse => {
                "The agent returned a response with no answer in it.".to_string()
            }
        }
    }
}

/// One operation: send a question, get the answer text back.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    async fn ask(&self, session: &SessionId, question: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_diagnostic_is_the_backend_message() {
        let err = GatewayError::Gateway {
            status: 500,
            message: "bad session".to_string(),
        };
        assert_eq!(err.diagnostic(), "bad session");
    }

    #[test]
    fn transport_diagnostic_is_generic() {
        let err = GatewayError::Transport {
            message: "dns error: no such host".to_string(),
        };
        assert!(err.diagnostic().contains("Could not reach the agent"));
        assert!(!err.diagnostic().contains("dns"));
    }
}
