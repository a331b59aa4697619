use dioxus::prelude::ServerFnError;

/// Why a fetch did not produce data, as seen by the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server reached equran.id but the call failed (network, status or body).
    #[error("schedule provider failed: {0}")]
    Upstream(String),
    /// The browser could not talk to our own server function.
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<ServerFnError> for FetchError {
    fn from(err: ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError(msg) => FetchError::Upstream(msg),
            other => FetchError::Transport(other.to_string()),
        }
    }
}
