use thiserror::Error;

/// Errors raised while setting up or inspecting a mock content store.
#[derive(Error, Debug)]
pub enum TestError {
    /// A recorded request carried a query parameter that is not valid JSON.
    #[error("Invalid query parameter '{name}': {source}")]
    InvalidParam {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The mock server was started without request recording.
    #[error("Request recording is disabled on the mock server")]
    RecordingDisabled,
}
