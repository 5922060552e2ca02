#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
    /// Per-field problems returned by form validation.
    pub details: Vec<String>,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: Vec::new(),
        }
    }

}

impl From<dioxus::prelude::ServerFnError> for ApiError {
    fn from(err: dioxus::prelude::ServerFnError) -> Self {
        Self::new(500, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
