use dioxus::prelude::ServerFnError;

use crate::client::model::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum Cache<T> {
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    /// Reads the current value of a server future, loading until it resolves.
    pub fn from_resource(value: Option<Result<T, ServerFnError>>) -> Self {
        match value {
            None => Cache::Loading,
            Some(Ok(data)) => Cache::Fetched(data),
            Some(Err(err)) => Cache::Error(ApiError::from(err)),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_resource_is_loading() {
        assert_eq!(Cache::<u8>::from_resource(None), Cache::Loading);
    }

    #[test]
    fn resolved_resource_holds_data() {
        let cache = Cache::from_resource(Some(Ok(3)));
        assert_eq!(cache.data(), Some(&3));
        assert_eq!(cache.into_data(), Some(3));
    }

    #[test]
    fn failed_resource_becomes_server_error() {
        let cache: Cache<u8> =
            Cache::from_resource(Some(Err(ServerFnError::new("store unreachable"))));
        match cache {
            Cache::Error(err) => {
                assert_eq!(err.status, 500);
                assert!(err.message.contains("store unreachable"));
            }
            other => panic!("expected an error, got {:?}", other),
        }
    }
}
