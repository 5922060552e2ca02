//! HTTP handlers for the JSON API.
//!
//! Controllers extract request data, call a service and map the result to a
//! response. Each module exposes a tag used to group its endpoints in the
//! OpenAPI document.

pub mod blog;
pub mod contact;
pub mod content;
pub mod locale;
pub mod page;
