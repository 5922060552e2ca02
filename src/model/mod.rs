//! Data transfer objects shared by the server and the wasm client.
//!
//! Everything in here is plain serde data. The server builds these from CMS
//! documents (`server::model`), the client renders them.

pub mod api;
pub mod blog;
pub mod contact;
pub mod content;
pub mod locale;
pub mod media;
pub mod page;
pub mod section;
pub mod slug;
