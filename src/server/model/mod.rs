//! Content store documents and their conversion into shared DTOs.
//!
//! Documents mirror what GROQ queries project: every field is optional because
//! editors can leave anything blank. Each document type owns the rules that
//! turn it into a DTO the client can render without further checks.

pub mod blog;
pub mod contact;
pub mod footer;
pub mod locale;
pub mod media;
pub mod page;
pub mod portable_text;
pub mod section;
