//! Content store repository layer.
//!
//! Repositories wrap the GROQ queries for each document type and return raw
//! documents from `server::model`. They never apply fallbacks; services decide
//! what a missing document or a failed query means for the visitor.

pub mod blog;
pub mod client;
pub mod locale;
pub mod page;
pub mod query;

#[cfg(test)]
mod test;
