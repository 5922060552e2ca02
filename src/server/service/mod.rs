//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the content store repositories.
//! They resolve locales, compose documents into DTOs and decide how content
//! store failures surface: most visitor-facing reads degrade to safe defaults
//! and log the failure, while the contact and status endpoints report errors.

pub mod blog;
pub mod contact;
pub mod content;
pub mod locale;
pub mod page;
pub mod view;

#[cfg(test)]
mod test;
