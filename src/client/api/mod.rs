pub mod content;

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod contact;

pub use content::{load_locales, load_page, load_post, load_posts};

#[cfg(feature = "web")]
pub use contact::submit_contact;
