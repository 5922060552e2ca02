//! Factory methods for creating content store documents.
//!
//! Factories return JSON documents in the shape the site's GROQ queries
//! project, ready to register with `TestBuilder`. Each document type has a
//! builder-style factory for customization plus `create_*` shorthands.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let en = factory::create_default_locale("en");
//! let page = factory::page::PageFactory::new("home-en", "en")
//!     .section(factory::section::SectionFactory::process().build())
//!     .build();
//! let post = factory::blog_post::BlogPostFactory::new().featured(true).build();
//! ```
//!
//! # Available Factories
//!
//! - `locale` - Locale documents
//! - `page` - Pages, page listing rows and footers
//! - `section` - Entries of a page's `sections` array
//! - `blog_post` - Blog posts
//! - `helpers` - Unique ids and portable text

pub mod blog_post;
pub mod helpers;
pub mod locale;
pub mod page;
pub mod section;

pub use blog_post::{create_featured_post, create_post};
pub use locale::{create_default_locale, create_locale};
pub use page::{create_footer, create_page, create_page_summary};
