pub mod blog_card;
pub mod contact_form;
pub mod footer;
pub mod language_switch;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod section;

pub use blog_card::BlogCard;
pub use contact_form::ContactForm;
pub use footer::Footer;
pub use language_switch::LanguageSwitch;
pub use layout::{HomePageContext, Layout};
pub use navbar::Navbar;
pub use page::Page;
