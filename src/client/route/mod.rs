pub mod blog;
pub mod home;
pub mod not_found;
pub mod root;

pub use blog::{BlogIndex, BlogPost};
pub use home::Home;
pub use not_found::NotFound;
pub use root::Root;
