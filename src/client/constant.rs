pub const SITE_NAME: &str = "Kiut Dental";

pub const SITE_DESCRIPTION: &str =
    "Affordable, high-quality dental treatment abroad with full travel support";

/// Slug of the page rendered at `/{locale}`.
pub const HOME_SLUG: &str = "home";

/// Anchor id of the contact section appended to the home page.
pub const CONTACT_ANCHOR: &str = "contact";

/// Posts shown in the latest-posts block on the home page.
pub const HOME_POST_LIMIT: usize = 4;
