//! Request middleware.

pub mod locale;

#[cfg(test)]
mod test;
