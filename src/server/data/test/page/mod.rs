use super::*;

use crate::server::data::page::PageRepository;

mod find_by_slug;
mod get_summaries;
