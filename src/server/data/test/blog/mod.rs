use super::*;

use test_utils::factory::blog_post::BlogPostFactory;

use crate::server::data::blog::BlogRepository;

mod find_by_slug;
mod get_list;
mod get_unslugged;
