//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique document ids in tests.
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Builds a document id such as `page-12`.
pub fn document_id(prefix: &str) -> String {
    format!("{}-{}", prefix, next_id())
}

/// Portable text with a single normal paragraph.
pub fn portable_text(text: &str) -> serde_json::Value {
    serde_json::json!([{
        "_type": "block",
        "_key": document_id("block"),
        "style": "normal",
        "children": [{"_type": "span", "text": text}]
    }])
}
