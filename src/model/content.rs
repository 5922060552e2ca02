use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PageStatusDto {
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub locale: Option<String>,
    pub sections_count: u32,
}

/// Overview of what the content store currently holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ContentStatusDto {
    pub total_pages: usize,
    pub pages: Vec<PageStatusDto>,
    /// Active locale codes without a home page.
    pub missing_home_pages: Vec<String>,
}
