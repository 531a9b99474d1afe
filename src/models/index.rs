use serde::{Deserialize, Deserializer, Serialize};

/// One searchable entry loaded from a manual's index file.
///
/// Items are created at load time and never mutated; a reload replaces the
/// whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexItem {
    pub part: String,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    pub page: u32,
    #[serde(default)]
    pub text: String,
}

/// On-disk shape of a per-manual index resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexFile {
    #[serde(default)]
    pub items: Vec<IndexItem>,
}

fn default_page() -> u32 {
    1
}

/// Pages are 1-based for navigation; absent, null or zero values coerce to 1.
fn deserialize_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let page = Option::<u32>::deserialize(deserializer)?;
    Ok(match page {
        Some(0) | None => 1,
        Some(page) => page,
    })
}
