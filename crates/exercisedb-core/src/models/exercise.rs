use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Default page size for filtered searches
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Default page size when listing the whole catalog
pub const DEFAULT_LIST_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(rename = "bodyPart", default)]
    pub body_part: Option<String>,
    #[serde(rename = "gifUrl", default)]
    pub gif_url: Option<String>,
    #[serde(rename = "secondaryMuscles", default, deserialize_with = "null_as_empty")]
    pub secondary_muscles: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructions: Vec<String>,
    /// Fields this struct doesn't model, kept as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Treat an explicit `null` list the same as a missing one
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Exercise {
    /// "Push Up (chest, body weight)" style label for listings
    pub fn display_name(&self) -> String {
        let tags: Vec<&str> = [self.target.as_deref(), self.equipment.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if tags.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, tags.join(", "))
        }
    }
}

/// Limit/offset pagination sent as query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    pub fn search_default() -> Self {
        Self::new(DEFAULT_SEARCH_LIMIT, 0)
    }

    pub fn list_default() -> Self {
        Self::new(DEFAULT_LIST_LIMIT, 0)
    }
}
