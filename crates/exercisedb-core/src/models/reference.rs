use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed reference vocabularies served under `/exercises/{listType}`.
///
/// Variant order is the order `fetch_all_reference_data` requests them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ListType {
    #[serde(rename = "targetList")]
    Target,
    #[serde(rename = "equipmentList")]
    Equipment,
    #[serde(rename = "bodyPartList")]
    BodyPart,
}

impl ListType {
    pub const ALL: [ListType; 3] = [ListType::Target, ListType::Equipment, ListType::BodyPart];

    /// Key used in URLs, cache keys and cache file names
    pub fn as_str(&self) -> &'static str {
        match self {
            ListType::Target => "targetList",
            ListType::Equipment => "equipmentList",
            ListType::BodyPart => "bodyPartList",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ListType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ListType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListType::ALL
            .into_iter()
            .find(|lt| lt.as_str() == s)
            .ok_or_else(|| format!("unknown reference list: {}", s))
    }
}

/// All three reference lists keyed by type, iterated in fetch order
pub type ReferenceData = BTreeMap<ListType, Vec<String>>;
