use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::{ExerciseDbError, Result};

/// In-memory reference lists plus their optional JSON mirrors on disk.
///
/// Keys are list types (`targetList`, ...) or, for lists loaded from a file,
/// the file's stem. An entry always holds exactly what the last successful
/// fetch or load produced for its key.
#[derive(Debug, Default)]
pub struct ReferenceCache {
    lists: HashMap<String, Vec<String>>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached list for a key, or `None` if nothing was fetched or loaded for it
    pub fn get(&self, list_type: &str) -> Option<&[String]> {
        self.lists.get(list_type).map(Vec::as_slice)
    }

    /// Store a list, replacing any previous entry for the key
    pub fn insert(&mut self, list_type: impl Into<String>, list: Vec<String>) {
        let list_type = list_type.into();
        debug!(list_type = %list_type, count = list.len(), "Reference list cached in memory");
        self.lists.insert(list_type, list);
    }

    /// Cached keys in sorted order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.lists.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Write the cached entry for `list_type` to `path`.
    /// Never fetches: an absent entry is a `CacheMiss`.
    pub fn save_to_file(&self, list_type: &str, path: &Path) -> Result<()> {
        let list = self
            .lists
            .get(list_type)
            .ok_or_else(|| ExerciseDbError::CacheMiss {
                list_type: list_type.to_string(),
            })?;
        write_list(path, list)
    }

    /// Read a JSON array of strings from `path` and cache it under the file stem.
    /// The cache is left untouched if anything goes wrong.
    pub fn load_from_file(&mut self, path: &Path) -> Result<Vec<String>> {
        let list_type = list_key_for(path)?;
        let list = read_list(path)?;
        self.insert(list_type, list.clone());
        Ok(list)
    }
}

/// Cache key for a file: its name without the extension
fn list_key_for(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ExerciseDbError::cache_read(path, "cannot derive a list name from the file name"))
}

/// Write a list as pretty-printed JSON, creating parent directories as needed
pub(crate) fn write_list(path: &Path, list: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ExerciseDbError::cache_write(parent, e))?;
    }

    let contents =
        serde_json::to_string_pretty(list).map_err(|e| ExerciseDbError::cache_write(path, e))?;
    std::fs::write(path, contents).map_err(|e| ExerciseDbError::cache_write(path, e))?;

    debug!(path = %path.display(), count = list.len(), "Reference list written to disk");
    Ok(())
}

fn read_list(path: &Path) -> Result<Vec<String>> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ExerciseDbError::cache_read(path, e))?;

    let list: Vec<String> =
        serde_json::from_str(&contents).map_err(|e| ExerciseDbError::cache_read(path, e))?;

    debug!(path = %path.display(), count = list.len(), "Reference list read from disk");
    Ok(list)
}

/// Create the cache directory if it doesn't exist yet
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| ExerciseDbError::cache_write(dir, e))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_list() -> Vec<String> {
        ["abs", "biceps", "chest", "back", "legs"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_get_missing_returns_none() {
        let cache = ReferenceCache::new();
        assert!(cache.get("targetList").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut cache = ReferenceCache::new();
        cache.insert("targetList", vec!["old".to_string()]);
        cache.insert("targetList", sample_list());
        assert_eq!(cache.get("targetList"), Some(sample_list().as_slice()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut cache = ReferenceCache::new();
        cache.insert("targetList", vec![]);
        cache.insert("bodyPartList", vec![]);
        cache.insert("equipmentList", vec![]);
        assert_eq!(cache.keys(), vec!["bodyPartList", "equipmentList", "targetList"]);
    }

    #[test]
    fn test_save_to_file_writes_pretty_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("nested").join("dir").join("targetList.json");

        let mut cache = ReferenceCache::new();
        cache.insert("targetList", sample_list());
        cache.save_to_file("targetList", &path).expect("save should succeed");

        let contents = std::fs::read_to_string(&path).expect("Should read file");
        assert!(contents.starts_with("[\n  \"abs\""));
        let parsed: Vec<String> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, sample_list());
    }

    #[test]
    fn test_save_to_file_missing_entry_is_cache_miss() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("targetList.json");

        let cache = ReferenceCache::new();
        let err = cache.save_to_file("targetList", &path).unwrap_err();

        assert!(matches!(err, ExerciseDbError::CacheMiss { ref list_type } if list_type == "targetList"));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_to_file_unwritable_is_cache_write() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where a parent directory is needed
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let path = blocker.join("targetList.json");

        let mut cache = ReferenceCache::new();
        cache.insert("targetList", sample_list());
        let err = cache.save_to_file("targetList", &path).unwrap_err();
        assert!(matches!(err, ExerciseDbError::CacheWrite { .. }));
    }

    #[test]
    fn test_load_from_file_uses_stem_as_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fileLoad.json");
        std::fs::write(&path, serde_json::to_string(&sample_list()).unwrap()).unwrap();

        let mut cache = ReferenceCache::new();
        let list = cache.load_from_file(&path).expect("load should succeed");

        assert_eq!(list, sample_list());
        assert_eq!(cache.get("fileLoad"), Some(sample_list().as_slice()));
    }

    #[test]
    fn test_load_from_file_missing_leaves_cache_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = ReferenceCache::new();
        cache.insert("targetList", sample_list());

        let err = cache
            .load_from_file(&temp_dir.path().join("nonexistent.json"))
            .unwrap_err();

        assert!(matches!(err, ExerciseDbError::CacheRead { .. }));
        assert_eq!(cache.keys(), vec!["targetList"]);
        assert!(cache.get("nonexistent").is_none());
    }

    #[test]
    fn test_load_from_file_invalid_json_is_cache_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("equipmentList.json");
        std::fs::write(&path, "{\"not\": \"a list\"}").unwrap();

        let mut cache = ReferenceCache::new();
        let err = cache.load_from_file(&path).unwrap_err();

        assert!(matches!(err, ExerciseDbError::CacheRead { .. }));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_file_round_trip_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bodyPartList.json");
        let list: Vec<String> = vec!["waist".into(), "back".into(), "chest".into()];

        write_list(&path, &list).unwrap();
        let mut cache = ReferenceCache::new();
        assert_eq!(cache.load_from_file(&path).unwrap(), list);
    }
}
