//! The `ExerciseDb` client: API access plus the reference list cache.
//!
//! Reference lists go through [`ExerciseDb::fetch_and_cache`], which always
//! hits the network and then refreshes the memory copy (and a disk copy if a
//! path is given). Reads from memory never touch the network, and writing a
//! list to disk never fetches it.

use std::path::Path;

use tracing::{debug, info};

use crate::api::ApiClient;
use crate::cache::{manager, ReferenceCache};
use crate::config::ExerciseConfig;
use crate::error::Result;
use crate::models::{Exercise, ListType, Page, ReferenceData};

#[derive(Debug)]
pub struct ExerciseDb {
    config: ExerciseConfig,
    api: ApiClient,
    cache: ReferenceCache,
}

impl ExerciseDb {
    /// Build a client, failing with a configuration error if the config is unusable
    pub fn new(config: ExerciseConfig) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        Ok(Self {
            config,
            api,
            cache: ReferenceCache::new(),
        })
    }

    /// Build a client from `EXERCISE_DB_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ExerciseConfig::from_env()?)
    }

    pub fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    pub fn cache(&self) -> &ReferenceCache {
        &self.cache
    }

    // ===== Gateway / images / exercises =====

    pub async fn check_status(&self) -> Result<serde_json::Value> {
        self.api.check_status().await
    }

    pub async fn get_exercise_image(&self, exercise_id: &str) -> Result<serde_json::Value> {
        self.api.get_exercise_image(exercise_id).await
    }

    pub async fn search_exercises(
        &self,
        filter_type: &str,
        value: &str,
        page: Page,
    ) -> Result<Vec<Exercise>> {
        self.api.search_exercises(filter_type, value, page).await
    }

    pub async fn get_exercise_by_id(&self, exercise_id: &str) -> Result<Exercise> {
        self.api.get_exercise_by_id(exercise_id).await
    }

    pub async fn list_all_exercises(&self, page: Page) -> Result<Vec<Exercise>> {
        self.api.list_all_exercises(page).await
    }

    // ===== Reference data =====

    /// Fetch a reference list, cache it in memory and optionally write it to `cache_file`.
    ///
    /// The memory entry is only replaced once the fetch succeeds. A failed
    /// file write is reported even though the memory entry was updated.
    pub async fn fetch_and_cache(
        &mut self,
        list_type: &str,
        cache_file: Option<&Path>,
    ) -> Result<Vec<String>> {
        let list = self.api.fetch_reference_list(list_type).await?;
        self.cache.insert(list_type, list.clone());

        if let Some(path) = cache_file {
            manager::write_list(path, &list)?;
        }

        Ok(list)
    }

    /// Cached list for `list_type`, without any I/O
    pub fn load_cached_reference(&self, list_type: &str) -> Option<&[String]> {
        let hit = self.cache.get(list_type);
        debug!(list_type, hit = hit.is_some(), "Memory cache lookup");
        hit
    }

    /// Write the cached list for `list_type` to `cache_file`
    pub fn save_cached_reference(&self, list_type: &str, cache_file: &Path) -> Result<()> {
        self.cache.save_to_file(list_type, cache_file)
    }

    /// Load a list from a JSON file into memory, keyed by the file stem
    pub fn load_reference_from_file(&mut self, cache_file: &Path) -> Result<Vec<String>> {
        self.cache.load_from_file(cache_file)
    }

    /// Fetch the target, equipment and body part lists in that order.
    ///
    /// With `use_cache`, each list is also written to
    /// `<cache_dir>/<listType>.json`. The first failure aborts the call;
    /// lists fetched before it stay cached in memory.
    pub async fn fetch_all_reference_data(&mut self, use_cache: bool) -> Result<ReferenceData> {
        if use_cache {
            manager::ensure_dir(&self.config.cache_dir)?;
        }

        let mut results = ReferenceData::new();
        for list_type in ListType::ALL {
            let cache_file = use_cache.then(|| self.config.cache_path(list_type.as_str()));
            let list = self
                .fetch_and_cache(list_type.as_str(), cache_file.as_deref())
                .await?;
            results.insert(list_type, list);
        }

        info!(cached_to_disk = use_cache, "Fetched all reference lists");
        Ok(results)
    }
}
