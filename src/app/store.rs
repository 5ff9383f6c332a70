use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tracing::warn;

pub const LAST_SEARCHED_CITY_KEY: &str = "lastSearchedCity";
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";
pub const SAVED_LOCATIONS_KEY: &str = "savedLocations";

pub const HISTORY_LIMIT: usize = 5;

/// String-keyed persistence injected into the app. Values are plain strings;
/// list values are stored JSON-encoded.
pub trait KeyValueStore: Send + std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// All keys in one JSON object on disk, rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "ignoring corrupt store file");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("creating store directory failed")?;
        }
        let payload =
            serde_json::to_string_pretty(&self.values).context("serializing store failed")?;
        fs::write(&self.path, payload).context("writing store file failed")
    }
}

pub fn store_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("WEATHER_LOOKUP_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("store.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("weather-lookup")
            .join("store.json"),
    )
}

/// Last searched city, recent searches and saved locations on top of a store.
#[derive(Debug)]
pub struct Preferences {
    store: Box<dyn KeyValueStore>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new(Box::new(MemoryStore::default()))
    }
}

impl Preferences {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn last_searched_city(&self) -> Option<String> {
        self.store
            .get(LAST_SEARCHED_CITY_KEY)
            .filter(|city| !city.trim().is_empty())
    }

    pub fn history(&self) -> Vec<String> {
        self.list(SEARCH_HISTORY_KEY)
    }

    pub fn saved_locations(&self) -> Vec<String> {
        self.list(SAVED_LOCATIONS_KEY)
    }

    pub fn is_saved(&self, city: &str) -> bool {
        self.saved_locations().iter().any(|saved| saved == city)
    }

    /// Remembers a successful search: last city plus most-recent-first history.
    pub fn record_search(&mut self, city: &str) -> anyhow::Result<()> {
        self.store.set(LAST_SEARCHED_CITY_KEY, city.to_string())?;
        let history = push_recent(self.history(), city, HISTORY_LIMIT);
        self.set_list(SEARCH_HISTORY_KEY, &history)
    }

    /// Adds `city` to saved locations, or removes it when already saved.
    /// Returns whether the city is saved afterwards.
    pub fn toggle_saved(&mut self, city: &str) -> anyhow::Result<bool> {
        let mut saved = self.saved_locations();
        let now_saved = if let Some(idx) = saved.iter().position(|s| s == city) {
            saved.remove(idx);
            false
        } else {
            saved.push(city.to_string());
            true
        };
        self.set_list(SAVED_LOCATIONS_KEY, &saved)?;
        Ok(now_saved)
    }

    fn list(&self, key: &str) -> Vec<String> {
        let Some(raw) = self.store.get(key) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(key, %err, "stored list is not valid JSON; treating as empty");
            Vec::new()
        })
    }

    fn set_list(&mut self, key: &str, values: &[String]) -> anyhow::Result<()> {
        let encoded = serde_json::to_string(values).context("encoding stored list failed")?;
        self.store.set(key, encoded)
    }
}

pub(crate) fn push_recent(history: Vec<String>, city: &str, limit: usize) -> Vec<String> {
    std::iter::once(city.to_string())
        .chain(history.into_iter().filter(|item| item != city))
        .take(limit)
        .collect()
}
