//! Local JSON store
//!
//! Credentials are read from disk once; fetched data is cached as JSON files
//! written with 4-space indentation so they diff cleanly against earlier dumps.

use crate::api::Credentials;
use crate::config::PathSettings;
use crate::menu::{MenuItem, RestaurantId, RestaurantMenu};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Failure reading or writing a JSON file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read and decode a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| StoreError::json(path, e))
}

/// Serialize `value` into `writer` as 4-space indented JSON
fn write_pretty<W: Write, T: Serialize>(writer: W, value: &T) -> Result<(), serde_json::Error> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)
}

/// Encode `value` as 4-space indented JSON
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, value)?;
    String::from_utf8(buf)
        .map_err(|e| serde_json::Error::io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Write `value` to `path` as 4-space indented JSON, replacing any existing file
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io(path, e))?;
    }

    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_pretty(&mut writer, value).map_err(|e| StoreError::json(path, e))?;
    writer.flush().map_err(|e| StoreError::io(path, e))
}

/// Load API credentials from a JSON file
pub fn load_credentials(path: &Path) -> Result<Credentials, StoreError> {
    read_json(path)
}

/// File-backed cache of fetched data, rooted at the configured paths
#[derive(Debug, Clone)]
pub struct Store {
    paths: PathSettings,
}

impl Store {
    pub fn new(paths: PathSettings) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &PathSettings {
        &self.paths
    }

    /// Load the configured credential file
    pub fn credentials(&self) -> Result<Credentials, StoreError> {
        load_credentials(&self.paths.credentials)
    }

    pub fn load_restaurant_ids(&self) -> Result<Vec<RestaurantId>, StoreError> {
        read_json(&self.paths.restaurant_ids)
    }

    pub fn save_restaurant_ids(&self, ids: &[RestaurantId]) -> Result<(), StoreError> {
        write_json(&self.paths.restaurant_ids, &ids)?;
        info!(
            "Wrote {} restaurant id(s) to {}",
            ids.len(),
            self.paths.restaurant_ids.display()
        );
        Ok(())
    }

    /// Load a flat menu dump, defaulting to the configured file
    pub fn load_menu(&self, path: Option<&Path>) -> Result<Vec<MenuItem>, StoreError> {
        read_json(path.unwrap_or(self.paths.menu_dump.as_path()))
    }

    pub fn save_menu(&self, path: Option<&Path>, items: &[MenuItem]) -> Result<(), StoreError> {
        let path = path.unwrap_or(self.paths.menu_dump.as_path());
        write_json(path, &items)?;
        info!("Wrote {} menu item(s) to {}", items.len(), path.display());
        Ok(())
    }

    /// Load a per-restaurant menu collection, defaulting to the configured file
    pub fn load_collection(&self, path: Option<&Path>) -> Result<Vec<RestaurantMenu>, StoreError> {
        read_json(path.unwrap_or(self.paths.menu_collection.as_path()))
    }

    pub fn save_collection(
        &self,
        path: Option<&Path>,
        menus: &[RestaurantMenu],
    ) -> Result<(), StoreError> {
        let path = path.unwrap_or(self.paths.menu_collection.as_path());
        write_json(path, &menus)?;
        info!("Wrote {} restaurant menu(s) to {}", menus.len(), path.display());
        Ok(())
    }
}
