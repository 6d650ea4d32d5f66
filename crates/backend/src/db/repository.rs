use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::{Picture, picture::integer_id};

/// The picture collection. Ordered by insertion, lives for the process only.
///
/// Every method takes the lock once, so lookups and the mutation that follows
/// them happen as one step.
pub struct Repository {
    pictures: RwLock<Vec<Picture>>,
}

impl Repository {
    pub fn from_pictures(pictures: Vec<Picture>) -> Self {
        Self {
            pictures: RwLock::new(pictures),
        }
    }

    /// Parses the seed file, a JSON array of objects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read seed file {}", path.display()))?;
        let pictures: Vec<Picture> = serde_json::from_str(&raw)
            .with_context(|| format!("malformed seed file {}", path.display()))?;

        tracing::info!(count = pictures.len(), path = %path.display(), "seed loaded");
        Ok(Self::from_pictures(pictures))
    }

    pub async fn count(&self) -> usize {
        self.pictures.read().await.len()
    }

    pub async fn list(&self) -> Vec<Picture> {
        self.pictures.read().await.clone()
    }

    pub async fn get(&self, id: i128) -> Option<Picture> {
        self.pictures
            .read()
            .await
            .iter()
            .find(|p| p.matches(id))
            .cloned()
    }

    /// Appends `picture` unless a record with a numerically equal `id` already
    /// exists. A picture without `id` never collides.
    pub async fn insert_if_absent(&self, picture: Picture) -> bool {
        let mut pictures = self.pictures.write().await;
        if let Some(new_id) = picture.id() {
            if pictures.iter().any(|p| p.same_id_as(new_id)) {
                return false;
            }
        }
        pictures.push(picture);
        true
    }

    /// Shallow-merges `patch` into the first record with `id`.
    pub async fn update(&self, id: i128, patch: Map<String, Value>) -> Option<Picture> {
        let mut pictures = self.pictures.write().await;
        let picture = pictures.iter_mut().find(|p| p.matches(id))?;

        if let Some(new_id) = patch.get("id") {
            if integer_id(new_id) != Some(id) {
                tracing::warn!(%id, %new_id, "picture id reassigned by update");
            }
        }

        picture.merge(patch);
        Some(picture.clone())
    }

    /// Removes the first record with `id`.
    pub async fn remove(&self, id: i128) -> Option<Picture> {
        let mut pictures = self.pictures.write().await;
        let pos = pictures.iter().position(|p| p.matches(id))?;
        Some(pictures.remove(pos))
    }
}
