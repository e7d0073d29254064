//! Transient artifact storage for synthesized audio.
//!
//! Each synthesis call produces one artifact under the spool directory with
//! a per-request unique name, so concurrent requests never race on a shared
//! path. An artifact is fully written before delivery begins and is removed
//! when it is taken for delivery; nothing is reused across requests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use uuid::Uuid;

use crate::error::Error;
use crate::service::Result;

/// Tracing target for artifact store operations.
const TRACING_TARGET: &str = "studia_server::service::artifacts";

/// Handle to one stored artifact.
///
/// Handles are single-use: delivery consumes them.
#[derive(Debug)]
pub struct ArtifactHandle {
    /// Unique artifact identifier (also the file stem).
    pub id: Uuid,
    /// Location of the artifact on disk.
    pub path: PathBuf,
    /// MIME type of the stored payload.
    pub media_type: String,
}

impl ArtifactHandle {
    /// Suggested download file name for this artifact.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Store for short-lived generated files.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: Arc<PathBuf>,
}

impl ArtifactStore {
    /// Opens the store, creating the spool directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            Error::file_system(format!(
                "failed to create artifact directory '{}'",
                root.display()
            ))
            .with_source(e)
        })?;

        Ok(Self {
            root: Arc::new(root),
        })
    }

    /// The spool directory this store writes to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a fully materialized payload and returns its handle.
    ///
    /// The write completes before the handle is returned, so delivery never
    /// observes a partially written file.
    pub async fn store(&self, payload: &[u8], media_type: &str) -> Result<ArtifactHandle> {
        let id = Uuid::new_v4();
        let path = self
            .root
            .join(format!("{id}.{}", extension_for(media_type)));

        tokio::fs::write(&path, payload).await.map_err(|e| {
            Error::file_system(format!("failed to write artifact '{}'", path.display()))
                .with_source(e)
        })?;

        tracing::debug!(
            target: TRACING_TARGET,
            artifact_id = %id,
            size = payload.len(),
            media_type = %media_type,
            "Artifact stored"
        );

        Ok(ArtifactHandle {
            id,
            path,
            media_type: media_type.to_string(),
        })
    }

    /// Reads an artifact back for delivery and removes it from disk.
    pub async fn take(&self, handle: &ArtifactHandle) -> Result<Bytes> {
        let payload = tokio::fs::read(&handle.path).await.map_err(|e| {
            Error::file_system(format!(
                "failed to read artifact '{}'",
                handle.path.display()
            ))
            .with_source(e)
        })?;

        // The artifact is garbage-collected after delivery; a failed removal
        // only leaks one uniquely named file.
        if let Err(error) = tokio::fs::remove_file(&handle.path).await {
            tracing::warn!(
                target: TRACING_TARGET,
                artifact_id = %handle.id,
                error = %error,
                "Failed to remove delivered artifact"
            );
        }

        tracing::debug!(
            target: TRACING_TARGET,
            artifact_id = %handle.id,
            size = payload.len(),
            "Artifact taken for delivery"
        );

        Ok(Bytes::from(payload))
    }
}

/// Maps a MIME type to the artifact file extension.
fn extension_for(media_type: &str) -> &'static str {
    match media_type {
        "audio/mpeg" | "audio/mp3" => "mp3",
        "audio/wav" | "audio/x-wav" | "audio/wave" => "wav",
        "audio/flac" | "audio/x-flac" => "flac",
        "audio/ogg" => "ogg",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_and_take_round_trip() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = ArtifactStore::open(dir.path()).await?;

        let handle = store.store(b"RIFF fake audio", "audio/wav").await?;
        assert!(handle.path.exists());
        assert!(handle.file_name().ends_with(".wav"));

        let payload = store.take(&handle).await?;
        assert_eq!(&payload[..], b"RIFF fake audio");
        // Taken artifacts are removed from disk.
        assert!(!handle.path.exists());
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_stores_get_unique_paths() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = ArtifactStore::open(dir.path()).await?;

        let first = store.store(b"one", "audio/mpeg").await?;
        let second = store.store(b"two", "audio/mpeg").await?;
        assert_ne!(first.path, second.path);

        assert_eq!(&store.take(&first).await?[..], b"one");
        assert_eq!(&store.take(&second).await?[..], b"two");
        Ok(())
    }

    #[tokio::test]
    async fn take_of_missing_artifact_fails() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = ArtifactStore::open(dir.path()).await?;

        let handle = store.store(b"payload", "audio/flac").await?;
        store.take(&handle).await?;
        assert!(store.take(&handle).await.is_err());
        Ok(())
    }

    #[test]
    fn unknown_media_types_fall_back_to_bin() {
        assert_eq!(extension_for("application/octet-stream"), "bin");
        assert_eq!(extension_for("audio/mpeg"), "mp3");
    }
}
