//! Resource directory service
//!
//! Owns the directory exposed under `/resources`: creates it at startup,
//! lists its files and resolves request sub-paths without ever leaving it.
//! The bytes themselves are streamed by the HTTP layer.

use crate::error::{AppError, StartupError};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// The directory exposed read-only under `/resources`
#[derive(Debug, Clone)]
pub struct ResourceDirectory {
    root: PathBuf,
}

impl ResourceDirectory {
    /// Create the directory if it is absent and resolve it to an absolute path
    ///
    /// Idempotent: an existing directory and its contents are left untouched.
    ///
    /// # Arguments
    /// * `path` - Directory to prepare
    ///
    /// # Returns
    /// * `Ok(ResourceDirectory)` - Directory with a canonical root
    /// * `Err(StartupError)` - If the directory cannot be created or resolved
    pub async fn ensure(path: impl AsRef<Path>) -> Result<Self, StartupError> {
        let path = path.as_ref();
        let startup_error = |source| StartupError::ResourceDirectory {
            path: path.to_path_buf(),
            source,
        };

        fs::create_dir_all(path).await.map_err(startup_error)?;
        let root = fs::canonicalize(path).await.map_err(startup_error)?;

        Ok(Self { root })
    }

    /// Canonical root of the directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the regular files directly inside the directory
    ///
    /// Paths are absolute and sorted. Sub-directories are skipped.
    pub async fn list(&self) -> Result<Vec<String>, AppError> {
        let mut entries = fs::read_dir(&self.root).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            // metadata() follows symlinks, so a link to a file counts as a file
            let is_file = match fs::metadata(entry.path()).await {
                Ok(metadata) => metadata.is_file(),
                Err(e) => {
                    tracing::debug!(path = %entry.path().display(), error = %e, "Skipping unreadable entry");
                    false
                }
            };
            if is_file {
                files.push(entry.path().to_string_lossy().to_string());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Resolve a request sub-path to a servable file inside the directory
    ///
    /// The candidate path is built only from normal path components, then
    /// canonicalized and required to stay under the root. A sub-path with
    /// `..`, a root or a drive prefix is rejected outright; one that lands
    /// outside the root through a symlink is rejected after resolution.
    /// Hidden entries (any component starting with `.`) and files whose
    /// content type cannot be inferred from the extension are not served.
    ///
    /// # Arguments
    /// * `sub_path` - Path relative to the directory, as taken from the URL
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Canonical path of an existing regular file
    /// * `Err(AppError::PathTraversal)` - If the path escapes the directory
    /// * `Err(AppError::ResourceNotFound)` - If no servable file exists
    pub async fn resolve(&self, sub_path: &str) -> Result<PathBuf, AppError> {
        let mut candidate = self.root.clone();
        for component in Path::new(sub_path).components() {
            match component {
                Component::Normal(part) if part.to_string_lossy().starts_with('.') => {
                    tracing::debug!(path = %sub_path, "Hidden resource requested");
                    return Err(AppError::ResourceNotFound(sub_path.to_string()));
                }
                Component::Normal(part) => candidate.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    tracing::warn!(path = %sub_path, "Path traversal attempt blocked");
                    return Err(AppError::PathTraversal(sub_path.to_string()));
                }
            }
        }

        // Missing files are common, not worth more than debug
        let canonical = fs::canonicalize(&candidate).await.map_err(|e| {
            tracing::debug!(path = %sub_path, error = %e, "Resource not found");
            AppError::ResourceNotFound(sub_path.to_string())
        })?;

        if !canonical.starts_with(&self.root) {
            tracing::warn!(
                path = %sub_path,
                resolved = %canonical.display(),
                "Path traversal attempt blocked"
            );
            return Err(AppError::PathTraversal(sub_path.to_string()));
        }

        let metadata = fs::metadata(&canonical)
            .await
            .map_err(|_| AppError::ResourceNotFound(sub_path.to_string()))?;
        if !metadata.is_file() {
            return Err(AppError::ResourceNotFound(sub_path.to_string()));
        }

        if mime_guess::from_path(&canonical).first().is_none() {
            tracing::debug!(path = %sub_path, "Unknown content type, not serving");
            return Err(AppError::ResourceNotFound(sub_path.to_string()));
        }

        Ok(canonical)
    }
}
