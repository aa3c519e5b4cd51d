use std::{io, path::PathBuf};

/// Resolves pre-authored documents from the templates directory.
///
/// Documents are read from disk on every request. There is no caching, so a
/// document replaced (or removed) underneath a running server is observed by
/// the next request.
#[derive(Debug)]
pub struct TemplateStore {
    dir: PathBuf,
    shell_document: String,
}

impl TemplateStore {
    pub fn new(dir: PathBuf, shell_document: String) -> Self {
        Self {
            dir,
            shell_document,
        }
    }

    /// Read the shell document. No variable substitution is performed.
    pub async fn load_shell(&self) -> Result<String, TemplateError> {
        let path = self.dir.join(&self.shell_document);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| TemplateError::Resolution { path, source })
    }
}

#[derive(thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to resolve template at {path:?}")]
    Resolution { path: PathBuf, source: io::Error },
}

impl std::fmt::Debug for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
