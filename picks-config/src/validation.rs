use std::path::PathBuf;

use thiserror::Error;

use crate::models::Config;

/// A non-fatal configuration problem worth surfacing at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, message: impl Into<String>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint(
        &mut self,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Configuration that cannot be served.
#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("asset root {path} does not exist")]
    MissingAssetRoot { path: PathBuf },
    #[error("asset root {path} is not a directory")]
    AssetRootNotDirectory { path: PathBuf },
    #[error("entry document {path} must be a relative path inside the asset root")]
    EntryDocumentOutsideRoot { path: PathBuf },
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    let root = &config.assets.root;

    if !root.exists() {
        return Err(ConfigGuardRailError::MissingAssetRoot { path: root.clone() });
    }
    if !root.is_dir() {
        return Err(ConfigGuardRailError::AssetRootNotDirectory {
            path: root.clone(),
        });
    }

    let entry = &config.assets.entry_document;
    if entry.is_absolute()
        || entry
            .components()
            .any(|part| matches!(part, std::path::Component::ParentDir))
    {
        return Err(ConfigGuardRailError::EntryDocumentOutsideRoot {
            path: entry.clone(),
        });
    }

    if !config.assets.entry_path().is_file() {
        warnings.push_with_hint(
            format!(
                "Entry document {} not found under {}",
                entry.display(),
                root.display()
            ),
            "Requests for / and unknown paths will return 404 until it exists",
        );
    }

    if config.dev_mode && config.server.host == "0.0.0.0" {
        warnings.push(
            "DEV_MODE enables permissive CORS while listening on all interfaces",
        );
    }

    Ok(warnings)
}
