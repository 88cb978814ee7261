use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENTRY_DOCUMENT: &str = "preview.html";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    /// Relaxes CORS for local front-end development.
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetsConfig {
    /// Directory every request path is resolved against.
    pub root: PathBuf,
    /// Document served for `/` and for paths with no matching file,
    /// relative to `root`.
    pub entry_document: PathBuf,
}

impl AssetsConfig {
    pub fn entry_path(&self) -> PathBuf {
        self.root.join(&self.entry_document)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn normalize_root(&mut self) -> std::io::Result<()> {
        self.root = std::fs::canonicalize(&self.root)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
