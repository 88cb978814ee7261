//! Product catalogs stored as JSON.
//!
//! A catalog file is either a bare array of products or an object with a
//! `products` array.

use std::path::{Path, PathBuf};

use picks_model::Product;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Products(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl From<CatalogFile> for Vec<Product> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Products(products)
            | CatalogFile::Wrapped { products } => products,
        }
    }
}

pub fn parse_products(raw: &str) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str::<CatalogFile>(raw).map(Into::into)
}

pub fn load_products(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        CatalogError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let products =
        parse_products(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), count = products.len(), "catalog loaded");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn accepts_bare_and_wrapped_lists() {
        let bare = parse_products(r#"[{"id": "1", "name": "A"}]"#).unwrap();
        assert_eq!(bare.len(), 1);

        let wrapped =
            parse_products(r#"{"products": [{"id": "1", "name": "A"}, {"id": "2", "name": "B"}]}"#)
                .unwrap();
        assert_eq!(wrapped[1].id, "2");
    }

    #[test]
    fn reports_path_on_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_products(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));

        let missing = load_products(Path::new("/definitely/not/here.json"));
        assert!(matches!(missing, Err(CatalogError::Io { .. })));
    }
}
