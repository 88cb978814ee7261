//! Configuration for the Personalized Picks asset host.
//!
//! Values are layered: explicit overrides (usually CLI flags), then the
//! process environment (optionally seeded from a `.env` file), then a TOML
//! file, then built-in defaults. Loading never silently accepts an unusable
//! asset root; softer problems are reported as [`ConfigWarnings`].

pub mod loader;
pub mod models;
pub mod sources;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigOverrides,
    error::ConfigLoadError,
};
pub use models::{AssetsConfig, Config, ConfigMetadata, ServerConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
