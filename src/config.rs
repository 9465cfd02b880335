//! Rover configuration.
//!
//! Loaded from `~/.rover/config.toml`, or from `--config <PATH>` when given.
//! Every key is optional; a missing default file means all defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Rover configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Number of cells along x.
    pub world_width: i64,

    /// Number of cells along y.
    pub world_height: i64,

    /// Cells shown per side in a map viewport.
    pub grid_size: u32,

    /// Log filter used when `ROVER_LOG` is not set (e.g. `"warn"`, `"rover=debug"`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: 200,
            world_height: 200,
            grid_size: 20,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from `explicit` if given, otherwise from the default path.
    ///
    /// An explicit path must exist. The default path may be absent,
    /// in which case defaults are returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        if let Some(path) = explicit {
            let contents = fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            return Self::parse(&contents, path);
        }

        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents, &path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!("failed to read {}: {e}", path.display())),
        }
    }

    /// The default config file path: `~/.rover/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".rover").join("config.toml"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, String> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        if config.world_width <= 0 || config.world_height <= 0 {
            return Err(format!(
                "world dimensions must be positive in {} (got {}x{})",
                path.display(),
                config.world_width,
                config.world_height
            ));
        }

        Ok(config)
    }
}
