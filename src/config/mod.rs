//! Configuration module
//!
//! Resolves the profile directory and loads `config.json` and `template.md`
//! from it.

mod types;

pub use types::{Config, Profile};

use crate::error::{GoweekError, Result};
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the profile directory under the user's home
const PROFILE_DIR_NAME: &str = ".goweek";

/// Resolve the profile directory from an explicit override or the user's home
///
/// `USERPROFILE` wins over `HOME` so the same layout works on Windows and Unix.
pub fn resolve_profile(
    explicit: Option<PathBuf>,
    userprofile: Option<OsString>,
    home: Option<OsString>,
) -> Result<Profile> {
    if let Some(dir) = explicit {
        return Ok(Profile::new(dir));
    }

    let home = userprofile
        .filter(|v| !v.is_empty())
        .or(home.filter(|v| !v.is_empty()))
        .ok_or_else(|| {
            GoweekError::Config(
                "Cannot locate profile directory: neither USERPROFILE nor HOME is set".to_string(),
            )
        })?;

    Ok(Profile::new(PathBuf::from(home).join(PROFILE_DIR_NAME)))
}

/// Load configuration from a JSON file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        GoweekError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = serde_json::from_str(&content)?;
    debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Read the report template from the profile directory
pub fn load_template(profile: &Profile) -> Result<String> {
    let path = profile.template_path();
    let template = fs::read_to_string(&path).map_err(|e| {
        GoweekError::Template(format!(
            "Cannot read template from '{}': {}",
            path.display(),
            e
        ))
    })?;

    debug!("Loaded template from {} ({} bytes)", path.display(), template.len());
    Ok(template)
}
