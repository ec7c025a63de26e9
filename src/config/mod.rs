use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ListError;
use crate::pagination::ResponsivePager;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub items_per_page: Option<usize>,
    pub max_pages: Option<usize>,
    pub narrow_max_pages: Option<usize>,
    #[serde(alias = "breakpoint")]
    pub narrow_breakpoint: Option<u32>,
    pub fetch_delay_ms: Option<u64>,
    pub output_format: Option<String>,
    pub no_color: Option<bool>,
}

impl ConfigFile {
    pub fn pager(&self) -> Result<ResponsivePager, ListError> {
        let defaults = ResponsivePager::default();
        let pager = ResponsivePager {
            narrow_breakpoint: self.narrow_breakpoint.unwrap_or(defaults.narrow_breakpoint),
            narrow_max_pages: self.narrow_max_pages.unwrap_or(defaults.narrow_max_pages),
            max_pages: self.max_pages.unwrap_or(defaults.max_pages),
        };
        if pager.max_pages == 0 || pager.narrow_max_pages == 0 {
            return Err(ListError::ZeroMaxPages);
        }
        Ok(pager)
    }

    pub fn items_per_page(&self) -> Result<usize, ListError> {
        match self.items_per_page {
            Some(0) => Err(ListError::ZeroItemsPerPage),
            Some(n) => Ok(n),
            None => Ok(DEFAULT_ITEMS_PER_PAGE),
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(home_dir()?.join(".visitor-lists").join("config.yml"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn load_config(path: &PathBuf, allow_missing: bool) -> Result<ConfigFile, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents)
            .map_err(|e| format!("failed to parse config '{}': {e}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(ConfigFile::default())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(format!("config file not found '{}'", path.display()))
        }
        Err(e) => Err(format!("failed to read config '{}': {e}", path.display())),
    }
}

pub fn parse_config(contents: &str) -> Result<ConfigFile, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str::<ConfigFile>(contents)
}

fn default_config_yaml() -> String {
    r#"# visitor-lists config
#
# Location (default):
#   ~/.visitor-lists/config.yml

# Rows per page
items_per_page: 10

# Page picker slots, and the narrower count used below the breakpoint
max_pages: 5
narrow_max_pages: 3
narrow_breakpoint: 640

# Simulated backend latency
fetch_delay_ms: 300

# Output (text or json)
output_format: text
no_color: false
"#
    .to_string()
}

pub fn ensure_default_config_file(path: &PathBuf) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    let parent = path
        .parent()
        .ok_or_else(|| format!("invalid config path '{}'", path.display()))?;
    std::fs::create_dir_all(parent).map_err(|e| {
        format!(
            "failed to create config directory '{}': {e}",
            parent.display()
        )
    })?;
    let contents = default_config_yaml();
    std::fs::write(path, contents)
        .map_err(|e| format!("failed to write config file '{}': {e}", path.display()))?;
    Ok(())
}
