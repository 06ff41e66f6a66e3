use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Path or name of the `zfs` binary
    pub zfs_bin: String,
    /// Color theme: default, dracula, gruvbox, nord
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Rows of the summary table, in display order.
    #[serde(default = "SummaryGroup::defaults")]
    pub groups: Vec<SummaryGroup>,
}

/// One summary row: a display label and the dataset it reads from.
///
/// Example in zfsstat.toml:
/// ```toml
/// [[summary.groups]]
/// label   = "ROOT"
/// dataset = "rpool/ROOT"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryGroup {
    pub label:   String,
    pub dataset: String,
}

impl SummaryGroup {
    pub fn new(label: &str, dataset: &str) -> Self {
        Self { label: label.to_string(), dataset: dataset.to_string() }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            SummaryGroup::new("ROOT",       "rpool/ROOT"),
            SummaryGroup::new("data",       "rpool/data"),
            SummaryGroup::new("var-lib-vz", "rpool/var-lib-vz"),
        ]
    }
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { zfs_bin: "zfs".into(), theme: "default".into() }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { groups: SummaryGroup::defaults() }
    }
}

// ── Load ──────────────────────────────────────────────────────────────

impl Config {
    /// Load the user config, falling back to defaults. Never writes the file.
    pub fn load() -> Self {
        let Some(path) = Config::config_path() else {
            debug!("no config directory, using defaults");
            return Config::default();
        };
        match Config::load_from(&path) {
            Ok(Some(c)) => c,
            Ok(None)    => Config::default(),
            Err(e)      => {
                warn!("ignoring config {}: {:#}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Read and parse `path`. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
        };
        let cfg: Config = toml::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(Some(cfg))
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("zfsstat").join("zfsstat.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(text.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn default_summary_groups_match_proxmox_layout() {
        let cfg = Config::default();
        let labels: Vec<&str> = cfg.summary.groups.iter()
            .map(|g| g.label.as_str())
            .collect();
        assert_eq!(labels, ["ROOT", "data", "var-lib-vz"]);
        assert_eq!(cfg.general.zfs_bin, "zfs");
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = Config::load_from(&dir.path().join("zfsstat.toml")).expect("load");
        assert_eq!(loaded, None);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = write_config("");
        let loaded = Config::load_from(file.path()).expect("load");
        assert_eq!(loaded, Some(Config::default()));
    }

    #[test]
    fn partial_general_section_keeps_other_defaults() {
        let file = write_config("[general]\nzfs_bin = \"/usr/sbin/zfs\"\n");
        let cfg = Config::load_from(file.path()).expect("load").expect("present");
        assert_eq!(cfg.general.zfs_bin, "/usr/sbin/zfs");
        assert_eq!(cfg.general.theme, "default");
        assert_eq!(cfg.summary.groups, SummaryGroup::defaults());
    }

    #[test]
    fn custom_summary_groups_replace_defaults() {
        let file = write_config(
            "[[summary.groups]]\nlabel = \"home\"\ndataset = \"tank/home\"\n",
        );
        let cfg = Config::load_from(file.path()).expect("load").expect("present");
        assert_eq!(cfg.summary.groups, vec![SummaryGroup::new("home", "tank/home")]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let file = write_config("[general\nzfs_bin = ");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing"));
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).expect("serialize");
        let cfg: Config = toml::from_str(&text).expect("parse");
        assert_eq!(cfg, Config::default());
    }
}
