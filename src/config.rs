use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pug::{LineConverter, ListAwareConverter, PlainParagraphConverter};

/// Config file read by the binary when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "docmirror.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
    pub converter: ConverterKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("../../tau_docs/content"),
            dest_root: PathBuf::from("."),
            converter: ConverterKind::default(),
        }
    }
}

/// Which line converter to apply to markup files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConverterKind {
    /// Every line as literal text under a single `p`
    Plain,
    /// `ul`/`li`/`p` blocks driven by bullets and blank lines
    #[default]
    ListAware,
}

impl ConverterKind {
    pub fn converter(self) -> &'static dyn LineConverter {
        match self {
            ConverterKind::Plain => &PlainParagraphConverter,
            ConverterKind::ListAware => &ListAwareConverter,
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).map_err(|source| Error::Config {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
