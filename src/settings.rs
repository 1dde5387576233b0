//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file in the user's configuration directory,
//! falling back to `settings.json` in the working directory when no such directory exists.
//!
//! Load failures fall back to default settings and are logged; they never stop the program.

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use xiangqi_engine::{Engine, Evaluator, GameRecord, OpeningBook, SearchConfig};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Everything the CLI needs to build an engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchConfig,
    pub evaluator: Evaluator,
    /// Game record files the opening book is built from
    pub book_records: Vec<PathBuf>,
    /// Plies taken from each book record
    pub book_plies: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            evaluator: Evaluator::default(),
            book_records: Vec::new(),
            book_plies: 10,
        }
    }
}

impl Settings {
    /// Load from `path`, or defaults when it is missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .context("read failed")
            .and_then(|contents| serde_json::from_str(&contents).context("parse failed"));
        match parsed {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "bad settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Load from the default location
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Build the opening book from the configured records
    ///
    /// One bad record fails the whole book, and the error names the file.
    pub fn build_book(&self) -> anyhow::Result<Option<OpeningBook>> {
        if self.book_records.is_empty() {
            return Ok(None);
        }
        let mut book = OpeningBook::new();
        for path in &self.book_records {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let record = GameRecord::from_text(&text)
                .with_context(|| format!("loading book record {}", path.display()))?;
            book.add_record(&record, self.book_plies)
                .with_context(|| format!("adding book record {}", path.display()))?;
        }
        info!(positions = book.len(), "opening book ready");
        Ok(Some(book))
    }

    /// Engine configured from these settings
    pub fn engine(&self) -> anyhow::Result<Engine> {
        let engine = Engine::new(self.search.clone()).with_evaluator(self.evaluator);
        Ok(match self.build_book()? {
            Some(book) => engine.with_book(Arc::new(book)),
            None => engine,
        })
    }
}

/// Path to `settings.json` in the user's configuration directory
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "Xiangqi") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}
