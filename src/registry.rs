//! Language-pack discovery and per-language resource caching.
//!
//! A pack is a directory under the pack root named after its language code
//! and containing an article database (`articles.bin`, or the older
//! `articles_<code>.bin` spelling). The registry scans once at open time;
//! the heavyweight per-language objects (config, title index, image index)
//! are opaque to this crate and live in a [`LanguageCache`] keyed by the
//! folded language code, constructed at most once per code.

use crate::case;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::lang;

/// Fold a language code the same way every lookup in the engine does.
fn fold_code(code: &str) -> String {
    let folded: Vec<u8> = code.bytes().map(case::fold_byte).collect();
    String::from_utf8_lossy(&folded).into_owned()
}

fn has_article_db(dir: &Path, code: &str) -> bool {
    let plain = dir.join("articles.bin");
    if plain.is_file() {
        return true;
    }
    dir.join(format!("articles_{code}.bin")).is_file()
}

/// The set of language packs installed under one root directory.
pub struct Registry {
    root: PathBuf,
    default_language: String,
    installed: Vec<String>,
}

impl Registry {
    /// Scan `root` for installed packs.
    ///
    /// An unreadable root is not an error, just an empty registry. When the
    /// preferred default language is not installed, the first pack found
    /// takes its place.
    pub fn open(root: impl Into<PathBuf>, preferred_default: &str) -> Self {
        let root = root.into();
        let installed = Self::scan(&root);
        let preferred = fold_code(preferred_default);
        let default_language = if installed.iter().any(|code| *code == preferred) {
            preferred
        } else {
            installed.first().cloned().unwrap_or_default()
        };
        debug!(
            root = %root.display(),
            packs = installed.len(),
            default = %default_language,
            "pack registry opened"
        );
        Registry { root, default_language, installed }
    }

    fn scan(root: &Path) -> Vec<String> {
        let entries = match std::fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "pack root not readable");
                return Vec::new();
            }
        };
        let mut found = Vec::new();
        for entry in entries.flatten() {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.len() < 2 || name.starts_with('.') {
                continue;
            }
            // Symlinked pack directories count too, so stat the path rather
            // than trusting the dirent type.
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if has_article_db(&path, &name) {
                debug!(
                    code = %name,
                    language = lang::lang_name(&name).unwrap_or("unknown"),
                    "found language pack"
                );
                found.push(name);
            }
        }
        found.sort_unstable();
        found
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Codes of every installed pack, sorted.
    pub fn installed_languages(&self) -> &[String] {
        &self.installed
    }

    pub fn is_installed(&self, code: &str) -> bool {
        let folded = fold_code(code);
        self.installed.iter().any(|installed| *installed == folded)
    }

    /// The default language code; empty when no pack is installed.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Directory of one pack, whether or not it is installed.
    pub fn pack_path(&self, code: &str) -> PathBuf {
        self.root.join(fold_code(code))
    }
}

/// Per-language resource cache.
///
/// Holds at most one `T` per folded language code for its whole lifetime and
/// drops them all together. `T` stays opaque: the initialiser receives the
/// folded code and builds whatever index or config object the caller needs.
pub struct LanguageCache<T> {
    entries: Mutex<HashMap<String, Arc<T>>>,
}

impl<T> Default for LanguageCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LanguageCache<T> {
    pub fn new() -> Self {
        Self { entries: Mutex::new(HashMap::new()) }
    }

    /// Fetch the resource for `code`, constructing it on first use.
    ///
    /// The lock is not held while `init` runs, so a slow loader does not
    /// block lookups of other languages; if two callers race on the same
    /// code, the first insert wins and the loser's instance is dropped.
    pub fn get_or_insert_with(&self, code: &str, init: impl FnOnce(&str) -> T) -> Arc<T> {
        let folded = fold_code(code);
        if let Some(existing) = self.entries.lock().expect("cache lock poisoned").get(&folded) {
            return Arc::clone(existing);
        }
        let fresh = Arc::new(init(&folded));
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        Arc::clone(entries.entry(folded).or_insert(fresh))
    }

    /// Number of resources constructed so far.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
