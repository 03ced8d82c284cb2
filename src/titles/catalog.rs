use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{ReelError, ReelResult};

pub const SURAH_NAMES_FILE: &str = "surah_names.json";
pub const RECITER_NAMES_FILE: &str = "reciter_names.json";

/// A name in both display languages. Either side may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NamePair {
    #[serde(default)]
    pub arabic: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct SurahFile {
    #[serde(default)]
    surahs: BTreeMap<String, NamePair>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ReciterFile {
    #[serde(default)]
    reciters: BTreeMap<String, NamePair>,
}

/// Chapter names keyed by chapter number, reciter names keyed by normalized reciter id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameCatalog {
    surahs: BTreeMap<u32, NamePair>,
    reciters: BTreeMap<String, NamePair>,
}

impl NameCatalog {
    /// Parse `{"surahs": {"1": {...}}}` and `{"reciters": {"name": {...}}}` documents.
    pub fn from_readers<S: std::io::Read, R: std::io::Read>(
        surahs: S,
        reciters: R,
    ) -> ReelResult<Self> {
        let s: SurahFile = serde_json::from_reader(surahs)
            .map_err(|e| ReelError::serde(format!("parse surah names: {e}")))?;
        let r: ReciterFile = serde_json::from_reader(reciters)
            .map_err(|e| ReelError::serde(format!("parse reciter names: {e}")))?;

        let mut catalog = Self::default();
        for (key, names) in s.surahs {
            let n: u32 = key.trim().parse().map_err(|_| {
                ReelError::serde(format!("surah key '{key}' is not a chapter number"))
            })?;
            catalog.surahs.insert(n, names);
        }
        for (key, names) in r.reciters {
            catalog.reciters.insert(normalize_reciter_key(&key), names);
        }
        Ok(catalog)
    }

    /// Load both tables from `dir`. A missing file yields an empty table and a warning.
    pub fn from_dir(dir: impl AsRef<Path>) -> ReelResult<Self> {
        let dir = dir.as_ref();
        let surahs = read_or_empty(&dir.join(SURAH_NAMES_FILE))?;
        let reciters = read_or_empty(&dir.join(RECITER_NAMES_FILE))?;
        let catalog = Self::from_readers(surahs.as_bytes(), reciters.as_bytes())?;
        tracing::debug!(
            surahs = catalog.surahs.len(),
            reciters = catalog.reciters.len(),
            "name catalog loaded"
        );
        Ok(catalog)
    }

    pub fn surah(&self, number: u32) -> Option<&NamePair> {
        self.surahs.get(&number)
    }

    /// Look up a reciter by raw id; the id is normalized first.
    pub fn reciter(&self, raw: &str) -> Option<&NamePair> {
        self.reciters.get(&normalize_reciter_key(raw))
    }
}

fn read_or_empty(path: &Path) -> ReelResult<String> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "name file not found, using fallbacks");
        return Ok("{}".to_owned());
    }
    let mut s = String::new();
    let f = File::open(path)
        .map_err(|e| ReelError::validation(format!("open '{}': {e}", path.display())))?;
    std::io::Read::read_to_string(&mut BufReader::new(f), &mut s)
        .map_err(|e| ReelError::validation(format!("read '{}': {e}", path.display())))?;
    Ok(s)
}

/// Lowercase, trim and turn underscores into spaces: `"Abdul_Basit "` -> `"abdul basit"`.
pub fn normalize_reciter_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace('_', " ")
}

#[cfg(test)]
#[path = "../../tests/unit/titles/catalog.rs"]
mod tests;
