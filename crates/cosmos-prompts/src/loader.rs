use std::path::{Path, PathBuf};

use cosmos_core::Mode;
use tracing::{debug, warn};

/// Template used when no mode keyword matched. Resolved against the
/// process working directory, not the instructions directory.
pub const DEFAULT_INSTRUCTIONS_PATH: &str = "../instructions_beginner.txt";

/// Resolves a mode to its instruction template on disk.
///
/// Templates are re-read on every call so edits take effect on the next
/// request. A missing or unreadable file is logged and treated as an empty
/// template; loading never fails.
#[derive(Debug, Clone)]
pub struct InstructionLoader {
    dir: PathBuf,
    default_path: PathBuf,
}

impl InstructionLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            default_path: PathBuf::from(DEFAULT_INSTRUCTIONS_PATH),
        }
    }

    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path = path.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, mode: Mode) -> PathBuf {
        let file = match mode {
            Mode::EarthJson => "instructions_Earth.txt",
            Mode::SearchCosmic => "instructions_cosmic.txt",
            Mode::Beginner => "instructions_beginner.txt",
            Mode::Advanced => "instructions_advanced.txt",
            Mode::Default => return self.default_path.clone(),
        };
        self.dir.join(file)
    }

    pub fn load(&self, mode: Mode) -> String {
        let path = self.path_for(mode);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!(mode = %mode, path = %path.display(), bytes = text.len(), "loaded instructions");
                text
            }
            Err(e) => {
                warn!(mode = %mode, path = %path.display(), "error loading instructions file: {e}");
                String::new()
            }
        }
    }

    /// Load by legacy label (`"Earth Json"`, `"beginner"`, ...).
    /// Unknown labels get the default template.
    pub fn load_label(&self, label: &str) -> String {
        self.load(Mode::from_label(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, InstructionLoader) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("instructions");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("instructions_Earth.txt"), "earth").unwrap();
        std::fs::write(dir.join("instructions_cosmic.txt"), "cosmic").unwrap();
        std::fs::write(dir.join("instructions_beginner.txt"), "beginner").unwrap();
        std::fs::write(dir.join("instructions_advanced.txt"), "advanced").unwrap();
        std::fs::write(tmp.path().join("fallback.txt"), "fallback").unwrap();
        let loader = InstructionLoader::new(&dir).with_default_path(tmp.path().join("fallback.txt"));
        (tmp, loader)
    }

    #[test]
    fn each_mode_reads_its_file() {
        let (_tmp, loader) = fixture();
        assert_eq!(loader.load(Mode::EarthJson), "earth");
        assert_eq!(loader.load(Mode::SearchCosmic), "cosmic");
        assert_eq!(loader.load(Mode::Beginner), "beginner");
        assert_eq!(loader.load(Mode::Advanced), "advanced");
        assert_eq!(loader.load(Mode::Default), "fallback");
    }

    #[test]
    fn labels_map_exactly() {
        let (_tmp, loader) = fixture();
        assert_eq!(loader.load_label("Earth Json"), "earth");
        assert_eq!(loader.load_label("Search cosmic"), "cosmic");
        assert_eq!(loader.load_label("beginner"), "beginner");
        assert_eq!(loader.load_label("advanced"), "advanced");
        assert_eq!(loader.load_label("Advanced"), "fallback");
        assert_eq!(loader.load_label("whatever"), "fallback");
    }

    #[test]
    fn missing_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let loader = InstructionLoader::new(tmp.path().join("nope"))
            .with_default_path(tmp.path().join("also-nope.txt"));
        assert_eq!(loader.load(Mode::Beginner), "");
        assert_eq!(loader.load(Mode::Default), "");
    }

    #[test]
    fn directory_in_place_of_file_is_empty() {
        let (tmp, loader) = fixture();
        let loader = loader.with_default_path(tmp.path());
        assert_eq!(loader.load(Mode::Default), "");
    }

    #[test]
    fn edits_visible_without_restart() {
        let (_tmp, loader) = fixture();
        assert_eq!(loader.load(Mode::Advanced), "advanced");
        std::fs::write(loader.path_for(Mode::Advanced), "advanced v2").unwrap();
        assert_eq!(loader.load(Mode::Advanced), "advanced v2");
    }

    #[test]
    fn default_path_constant() {
        let loader = InstructionLoader::new("instructions");
        assert_eq!(loader.path_for(Mode::Default), PathBuf::from(DEFAULT_INSTRUCTIONS_PATH));
        assert_eq!(
            loader.path_for(Mode::Beginner),
            Path::new("instructions").join("instructions_beginner.txt")
        );
    }
}
