// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` for Line Mapper tools (uses platform config dir).

use directories::ProjectDirs;
use linemap_core::config::{ConfigError, ConfigStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Store configs as JSON files under a config directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Create a store rooted at the user config directory (e.g., `~/.config/linemap`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "linemap")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::at(proj.config_dir()))
    }

    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            base: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the config files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let path = self.path_for(key);
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use linemap_core::config::ConfigService;
    use linemap_core::settings::SETTINGS_KEY;
    use linemap_core::ViewerSettings;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsConfigStore::at(dir.path());
        assert!(matches!(store.load_raw("nope"), Err(ConfigError::NotFound)));
    }

    #[test]
    fn init_reports_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let svc = ConfigService::new(FsConfigStore::at(dir.path()));
        svc.init_viewer_settings(false).expect("init");
        assert!(svc.store().contains(SETTINGS_KEY).expect("contains"));
        assert!(matches!(
            svc.init_viewer_settings(false),
            Err(ConfigError::AlreadyExists(_))
        ));
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsConfigStore::at(dir.path().join("nested"));
        let svc = ConfigService::new(store);

        let mut settings = ViewerSettings::default();
        settings.stroke.width = 3.5;
        svc.save(SETTINGS_KEY, &settings).expect("save");

        assert!(svc.store().path_for(SETTINGS_KEY).is_file());
        assert_eq!(svc.viewer_settings().expect("load"), settings);
    }
}
