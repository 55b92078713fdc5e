// ============================================
// src/settings.rs
// 設定ファイル (settings.json) の読み込み
// ============================================

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::session::DEFAULT_AUTO_ADVANCE;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// せいかいのあと次へ進むまでのミリ秒
    pub auto_advance_ms: u64,
    /// ベルを鳴らすか
    pub sound: bool,
    /// 国リストのJSON (なければ組み込みのリスト)
    pub catalog: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_advance_ms: DEFAULT_AUTO_ADVANCE.as_millis() as u64,
            sound: true,
            catalog: None,
        }
    }
}

impl Settings {
    // MARK:設定ファイルのパスを取得する関数
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("jp", "Fukumoto0141", "FLAG_QUIZ")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// 指定されたファイル、なければ標準の場所から読み込む
    /// 標準の場所にファイルがなければ初期値
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::read(&path),
            _ => {
                log::debug!("no settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            ConfigError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        log::info!("settings loaded from {}", path.display());
        Ok(settings)
    }

    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_advance_after_two_seconds() {
        let settings = Settings::default();
        assert_eq!(settings.auto_advance(), Duration::from_secs(2));
        assert!(settings.sound);
        assert!(settings.catalog.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sound": false}}"#).unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();

        assert!(!settings.sound);
        assert_eq!(settings.auto_advance_ms, 2000);
    }

    #[test]
    fn full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"auto_advance_ms": 750, "sound": true, "catalog": "/tmp/flags.json"}}"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.auto_advance(), Duration::from_millis(750));
        assert_eq!(settings.catalog, Some(PathBuf::from("/tmp/flags.json")));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/definitely/not/settings.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn broken_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ sound: ").unwrap();

        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }
}
