use crate::config::types::{Config, MAX_THUMBNAIL_COUNT, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

const SETTINGS_FILE: &str = "settings.json";

impl Config {
    /// 讀取工作目錄下的 settings.json，再套用環境變數覆寫
    #[must_use]
    pub fn new() -> Self {
        let mut settings = Self::load_settings(Path::new(SETTINGS_FILE)).unwrap_or_else(|e| {
            warn!("{e:#}, using default settings");
            UserSettings::default()
        });
        apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
        clamp_thumbnail_count(&mut settings);

        Self { settings }
    }

    pub fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}

/// `FFMPEG` / `FFPROBE` 指定工具路徑
pub fn apply_env_overrides(settings: &mut UserSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(ffmpeg) = lookup("FFMPEG").filter(|v| !v.trim().is_empty()) {
        settings.ffmpeg = ffmpeg;
    }
    if let Some(ffprobe) = lookup("FFPROBE").filter(|v| !v.trim().is_empty()) {
        settings.ffprobe = ffprobe;
    }
}

/// 過大的縮圖數量降到上限
pub fn clamp_thumbnail_count(settings: &mut UserSettings) {
    if settings.thumbnail_count > MAX_THUMBNAIL_COUNT {
        warn!(
            "thumbnail_count {} exceeds {MAX_THUMBNAIL_COUNT}, clamping",
            settings.thumbnail_count
        );
        settings.thumbnail_count = MAX_THUMBNAIL_COUNT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{FrontEndKind, Language, ManifestResolution};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Config::load_settings(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, UserSettings::default());
        assert_eq!(settings.thumbnail_count, 256);
        assert_eq!(settings.ffmpeg, "ffmpeg");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "language": "es-ES", "front_end": "console", "manifest_resolution": "source" }"#,
        )
        .unwrap();

        let settings = Config::load_settings(&path).unwrap();
        assert_eq!(settings.language, Language::EsEs);
        assert_eq!(settings.front_end, FrontEndKind::Console);
        assert_eq!(settings.manifest_resolution, ManifestResolution::Source);
        assert_eq!(settings.thumbnail_count, 256);
        assert_eq!(settings.ffprobe, "ffprobe");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_settings(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse settings"));
    }

    #[test]
    fn test_huge_thumbnail_count_is_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "thumbnail_count": 18446744073709551615 }"#).unwrap();

        let mut settings = Config::load_settings(&path).unwrap();
        assert_eq!(settings.thumbnail_count, usize::MAX);

        clamp_thumbnail_count(&mut settings);
        assert_eq!(settings.thumbnail_count, MAX_THUMBNAIL_COUNT);

        let mut settings = UserSettings::default();
        clamp_thumbnail_count(&mut settings);
        assert_eq!(settings.thumbnail_count, 256);
    }

    #[test]
    fn test_env_overrides() {
        let mut settings = UserSettings::default();
        apply_env_overrides(&mut settings, |key| match key {
            "FFMPEG" => Some("/opt/ffmpeg/bin/ffmpeg".to_string()),
            "FFPROBE" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(settings.ffmpeg, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(settings.ffprobe, "ffprobe");
    }
}
