use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_THUMBNAIL_COUNT: usize = 256;

/// 縮圖數量上限（每張縮圖都是一次 ffmpeg 呼叫）
pub const MAX_THUMBNAIL_COUNT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EsEs => "es-ES",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::EsEs => write!(f, "Español"),
        }
    }
}

/// 選擇檔案與顯示訊息的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontEndKind {
    /// 原生檔案對話框與訊息視窗
    #[default]
    Dialog,
    /// 終端機提示，無需圖形環境
    Console,
}

/// master.m3u8 中 RESOLUTION 寬度的計算方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestResolution {
    /// 固定以 16:9 估算：`height * 16 / 9`
    #[default]
    Nominal,
    /// 依來源影片的實際長寬比計算
    Source,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub front_end: FrontEndKind,
    pub thumbnail_count: usize,
    pub ffmpeg: String,
    pub ffprobe: String,
    pub manifest_resolution: ManifestResolution,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            front_end: FrontEndKind::default(),
            thumbnail_count: DEFAULT_THUMBNAIL_COUNT,
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
            manifest_resolution: ManifestResolution::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}
