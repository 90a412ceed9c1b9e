//! 錯誤類型
//!
//! 所有錯誤都是終止性的：回報一次後以 exit code 1 結束

use rust_i18n::t;
use std::path::PathBuf;
use thiserror::Error;

/// 外部工具（ffmpeg / ffprobe）執行失敗
#[derive(Error, Debug)]
pub enum ExternalToolError {
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with status {code:?}: {stderr}")]
    NonZeroExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl ExternalToolError {
    /// 給使用者看的診斷文字（stderr 或啟動失敗原因）
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::Launch { program, source } => format!("{program}: {source}"),
            Self::NonZeroExit { stderr, .. } => stderr.trim().to_string(),
        }
    }
}

/// ffprobe 輸出無法使用
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("incomplete ffprobe output: expected 3 lines, got {lines}")]
    IncompleteOutput { lines: usize },

    #[error("duration not available in the video file")]
    DurationUnavailable,

    #[error("invalid {field} value: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error(transparent)]
    Tool(#[from] ExternalToolError),
}

impl ProbeError {
    #[must_use]
    pub fn localized_message(&self) -> String {
        match self {
            Self::IncompleteOutput { .. } => t!("error.probe_incomplete").to_string(),
            Self::DurationUnavailable => t!("error.probe_duration").to_string(),
            Self::InvalidValue { field, value } => {
                t!("error.probe_value", field = field, value = value).to_string()
            }
            Self::Tool(e) => e.details(),
        }
    }
}

/// 使用者選擇的路徑無效（包含取消選擇）
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("input file does not exist: {}", path.display())]
    InputMissing { path: PathBuf },

    #[error("destination folder does not exist: {}", path.display())]
    OutputMissing { path: PathBuf },
}

#[derive(Error, Debug)]
pub enum PackagerError {
    #[error("could not retrieve video information: {0}")]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("no suitable resolutions for source height {height}")]
    NoSuitableResolution { height: u32 },

    #[error("ffmpeg failed at {resolution}p")]
    Rung {
        resolution: u32,
        #[source]
        source: ExternalToolError,
    },

    #[error("ffmpeg failed generating thumbnail {index}")]
    Thumbnail {
        index: usize,
        #[source]
        source: ExternalToolError,
    },

    #[error("invalid bitrate value: {bitrate}")]
    InvalidBitrate { bitrate: String },

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PackagerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 依目前語系產生錯誤對話框內容
    #[must_use]
    pub fn localized_message(&self) -> String {
        match self {
            Self::Probe(e) => t!("error.probe", message = e.localized_message()).to_string(),
            Self::Selection(SelectionError::InputMissing { .. }) => {
                t!("error.input_missing").to_string()
            }
            Self::Selection(SelectionError::OutputMissing { .. }) => {
                t!("error.output_missing").to_string()
            }
            Self::NoSuitableResolution { .. } => t!("error.no_resolutions").to_string(),
            Self::Rung { resolution, source } => t!(
                "error.rung_failed",
                resolution = resolution,
                details = source.details()
            )
            .to_string(),
            Self::Thumbnail { index, source } => t!(
                "error.thumbnail_failed",
                index = index,
                details = source.details()
            )
            .to_string(),
            Self::InvalidBitrate { bitrate } => {
                t!("error.invalid_bitrate", bitrate = bitrate).to_string()
            }
            Self::Io { path, source } => t!(
                "error.io",
                path = path.display(),
                message = source
            )
            .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_zero(stderr: &str) -> ExternalToolError {
        ExternalToolError::NonZeroExit {
            program: "ffmpeg".to_string(),
            code: Some(1),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_details_trims_stderr() {
        assert_eq!(non_zero("  Invalid data found\n").details(), "Invalid data found");
    }

    #[test]
    fn test_rung_message_contains_resolution_and_stderr() {
        let err = PackagerError::Rung {
            resolution: 720,
            source: non_zero("encoder not found"),
        };
        let message = err.localized_message();
        assert!(message.contains("720p"));
        assert!(message.contains("encoder not found"));
    }

    #[test]
    fn test_thumbnail_message_keeps_stderr() {
        let err = PackagerError::Thumbnail {
            index: 3,
            source: non_zero("Error while opening encoder\n"),
        };
        assert_eq!(err.to_string(), "ffmpeg failed generating thumbnail 3");
        let message = err.localized_message();
        assert!(message.contains('3'));
        assert!(message.contains("Error while opening encoder"));
    }

    #[test]
    fn test_probe_message_wraps_inner_reason() {
        let err = PackagerError::from(ProbeError::IncompleteOutput { lines: 2 });
        assert!(err.to_string().contains("expected 3 lines, got 2"));
        assert!(!err.localized_message().is_empty());
    }

    #[test]
    fn test_spanish_table_is_used_when_requested() {
        assert_eq!(
            t!("error.no_resolutions", locale = "es-ES"),
            "No se encontraron resoluciones adecuadas para el video."
        );
    }
}
