use crate::config::ManifestResolution;
use crate::error::PackagerError;
use crate::tools::VideoInfo;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

pub const MASTER_PLAYLIST_NAME: &str = "master.m3u8";

/// master.m3u8 中的一個串流項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RungDescriptor {
    pub resolution: u32,
    pub bitrate: &'static str,
    pub bandwidth: u64,
    pub uri: String,
    pub width: u32,
    pub height: u32,
}

impl RungDescriptor {
    #[must_use]
    pub fn new(resolution: u32, bitrate: &'static str, bandwidth: u64, width: u32) -> Self {
        Self {
            resolution,
            bitrate,
            bandwidth,
            uri: format!("{resolution}p/index.m3u8"),
            width,
            height: resolution,
        }
    }
}

/// RESOLUTION 欄位的寬度
#[must_use]
pub fn rung_width(resolution: u32, mode: ManifestResolution, source: &VideoInfo) -> u32 {
    match mode {
        ManifestResolution::Nominal => resolution * 16 / 9,
        ManifestResolution::Source => {
            // 與 scale=-2 相同：寬度 / 2 四捨五入後乘 2
            let height = u64::from(source.height);
            let half = (u64::from(source.width) * u64::from(resolution) + height) / (2 * height);
            u32::try_from(half * 2).unwrap_or(u32::MAX - 1).max(2)
        }
    }
}

#[must_use]
pub fn render_master_playlist(rungs: &[RungDescriptor]) -> String {
    let mut playlist = String::from("#EXTM3U\n#EXT-X-VERSION:3\n");
    for rung in rungs {
        let _ = writeln!(
            playlist,
            "#EXT-X-STREAM-INF:BANDWIDTH={},RESOLUTION={}x{}",
            rung.bandwidth, rung.width, rung.height
        );
        let _ = writeln!(playlist, "{}", rung.uri);
    }
    playlist
}

pub fn write_master_playlist(
    project_dir: &Path,
    rungs: &[RungDescriptor],
) -> Result<PathBuf, PackagerError> {
    let master_path = project_dir.join(MASTER_PLAYLIST_NAME);
    fs::write(&master_path, render_master_playlist(rungs))
        .map_err(|e| PackagerError::io(&master_path, e))?;
    Ok(master_path)
}
