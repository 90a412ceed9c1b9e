use std::path::{Path, PathBuf};

pub const PLAYLIST_NAME: &str = "index.m3u8";
pub const SEGMENT_PATTERN: &str = "segment_%03d.ts";
pub const SEGMENT_SECONDS: u32 = 4;
pub const GOP_SIZE: u32 = 48;

/// 單一解析度的 HLS 轉檔命令
pub struct HlsRungCommand {
    source_path: PathBuf,
    rung_dir: PathBuf,
    resolution: u32,
    bitrate: &'static str,
}

impl HlsRungCommand {
    #[must_use]
    pub fn new(source_path: &Path, rung_dir: &Path, resolution: u32, bitrate: &'static str) -> Self {
        Self {
            source_path: source_path.to_path_buf(),
            rung_dir: rung_dir.to_path_buf(),
            resolution,
            bitrate,
        }
    }

    #[must_use]
    pub fn playlist_path(&self) -> PathBuf {
        self.rung_dir.join(PLAYLIST_NAME)
    }

    #[must_use]
    pub fn segment_path(&self) -> PathBuf {
        self.rung_dir.join(SEGMENT_PATTERN)
    }

    /// GOP 固定且關閉場景偵測，讓每個解析度的切片邊界一致
    #[must_use]
    pub fn build_args(&self) -> Vec<String> {
        let gop = GOP_SIZE.to_string();
        let mut args: Vec<String> = [
            "-hide_banner",
            "-nostdin",
            "-y",
            "-i",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        args.push(self.source_path.to_string_lossy().into_owned());
        args.extend(
            [
                "-vf", &format!("scale=-2:{}", self.resolution),
                "-pix_fmt", "yuv420p",
                "-profile:v", "high",
                "-c:a", "aac",
                "-ar", "48000",
                "-b:a", "128k",
                "-c:v", "h264",
                "-crf", "20",
                "-g", &gop,
                "-keyint_min", &gop,
                "-sc_threshold", "0",
                "-b:v", self.bitrate,
                "-maxrate", self.bitrate,
                "-bufsize", "1000k",
                "-hls_time", &SEGMENT_SECONDS.to_string(),
                "-hls_playlist_type", "vod",
                "-hls_segment_filename",
            ]
            .iter()
            .map(ToString::to_string),
        );
        args.push(self.segment_path().to_string_lossy().into_owned());
        args.push(self.playlist_path().to_string_lossy().into_owned());

        args
    }
}
