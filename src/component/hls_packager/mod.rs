//! HLS 多解析度打包元件
//!
//! 流程：
//! A. 取得影片資訊（ffprobe）
//! B. 依來源高度決定解析度階梯
//! C. 每個解析度以 ffmpeg 轉出 HLS 切片與 index.m3u8
//! D. 寫入 master.m3u8

mod bitrate;
mod ffmpeg_command;
mod main;
mod master_playlist;
mod resolution_planner;
mod transcoder;

pub use bitrate::{DEFAULT_BITRATE, bitrate_for, bitrate_to_bandwidth};
pub use ffmpeg_command::{HlsRungCommand, PLAYLIST_NAME, SEGMENT_PATTERN, SEGMENT_SECONDS};
pub use main::HlsPackager;
pub use master_playlist::{
    MASTER_PLAYLIST_NAME, RungDescriptor, render_master_playlist, rung_width,
    write_master_playlist,
};
pub use resolution_planner::{STANDARD_RESOLUTIONS, determine_resolutions};
pub use transcoder::Transcoder;
