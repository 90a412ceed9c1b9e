use super::bitrate::{bitrate_for, bitrate_to_bandwidth};
use super::ffmpeg_command::HlsRungCommand;
use super::master_playlist::{RungDescriptor, rung_width, write_master_playlist};
use crate::config::ManifestResolution;
use crate::error::PackagerError;
use crate::tools::{ToolRunner, VideoInfo, ensure_directory_exists, new_progress_bar};
use console::style;
use log::info;
use rust_i18n::t;
use std::path::{Path, PathBuf};

/// 依序轉出每個解析度，全部成功後寫入 master.m3u8
pub struct Transcoder<'a> {
    runner: &'a dyn ToolRunner,
    ffmpeg: &'a str,
    manifest_resolution: ManifestResolution,
}

impl<'a> Transcoder<'a> {
    #[must_use]
    pub const fn new(
        runner: &'a dyn ToolRunner,
        ffmpeg: &'a str,
        manifest_resolution: ManifestResolution,
    ) -> Self {
        Self {
            runner,
            ffmpeg,
            manifest_resolution,
        }
    }

    /// 任一解析度失敗即中止；已完成的輸出保留在磁碟上
    pub fn transcode_video(
        &self,
        input_path: &Path,
        project_dir: &Path,
        resolutions: &[u32],
        source: &VideoInfo,
    ) -> Result<PathBuf, PackagerError> {
        let progress_bar = new_progress_bar(resolutions.len());
        let mut rungs = Vec::with_capacity(resolutions.len());

        for &resolution in resolutions {
            progress_bar.set_message(t!("progress.rung", resolution = resolution).to_string());
            let rung = self.transcode_rung(input_path, project_dir, resolution, source);
            match rung {
                Ok(rung) => rungs.push(rung),
                Err(e) => {
                    progress_bar.abandon();
                    return Err(e);
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        let master_path = write_master_playlist(project_dir, &rungs)?;
        println!("{}", style(t!("progress.master_created")).green());
        info!("Master playlist written: {}", master_path.display());

        Ok(master_path)
    }

    fn transcode_rung(
        &self,
        input_path: &Path,
        project_dir: &Path,
        resolution: u32,
        source: &VideoInfo,
    ) -> Result<RungDescriptor, PackagerError> {
        let rung_dir = project_dir.join(format!("{resolution}p"));
        ensure_directory_exists(&rung_dir)?;

        let bitrate = bitrate_for(resolution);
        let bandwidth =
            bitrate_to_bandwidth(bitrate).ok_or_else(|| PackagerError::InvalidBitrate {
                bitrate: bitrate.to_string(),
            })?;

        info!("Processing resolution {resolution}p at {bitrate}");
        let command = HlsRungCommand::new(input_path, &rung_dir, resolution, bitrate);
        let args = command.build_args();

        self.runner
            .run(self.ffmpeg, &args)
            .and_then(|output| output.into_checked(self.ffmpeg))
            .map_err(|source| PackagerError::Rung { resolution, source })?;

        Ok(RungDescriptor::new(
            resolution,
            bitrate,
            bandwidth,
            rung_width(resolution, self.manifest_resolution, source),
        ))
    }
}
