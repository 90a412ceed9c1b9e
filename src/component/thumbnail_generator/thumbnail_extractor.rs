use super::timestamp_selector::{seconds_to_timestamp, select_timestamps};
use crate::error::PackagerError;
use crate::tools::{ToolRunner, ensure_directory_exists, new_progress_bar};
use console::style;
use log::{debug, info};
use rust_i18n::t;
use std::path::{Path, PathBuf};

pub const THUMBNAIL_DIR: &str = "thumbnails";

/// 一般縮圖尺寸
pub const THUMBNAIL_SIZE: &str = "160x90";

/// 最後一張（結尾）縮圖刻意使用較小的尺寸
pub const END_CAP_SIZE: &str = "120x68";

/// 縮圖擷取任務
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailTask {
    pub video_path: PathBuf,
    pub timestamp: String,
    pub output_path: PathBuf,
    /// 從 1 開始
    pub index: usize,
    pub size: &'static str,
}

impl ThumbnailTask {
    /// 輸入前 seek，只解一幀並覆寫既有檔案
    #[must_use]
    pub fn build_args(&self) -> Vec<String> {
        vec![
            "-hide_banner".to_string(),
            "-nostdin".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-ss".to_string(),
            self.timestamp.clone(),
            "-i".to_string(),
            self.video_path.to_string_lossy().into_owned(),
            "-vframes".to_string(),
            "1".to_string(),
            "-s".to_string(),
            self.size.to_string(),
            "-f".to_string(),
            "webp".to_string(),
            "-y".to_string(),
            self.output_path.to_string_lossy().into_owned(),
        ]
    }
}

/// 建立縮圖任務列表，檔名為 `thumb{N}.webp`
#[must_use]
pub fn create_thumbnail_tasks(
    video_path: &Path,
    timestamps: &[f64],
    output_dir: &Path,
) -> Vec<ThumbnailTask> {
    let count = timestamps.len();
    timestamps
        .iter()
        .enumerate()
        .map(|(i, &timestamp)| {
            let index = i + 1;
            ThumbnailTask {
                video_path: video_path.to_path_buf(),
                timestamp: seconds_to_timestamp(timestamp),
                output_path: output_dir.join(format!("thumb{index}.webp")),
                index,
                size: if index < count {
                    THUMBNAIL_SIZE
                } else {
                    END_CAP_SIZE
                },
            }
        })
        .collect()
}

pub struct ThumbnailGenerator<'a> {
    runner: &'a dyn ToolRunner,
    ffmpeg: &'a str,
}

impl<'a> ThumbnailGenerator<'a> {
    #[must_use]
    pub const fn new(runner: &'a dyn ToolRunner, ffmpeg: &'a str) -> Self {
        Self { runner, ffmpeg }
    }

    /// 逐一擷取；任一張失敗即中止，已產生的縮圖保留
    pub fn generate_thumbnails(
        &self,
        video_path: &Path,
        project_dir: &Path,
        duration: f64,
        count: usize,
    ) -> Result<PathBuf, PackagerError> {
        let thumbnails_dir = project_dir.join(THUMBNAIL_DIR);
        ensure_directory_exists(&thumbnails_dir)?;

        let timestamps = select_timestamps(duration, count);
        let tasks = create_thumbnail_tasks(video_path, &timestamps, &thumbnails_dir);

        let progress_bar = new_progress_bar(tasks.len());
        for task in &tasks {
            progress_bar.set_message(
                t!(
                    "progress.thumbnail",
                    index = task.index,
                    timestamp = &task.timestamp
                )
                .to_string(),
            );
            if let Err(e) = self.extract_thumbnail(task) {
                progress_bar.abandon();
                return Err(e);
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        println!("{}", style(t!("progress.thumbnails_done")).green());
        info!(
            "{} thumbnails written to {}",
            tasks.len(),
            thumbnails_dir.display()
        );

        Ok(thumbnails_dir)
    }

    pub fn extract_thumbnail(&self, task: &ThumbnailTask) -> Result<(), PackagerError> {
        debug!(
            "擷取縮圖 {}: timestamp={}, size={}",
            task.index, task.timestamp, task.size
        );

        self.runner
            .run(self.ffmpeg, &task.build_args())
            .and_then(|output| output.into_checked(self.ffmpeg))
            .map_err(|source| PackagerError::Thumbnail {
                index: task.index,
                source,
            })?;

        Ok(())
    }
}
