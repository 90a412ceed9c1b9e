use super::resolution_planner::determine_resolutions;
use super::transcoder::Transcoder;
use crate::component::thumbnail_generator::ThumbnailGenerator;
use crate::config::UserSettings;
use crate::error::PackagerError;
use crate::front_end::FrontEnd;
use crate::tools::{
    ToolRunner, ensure_directory_exists, get_video_info, validate_directory_exists,
    validate_input_file,
};
use console::style;
use log::{error, info};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// HLS 打包流程
///
/// 依序執行，任何一步失敗即中止：
/// 1. 選擇影片檔
/// 2. 選擇輸出資料夾
/// 3. 取得影片資訊（ffprobe）
/// 4. 決定解析度階梯
/// 5. 逐一轉檔並寫入 master.m3u8
/// 6. 擷取預覽縮圖
pub struct HlsPackager<'a> {
    settings: &'a UserSettings,
    runner: &'a dyn ToolRunner,
    front_end: &'a dyn FrontEnd,
}

impl<'a> HlsPackager<'a> {
    #[must_use]
    pub const fn new(
        settings: &'a UserSettings,
        runner: &'a dyn ToolRunner,
        front_end: &'a dyn FrontEnd,
    ) -> Self {
        Self {
            settings,
            runner,
            front_end,
        }
    }

    /// 執行流程並透過前端回報結果，回傳行程結束碼
    pub fn run_and_report(&self) -> ExitCode {
        match self.run() {
            Ok(project_dir) => {
                let path = project_dir.display().to_string();
                info!("Process completed: {path}");
                self.front_end
                    .notify_info(&t!("dialog.completed", path = &path));
                ExitCode::SUCCESS
            }
            Err(e) => {
                let message = e.localized_message();
                error!("{e}: {message}");
                self.front_end.notify_error(&message);
                ExitCode::FAILURE
            }
        }
    }

    /// 成功時回傳專案輸出資料夾
    pub fn run(&self) -> Result<PathBuf, PackagerError> {
        println!("{}", style(t!("progress.selecting_input")).dim());
        let input_path = self.front_end.select_input().unwrap_or_default();
        validate_input_file(&input_path)?;

        println!("{}", style(t!("progress.selecting_output")).dim());
        let output_dir = self.front_end.select_output().unwrap_or_default();
        validate_directory_exists(&output_dir)?;

        self.package(&input_path, &output_dir)
    }

    /// 已選好路徑之後的部分：probe → 規劃 → 轉檔 → 縮圖
    pub fn package(&self, input_path: &Path, output_dir: &Path) -> Result<PathBuf, PackagerError> {
        println!("{}", style(t!("progress.probing")).dim());
        let video_info = get_video_info(self.runner, &self.settings.ffprobe, input_path)?;
        println!(
            "{}",
            t!(
                "progress.video_info",
                width = video_info.width,
                height = video_info.height,
                duration = video_info.duration_seconds
            )
        );

        let resolutions = determine_resolutions(video_info.height);
        if resolutions.is_empty() {
            return Err(PackagerError::NoSuitableResolution {
                height: video_info.height,
            });
        }
        println!(
            "{}",
            t!("progress.resolutions", list = format!("{resolutions:?}"))
        );

        let project_dir = output_dir.join(project_name(input_path));
        ensure_directory_exists(&project_dir)?;
        info!("Project directory: {}", project_dir.display());

        println!("{}", style(t!("progress.transcoding")).cyan());
        Transcoder::new(
            self.runner,
            &self.settings.ffmpeg,
            self.settings.manifest_resolution,
        )
        .transcode_video(input_path, &project_dir, &resolutions, &video_info)?;

        println!("{}", style(t!("progress.thumbnails")).cyan());
        ThumbnailGenerator::new(self.runner, &self.settings.ffmpeg).generate_thumbnails(
            input_path,
            &project_dir,
            video_info.duration_seconds,
            self.settings.thumbnail_count,
        )?;

        Ok(project_dir)
    }
}

/// 專案名稱為輸入檔去掉副檔名
fn project_name(input_path: &Path) -> String {
    input_path.file_stem().map_or_else(
        || "output".to_string(),
        |s| s.to_string_lossy().to_string(),
    )
}
