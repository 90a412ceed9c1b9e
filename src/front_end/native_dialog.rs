use super::{FrontEnd, VIDEO_EXTENSIONS};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use rust_i18n::t;
use std::path::PathBuf;

/// 原生檔案選擇與訊息視窗
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogFrontEnd;

impl FrontEnd for DialogFrontEnd {
    fn select_input(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title(t!("dialog.select_input"))
            .add_filter(t!("dialog.video_files"), &VIDEO_EXTENSIONS)
            .add_filter(t!("dialog.all_files"), &["*"])
            .pick_file()
    }

    fn select_output(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title(t!("dialog.select_output"))
            .pick_folder()
    }

    fn notify_error(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(t!("dialog.error_title"))
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn notify_info(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(t!("dialog.completed_title"))
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
