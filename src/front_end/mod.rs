//! 使用者互動介面
//!
//! 流程本身只依賴 `FrontEnd`，原生對話框與終端機提示可以互換，測試時也能以假的實作替代

mod console_prompt;
mod native_dialog;

pub use console_prompt::ConsoleFrontEnd;
pub use native_dialog::DialogFrontEnd;

use crate::config::FrontEndKind;
use std::path::PathBuf;

/// 可挑選的影片副檔名
pub const VIDEO_EXTENSIONS: [&str; 8] = ["mp4", "mkv", "avi", "mov", "flv", "wmv", "webm", "ts"];

pub trait FrontEnd {
    /// 取消或未選擇時回傳 `None`
    fn select_input(&self) -> Option<PathBuf>;
    fn select_output(&self) -> Option<PathBuf>;
    fn notify_error(&self, message: &str);
    fn notify_info(&self, message: &str);
}

#[must_use]
pub fn create_front_end(kind: FrontEndKind) -> Box<dyn FrontEnd> {
    match kind {
        FrontEndKind::Dialog => Box::new(DialogFrontEnd),
        FrontEndKind::Console => Box::new(ConsoleFrontEnd::new()),
    }
}
