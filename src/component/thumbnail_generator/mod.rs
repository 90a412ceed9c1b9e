//! 預覽縮圖產生元件
//!
//! 在影片全長均勻取樣時間點，每個時間點以 ffmpeg 擷取一張 webp 縮圖

mod thumbnail_extractor;
mod timestamp_selector;

pub use thumbnail_extractor::{
    END_CAP_SIZE, THUMBNAIL_DIR, THUMBNAIL_SIZE, ThumbnailGenerator, ThumbnailTask,
    create_thumbnail_tasks,
};
pub use timestamp_selector::{
    END_EPSILON, MIN_THUMBNAIL_COUNT, seconds_to_timestamp, select_timestamps,
};
