use crate::config::MAX_THUMBNAIL_COUNT;

/// 距離影片結尾保留的安全間隔（秒），避免 seek 到最後一幀之後
pub const END_EPSILON: f64 = 0.1;

/// 縮圖數量下限
pub const MIN_THUMBNAIL_COUNT: usize = 2;

/// 在整段影片上均勻取樣 `count` 個時間點
///
/// 第一個固定為 0，最後一個固定為 `duration - END_EPSILON`，
/// 中間的點均勻分佈並限制不超過結尾安全間隔。
/// `count` 限制在 2 到 `MAX_THUMBNAIL_COUNT` 之間。
#[must_use]
pub fn select_timestamps(duration: f64, count: usize) -> Vec<f64> {
    let count = count.clamp(MIN_THUMBNAIL_COUNT, MAX_THUMBNAIL_COUNT);
    let end = (duration - END_EPSILON).max(0.0);
    let interval = duration / (count - 1) as f64;

    let mut timestamps = Vec::with_capacity(count);
    timestamps.push(0.0);
    timestamps.extend((1..count - 1).map(|i| (interval * i as f64).min(end)));
    timestamps.push(end);
    timestamps
}

/// 秒數轉成 ffmpeg 的 `HH:MM:SS.mmm`
#[must_use]
pub fn seconds_to_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = seconds % 60.0;
    format!("{hours:02}:{minutes:02}:{secs:06.3}")
}
