use crate::error::ProbeError;
use crate::tools::ToolRunner;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoInfo {
    pub width: u32,
    pub height: u32,
    pub duration_seconds: f64,
}

/// 組出 ffprobe 參數：只取第一條視訊串流的寬高與容器長度，純文字逐行輸出
#[must_use]
pub fn build_probe_args(path: &Path) -> Vec<String> {
    [
        "-v",
        "error",
        "-select_streams",
        "v:0",
        "-show_entries",
        "stream=width,height",
        "-show_entries",
        "format=duration",
        "-of",
        "default=noprint_wrappers=1:nokey=1",
    ]
    .iter()
    .map(ToString::to_string)
    .chain(std::iter::once(path.to_string_lossy().into_owned()))
    .collect()
}

/// 使用 ffprobe 取得影片資訊
pub fn get_video_info(
    runner: &dyn ToolRunner,
    ffprobe: &str,
    path: &Path,
) -> Result<VideoInfo, ProbeError> {
    let output = runner
        .run(ffprobe, &build_probe_args(path))?
        .into_checked(ffprobe)?;

    parse_probe_output(&output.stdout)
}

/// 解析三行輸出：寬、高、長度
pub fn parse_probe_output(stdout: &str) -> Result<VideoInfo, ProbeError> {
    let lines: Vec<&str> = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 3 {
        return Err(ProbeError::IncompleteOutput { lines: lines.len() });
    }

    let width = parse_dimension("width", lines[0])?;
    let height = parse_dimension("height", lines[1])?;

    let duration_str = lines[2];
    if duration_str.eq_ignore_ascii_case("n/a") {
        return Err(ProbeError::DurationUnavailable);
    }
    let duration_seconds = duration_str
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d > 0.0)
        .ok_or_else(|| ProbeError::InvalidValue {
            field: "duration",
            value: duration_str.to_string(),
        })?;

    Ok(VideoInfo {
        width,
        height,
        duration_seconds,
    })
}

fn parse_dimension(field: &'static str, value: &str) -> Result<u32, ProbeError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ProbeError::InvalidValue {
            field,
            value: value.to_string(),
        })
}
