mod ffprobe_info;
mod path_validator;
mod progress;
pub(crate) mod tool_runner;

pub use ffprobe_info::{VideoInfo, build_probe_args, get_video_info, parse_probe_output};
pub use path_validator::{
    ensure_directory_exists, validate_directory_exists, validate_input_file,
};
pub use progress::new_progress_bar;
pub use tool_runner::{SystemToolRunner, ToolOutput, ToolRunner};
