use crate::error::ExternalToolError;
use log::debug;
use std::process::Command;

/// 外部工具執行結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }

    /// 非零結束碼轉成 `ExternalToolError::NonZeroExit`
    pub fn into_checked(self, program: &str) -> Result<Self, ExternalToolError> {
        if self.success() {
            Ok(self)
        } else {
            Err(ExternalToolError::NonZeroExit {
                program: program.to_string(),
                code: self.exit_code,
                stderr: self.stderr,
            })
        }
    }
}

/// 執行外部命令列工具並擷取輸出
///
/// 測試時以假的實作替換，只檢查組出來的參數
pub trait ToolRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput, ExternalToolError>;
}

/// 以 `std::process::Command` 執行，阻塞直到子程序結束
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolRunner;

impl ToolRunner for SystemToolRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput, ExternalToolError> {
        debug!("{program} {}", args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ExternalToolError::Launch {
                program: program.to_string(),
                source,
            })?;

        Ok(ToolOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_checked_keeps_successful_output() {
        let output = testing::ok("640\n").into_checked("ffprobe").unwrap();
        assert_eq!(output.stdout, "640\n");
    }

    #[test]
    fn test_into_checked_reports_stderr() {
        let err = testing::failed("No such file").into_checked("ffmpeg").unwrap_err();
        match err {
            ExternalToolError::NonZeroExit {
                program,
                code,
                stderr,
            } => {
                assert_eq!(program, "ffmpeg");
                assert_eq!(code, Some(1));
                assert_eq!(stderr, "No such file");
            }
            ExternalToolError::Launch { .. } => panic!("expected NonZeroExit"),
        }
    }

    #[test]
    fn test_killed_process_is_not_success() {
        let output = ToolOutput {
            exit_code: None,
            ..ToolOutput::default()
        };
        assert!(!output.success());
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let err = SystemToolRunner
            .run("hls-packager-no-such-tool", &[])
            .unwrap_err();
        assert!(matches!(err, ExternalToolError::Launch { .. }));
    }
}
