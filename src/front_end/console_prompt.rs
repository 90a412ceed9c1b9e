use super::FrontEnd;
use console::{Term, style};
use dialoguer::Input;
use log::warn;
use rust_i18n::t;
use std::path::PathBuf;

/// 終端機提示，適用於沒有圖形環境的機器
pub struct ConsoleFrontEnd {
    term: Term,
}

impl ConsoleFrontEnd {
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn prompt_path(&self, prompt: &str) -> Option<PathBuf> {
        let path: String = match Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
        {
            Ok(path) => path,
            Err(e) => {
                warn!("Prompt failed: {e}");
                return None;
            }
        };

        let path = path.trim().trim_matches('"');
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}

impl Default for ConsoleFrontEnd {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontEnd for ConsoleFrontEnd {
    fn select_input(&self) -> Option<PathBuf> {
        self.prompt_path(&t!("console.input_prompt"))
    }

    fn select_output(&self) -> Option<PathBuf> {
        self.prompt_path(&t!("console.output_prompt"))
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{} {}", style(t!("console.error_prefix")).red().bold(), message);
    }

    fn notify_info(&self, message: &str) {
        println!("\n{}", style(message).green().bold());
    }
}
