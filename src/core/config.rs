use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration as YAML.
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    fn run_editor(editor: &str, path: &Path) -> bool {
        matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
    }

    /// Open `path` in the requested editor, falling back to `$EDITOR`/`$VISUAL`.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let fallback = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| fallback.clone());

        if Self::run_editor(&requested, path) {
            success(format!("Configuration file edited using '{requested}'"));
            return Ok(());
        }

        warning(format!(
            "Editor '{requested}' not available, falling back to '{fallback}'"
        ));

        if Self::run_editor(&fallback, path) {
            success(format!("Configuration file edited using fallback '{fallback}'"));
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "failed to edit configuration file with '{fallback}'"
            )))
        }
    }
}
