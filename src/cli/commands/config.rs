use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                cfg.save()?;
            }
            edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
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
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

/// Try the requested editor, then fall back to the platform default.
fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let first = requested.unwrap_or(&fallback);

    if run_editor(first, path) {
        success(format!("Configuration file edited using '{}'", first));
        return Ok(());
    }

    if first != fallback {
        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            first, fallback
        ));
        if run_editor(&fallback, path) {
            success(format!("Configuration file edited using '{}'", fallback));
            return Ok(());
        }
    }

    Err(AppError::Config(format!(
        "Failed to edit configuration file {}",
        path.display()
    )))
}
