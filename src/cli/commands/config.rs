use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use std::fs;
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
        let path = Config::config_file();

        if *print_config {
            print_effective(cfg, &path)?;
        }

        if *edit_config {
            if !path.exists() {
                fs::create_dir_all(Config::config_dir())?;
                fs::write(&path, serde_yaml::to_string(cfg)?)?;
                info(format!("Created {} with the current settings.", path.display()));
            }
            edit_with_fallback(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

/// Settings actually in use, which include `--history` overrides.
fn print_effective(cfg: &Config, path: &Path) -> AppResult<()> {
    header("Configuration");
    if path.exists() {
        println!("File: {}", path.display());
    } else {
        println!("File: {} (not created, showing defaults)", path.display());
    }
    println!();
    print!("{}", serde_yaml::to_string(cfg)?);
    Ok(())
}

/// `--editor`, then $EDITOR / $VISUAL, then the platform editor. Duplicates
/// are tried once.
fn editor_candidates(requested: Option<&str>) -> Vec<String> {
    let platform = if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    };

    let mut out: Vec<String> = Vec::new();
    let env_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .ok();
    for c in [requested.map(str::to_string), env_editor, Some(platform.to_string())]
        .into_iter()
        .flatten()
    {
        if !c.trim().is_empty() && !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

fn edit_with_fallback(path: &Path, requested: Option<&str>) -> AppResult<()> {
    for editor in editor_candidates(requested) {
        match Command::new(&editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{editor}'"));
                return Ok(());
            }
            Ok(s) => warning(format!("Editor '{editor}' exited with {s}, trying the next one")),
            Err(e) => warning(format!("Editor '{editor}' not available ({e}), trying the next one")),
        }
    }

    Err(AppError::Config(format!(
        "no editor could open {}",
        path.display()
    )))
}
