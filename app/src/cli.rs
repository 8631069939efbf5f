use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{AppError, AppResult};

/// Preview the outputs of a video script frame by frame.
#[derive(Parser, Debug)]
#[command(name = "vspreview", version, about)]
pub struct Cli {
    /// Path to the script manifest
    #[arg(value_name = "SCRIPT_PATH")]
    pub script_path: Option<PathBuf>,

    /// Output selected at startup
    #[arg(long, value_name = "INDEX")]
    pub output: Option<usize>,

    /// Frame shown at startup
    #[arg(long, value_name = "N")]
    pub frame: Option<u64>,
}

/// Makes the script path absolute. Fails when it is missing or does not exist.
pub fn resolve_script_path(path: Option<&Path>) -> AppResult<PathBuf> {
    let path = path.ok_or(AppError::MissingScriptPath)?;
    std::fs::canonicalize(path).map_err(|_| AppError::ScriptPath(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_and_flags() {
        let cli = Cli::try_parse_from(["vspreview", "clip.toml", "--output", "2", "--frame", "120"])
            .unwrap();
        assert_eq!(cli.script_path, Some(PathBuf::from("clip.toml")));
        assert_eq!(cli.output, Some(2));
        assert_eq!(cli.frame, Some(120));
    }

    #[test]
    fn script_path_is_optional_for_the_parser() {
        let cli = Cli::try_parse_from(["vspreview"]).unwrap();
        assert!(cli.script_path.is_none());
    }

    #[test]
    fn missing_script_path() {
        let err = resolve_script_path(None).unwrap_err();
        assert_eq!(err.to_string(), "Script path required.");
    }

    #[test]
    fn nonexistent_script_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/script.toml");
        let err = resolve_script_path(Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::ScriptPath(_)));
        assert_eq!(err.to_string(), "Script path is invalid.");
    }

    #[test]
    fn existing_script_path_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("script.toml");
        std::fs::write(&script, "").unwrap();
        let resolved = resolve_script_path(Some(&script)).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("script.toml"));
    }
}
