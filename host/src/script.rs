//! Loading the input script the runner replays.

use std::io::Read;

use duel_core::MatchScript;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script from {source_name}: {error}")]
    Read {
        source_name: String,
        error: std::io::Error,
    },
    #[error("malformed script JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Script path from the first argument, or the whole of stdin.
pub fn load_script(path: Option<&str>) -> Result<MatchScript, ScriptError> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|error| ScriptError::Read {
            source_name: path.to_string(),
            error,
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|error| ScriptError::Read {
                    source_name: "stdin".to_string(),
                    error,
                })?;
            buf
        }
    };
    parse_script(&json)
}

pub fn parse_script(json: &str) -> Result<MatchScript, ScriptError> {
    Ok(serde_json::from_str(json)?)
}
