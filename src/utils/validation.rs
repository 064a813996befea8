use crate::config::RunConfig;
use crate::utils::error::{GeoError, Result};
use std::io::IsTerminal;

/// Argument checks performed before any remote call is made.
///
/// Mirrors the stdin-or-filepath rule: with no `--input`, data must be
/// piped in; an interactive terminal on stdin means there is nothing to
/// read.
pub fn check_args(cfg: &RunConfig) -> Result<()> {
    if cfg.key.trim().is_empty() {
        return Err(GeoError::MissingKey);
    }

    match &cfg.input {
        Some(path) => {
            if !path.exists() {
                return Err(GeoError::InputNotFound(path.display().to_string()));
            }
        }
        None => {
            if std::io::stdin().is_terminal() {
                return Err(GeoError::MissingInput);
            }
        }
    }

    Ok(())
}
