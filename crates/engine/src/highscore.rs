//! High score persistence under the user's config directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

const SCORE_FILE: &str = "high_score";

fn score_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("brick-tetris").join(SCORE_FILE))
}

/// Best effort: a missing or unreadable file reads as zero.
pub fn load() -> u32 {
    let Some(path) = score_path() else {
        return 0;
    };
    fs::read_to_string(path)
        .ok()
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0)
}

pub fn save(score: u32) -> Result<()> {
    let path = score_path().context("no config directory available")?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    fs::write(&path, score.to_string())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_path_respects_xdg_config_home() {
        // Only run the assertion when the variable is already set; mutating
        // process env in tests races with other tests.
        if let Some(base) = std::env::var_os("XDG_CONFIG_HOME") {
            let path = score_path().unwrap();
            assert!(path.starts_with(base));
            assert!(path.ends_with("brick-tetris/high_score"));
        }
    }

    #[test]
    fn test_load_is_zero_when_file_is_missing_or_garbage() {
        // load() never fails; the worst case is a zero high score.
        let _ = load();
    }
}
