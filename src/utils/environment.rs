use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable naming the directory that holds the index JSON files
/// and the manual PDFs.
pub const MANUALS_DIR_ENV: &str = "MANUAL_SEARCH_DIR";

/// Get the manuals directory: `$MANUAL_SEARCH_DIR` if set, otherwise the
/// current working directory.
pub fn get_manuals_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(MANUALS_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    env::current_dir().context("Cannot determine current directory")
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_env_var_overrides_current_dir() {
        // Save original value
        let original = env::var(MANUALS_DIR_ENV).ok();

        // SAFETY: Setting environment variables in tests is safe as long as:
        // 1. Tests don't run in parallel accessing the same env var (we restore it)
        // 2. No other threads are reading this variable concurrently
        // 3. We restore the original value afterwards
        unsafe {
            env::set_var(MANUALS_DIR_ENV, "/srv/manuals");
        }

        let result = get_manuals_dir();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), PathBuf::from("/srv/manuals"));

        // Restore original value
        unsafe {
            match original {
                Some(value) => env::set_var(MANUALS_DIR_ENV, value),
                None => env::remove_var(MANUALS_DIR_ENV),
            }
        }
    }

    #[test]
    fn test_falls_back_to_current_dir() {
        let original = env::var(MANUALS_DIR_ENV).ok();

        // SAFETY: Removing environment variables in tests is safe as long as we restore it
        unsafe {
            env::remove_var(MANUALS_DIR_ENV);
        }

        let result = get_manuals_dir();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), env::current_dir().unwrap());

        unsafe {
            if let Some(value) = original {
                env::set_var(MANUALS_DIR_ENV, value);
            }
        }
    }
}
