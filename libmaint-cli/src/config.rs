//! Environment loading for the CLI

use std::path::PathBuf;

/// Get the libmaint config directory path (~/.libmaint)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".libmaint"))
}

/// Load environment variables from .env files.
///
/// Priority order (highest to lowest):
/// 1. Variables already set in the environment
/// 2. Current directory .env
/// 3. ~/.libmaint/.env
///
/// dotenvy never overwrites existing variables, so loading in this
/// order yields the priorities above. Runs before tracing is set up, so
/// problems go to stderr. Returns the files that were read.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    match dotenvy::dotenv() {
        Ok(path) => loaded.push(path),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("warning: ignoring unreadable .env: {}", e),
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => loaded.push(env_file),
                Err(e) => eprintln!("warning: failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    loaded
}
