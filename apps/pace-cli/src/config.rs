// config.rs — Goal file resolution.
//
// Precedence: --file flag, then $PACE_FILE, then ~/.pace/goals.json.
// No home directory (containers, stripped-down CI) → ./goals.json.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default goal file location.
pub const FILE_ENV_VAR: &str = "PACE_FILE";

/// Resolve the goal file the store should open.
pub fn resolve_goal_file(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(path) = env::var_os(FILE_ENV_VAR) {
        return PathBuf::from(path);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".pace").join("goals.json"),
        None => PathBuf::from("goals.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins() {
        let flag = PathBuf::from("/tmp/custom.json");
        assert_eq!(resolve_goal_file(Some(&flag)), flag);
    }

    #[test]
    fn default_lands_in_home_dot_pace() {
        // Only meaningful where a home directory exists and the env
        // override is unset; both hold in the dev environments we run
        // tests in.
        if env::var_os(FILE_ENV_VAR).is_none() && dirs::home_dir().is_some() {
            let path = resolve_goal_file(None);
            assert!(path.ends_with(Path::new(".pace").join("goals.json")));
        }
    }
}
