use std::env;

/// Default URL of the seed dump, a MySQL-flavored SQL file of continents
/// and countries.
pub const DEFAULT_SEED_URL: &str = "https://gist.githubusercontent.com/nobuti/3816985/raw/0c3ad0cf3854bc8c4ac8dcb335ee59de5218aa4f/gistfile1.txt";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "atlas.db")
    pub sqlite_path: String,
    /// URL of the seed SQL dump.
    pub seed_url: String,
    /// Skip the startup seed import entirely (default: false).
    pub skip_seed: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "atlas.db")
    /// - `SEED_URL` - URL of the seed SQL dump
    /// - `SKIP_SEED` - set to "1" or "true" to skip the startup import
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "atlas.db".to_string()),
            seed_url: env::var("SEED_URL").unwrap_or_else(|_| DEFAULT_SEED_URL.to_string()),
            skip_seed: env::var("SKIP_SEED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations don't race across test threads.
    #[test]
    fn test_from_env() {
        env::remove_var("SQLITE_PATH");
        env::remove_var("SEED_URL");
        env::remove_var("SKIP_SEED");

        let config = Config::from_env();
        assert_eq!(config.sqlite_path, "atlas.db");
        assert_eq!(config.seed_url, DEFAULT_SEED_URL);
        assert!(!config.skip_seed);

        env::set_var("SKIP_SEED", "true");
        assert!(Config::from_env().skip_seed);

        env::set_var("SKIP_SEED", "0");
        assert!(!Config::from_env().skip_seed);

        env::remove_var("SKIP_SEED");
    }
}
