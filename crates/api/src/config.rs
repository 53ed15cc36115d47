use std::path::PathBuf;

/// Which [`ArtworkStore`](artworks_db::ArtworkStore) implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    /// Process-local store, lost on restart. Useful without a database.
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

/// Document store settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
    /// JSON fixture inserted when the collection starts out empty.
    pub seed_data_path: PathBuf,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins from comma-separated `CORS_ORIGINS`.
    /// Empty or `*` means any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Static key required in `X-API-Key`. `None` disables the check.
    pub api_key: Option<String>,
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `8000`                      |
    /// | `CORS_ORIGINS`         | `*`                         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `API_KEY`              | unset                       |
    /// | `STORE_BACKEND`        | `mongodb`                   |
    /// | `MONGODB_URI`          | `mongodb://localhost:27017` |
    /// | `MONGODB_DATABASE`     | `artworks_db`               |
    /// | `MONGODB_COLLECTION`   | `artworks`                  |
    /// | `SEED_DATA_PATH`       | `data/artworks.json`        |
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "8000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "*"));

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let api_key = std::env::var("API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let backend: StoreBackend = env_or("STORE_BACKEND", "mongodb")
            .parse()
            .unwrap_or_else(|e| panic!("STORE_BACKEND is invalid: {e}"));

        let store = StoreConfig {
            backend,
            mongodb_uri: env_or("MONGODB_URI", "mongodb://localhost:27017"),
            database: env_or("MONGODB_DATABASE", "artworks_db"),
            collection: env_or("MONGODB_COLLECTION", "artworks"),
            seed_data_path: PathBuf::from(env_or("SEED_DATA_PATH", "data/artworks.json")),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            api_key,
            store,
        }
    }

    /// True when CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test ,, http://b.test"),
            ["http://a.test", "http://b.test"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn store_backend_parses_case_insensitively() {
        assert_eq!("MongoDB".parse::<StoreBackend>(), Ok(StoreBackend::MongoDb));
        assert_eq!(" memory ".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }
}
