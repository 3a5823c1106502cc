use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Fallback configuration compiled into the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/farm.db"

[server]
port = 3000
"#;

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()?
        .parent()
        .map(Path::to_path_buf)
}

/// Read `config.toml` from next to the executable, falling back to the
/// embedded default when the file is absent.
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(path) = exe_dir().map(|dir| dir.join("config.toml")) {
        if path.exists() {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            return Ok(toml::from_str(&contents)?);
        }
    }

    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Database file location. A relative path is anchored at the executable's
/// directory so the store stays next to the deployment.
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    match exe_dir() {
        Some(dir) => Ok(dir.join(db_path)),
        None => Ok(db_path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/farm.db");
        assert_eq!(config.server.port, 3000);
    }
}
