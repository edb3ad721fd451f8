use std::env;
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_DATABASE_URL: &str = "image.db";
const DEFAULT_UPLOAD_FOLDER: &str = "image";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Startup configuration shared with the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Location of the SQLite database file.
    pub database_url: String,
    /// Directory reserved for uploaded image assets.
    pub upload_folder: PathBuf,
    /// Address the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            upload_folder: PathBuf::from(DEFAULT_UPLOAD_FOLDER),
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().unwrap_or(defaults.port),
            None => defaults.port,
        };

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            upload_folder: lookup("UPLOAD_FOLDER")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_folder),
            address: lookup("ADDRESS").unwrap_or(defaults.address),
            port,
        }
    }

    /// Create the upload folder if it does not exist yet.
    pub fn ensure_upload_folder(&self) -> io::Result<&Path> {
        if !self.upload_folder.exists() {
            std::fs::create_dir_all(&self.upload_folder)?;
            log::info!("Created upload folder {}", self.upload_folder.display());
        }
        Ok(&self.upload_folder)
    }
}
