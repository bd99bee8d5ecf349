//! Configuration module
//!
//! The service reads a single TOML file. Every section and field has a
//! default, so an empty file (or none at all) yields a working SQLite setup.
//!
//! ```toml
//! [server]
//! api_host = "0.0.0.0"
//! api_port = 8080
//!
//! [database]
//! url = "sqlite://./bookmx.db?mode=rwc"
//!
//! [logging]
//! level = "info"
//! format = "text"
//!
//! [catalog]
//! seed_on_startup = true
//!
//! [[catalog.cities]]
//! name = "CDMX"
//! lat = 19.43
//! lon = -99.13
//!
//! [[catalog.cities]]
//! name = "Toluca"
//! lat = 19.28
//! lon = -99.65
//!
//! [[catalog.roads]]
//! from = "Toluca"
//! to = "CDMX"
//! distance_km = 65.0
//!
//! [[catalog.hotels]]
//! name = "MX"
//! city = "CDMX"
//! star_rating = 4
//! price_per_night = 1000.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::CatalogSeed;
use crate::domain::{DomainResult, NewCity};
use crate::infrastructure::DatabaseConfig;

/// Env var that points at the config file
pub const CONFIG_ENV: &str = "BOOKMX_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// `~/.config/bookmx/config.toml`, or `./config.toml` when there is no
/// config dir.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("bookmx").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub logging: LoggingSection,
    pub storage: StorageSection,
    pub catalog: CatalogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub api_host: String,
    /// `0` binds an ephemeral port
    pub api_port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Seconds
    pub connect_timeout: u64,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            url: defaults.url,
            max_connections: defaults.max_connections,
            min_connections: defaults.min_connections,
            connect_timeout: defaults.connect_timeout_secs,
        }
    }
}

impl DatabaseSection {
    pub fn connection_url(&self) -> &str {
        &self.url
    }

    pub fn to_database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.url.clone(),
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            connect_timeout_secs: self.connect_timeout,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `EnvFilter` directive, e.g. `info` or `bookmx=debug,tower_http=info`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SeaORM, see `[database]`
    #[default]
    Database,
    /// Process memory; everything is lost on restart
    Memory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Insert the catalog on startup when the store is empty
    pub seed_on_startup: bool,
    pub cities: Vec<CitySeed>,
    /// Undirected; `from` and `to` are city names
    pub roads: Vec<RoadSeed>,
    pub hotels: Vec<HotelSeed>,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            seed_on_startup: true,
            cities: vec![
                CitySeed::new("Toluca", 19.28, -99.65),
                CitySeed::new("CDMX", 19.43, -99.13),
                CitySeed::new("Puebla", 19.04, -98.21),
            ],
            roads: vec![
                RoadSeed::new("Toluca", "CDMX", 65.0),
                RoadSeed::new("CDMX", "Puebla", 130.0),
            ],
            hotels: vec![
                HotelSeed::new("MX", "CDMX", 4, 1000.0),
                HotelSeed::new("Casa Puebla", "Puebla", 5, 2400.0),
                HotelSeed::new("Hostal Toluca", "Toluca", 2, 450.0),
            ],
        }
    }
}

impl CatalogSection {
    /// Check every entry and resolve city names.
    pub fn to_seed(&self) -> DomainResult<CatalogSeed> {
        let mut seed = CatalogSeed::new();
        for city in &self.cities {
            seed.add_city(NewCity::new(city.name.clone(), city.lat, city.lon)?)?;
        }
        for road in &self.roads {
            seed.add_road(&road.from, &road.to, road.distance_km)?;
        }
        for hotel in &self.hotels {
            seed.add_hotel(
                &hotel.city,
                &hotel.name,
                hotel.star_rating,
                hotel.price_per_night,
            )?;
        }
        Ok(seed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySeed {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl CitySeed {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSeed {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

impl RoadSeed {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance_km: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSeed {
    pub name: String,
    /// City name, one of `catalog.cities`
    pub city: String,
    pub star_rating: i32,
    pub price_per_night: f64,
}

impl HotelSeed {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        star_rating: i32,
        price_per_night: f64,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            star_rating,
            price_per_night,
        }
    }
}

impl AppConfig {
    /// Read and validate the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&raw)?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(io_err)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.api_host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.api_host must not be empty".into()));
        }
        if self.storage.backend == StorageBackend::Database && self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url must not be empty".into()));
        }
        if self.database.max_connections < self.database.min_connections {
            return Err(ConfigError::Invalid(
                "database.max_connections must be >= database.min_connections".into(),
            ));
        }
        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Invalid(format!(
                    "logging.format must be \"text\" or \"json\", got \"{}\"",
                    other
                )))
            }
        }
        self.catalog
            .to_seed()
            .map_err(|e| ConfigError::Invalid(format!("catalog: {}", e)))?;
        Ok(())
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.server.api_host, self.server.api_port)
    }
}
