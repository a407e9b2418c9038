//! Configuration management for the Bootnode site.
//!
//! Parses `bootnode.toml` with serde and searches parent directories for it
//! when no explicit path is given.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `contact.api_url`
//! - `contact.service_id`
//! - `contact.template_id`
//! - `contact.public_key`
//!
//! ## Learn menu
//!
//! `[[learn.sections]]` tables replace the built-in documentation menu. The
//! menu is validated while loading, so duplicate paths or empty sections
//! stop the server before it binds.

mod expand;

use std::path::{Path, PathBuf};

use bn_nav::{MenuError, MenuModel, MenuSection};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "bootnode.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Responsive layout configuration.
    pub layout: LayoutConfig,
    /// Navigation session configuration.
    pub sessions: SessionConfig,
    /// Email delivery for the contact form (optional section).
    pub contact: Option<ContactConfig>,
    /// Documentation menu as written in TOML.
    learn: LearnConfigRaw,

    /// Validated menu (set after loading, `None` means the built-in menu).
    #[serde(skip)]
    pub menu: Option<MenuModel>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7980,
        }
    }
}

/// Responsive layout configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width in logical pixels at which the docs layout becomes desktop.
    pub breakpoint: f64,
    /// Width assumed when the client sends no viewport hint.
    pub default_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: bn_nav::DEFAULT_BREAKPOINT,
            default_width: 1024.0,
        }
    }
}

/// Navigation session configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds of inactivity after which a session's sidebar state is dropped.
    pub idle_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 1800,
        }
    }
}

/// Contact form email delivery configuration.
#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Base URL of the email delivery API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Delivery service identifier.
    pub service_id: String,
    /// Message template identifier.
    pub template_id: String,
    /// Public account key.
    pub public_key: String,
    /// Seconds a success or failure notice stays visible.
    #[serde(default = "default_notice_ttl_secs")]
    pub notice_ttl_secs: u64,
    /// HTTP timeout for delivery requests.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ContactConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.api_url, "contact.api_url")?;
        require_http_url(&self.api_url, "contact.api_url")?;
        require_non_empty(&self.service_id, "contact.service_id")?;
        require_non_empty(&self.template_id, "contact.template_id")?;
        require_non_empty(&self.public_key, "contact.public_key")?;
        if self.notice_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "contact.notice_ttl_secs must be greater than 0".to_owned(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "contact.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    "https://api.emailjs.com".to_owned()
}

fn default_notice_ttl_secs() -> u64 {
    5
}

fn default_timeout_secs() -> u64 {
    30
}

/// Raw learn configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LearnConfigRaw {
    sections: Option<Vec<MenuSection>>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Learn menu violates its invariants.
    #[error("Invalid learn menu: {0}")]
    Menu(#[from] MenuError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`contact.public_key`").
        field: String,
        /// Error message (e.g., "${`EMAIL_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `bootnode.toml` in current directory and parents,
    /// falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate_server()?;
        }

        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_menu()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
    }

    /// Get validated contact configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_contact(&self) -> Result<&ContactConfig, ConfigError> {
        let contact = self.contact.as_ref().ok_or_else(|| {
            ConfigError::Validation("[contact] section required in config".into())
        })?;
        contact.validate()?;
        Ok(contact)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_layout()?;
        if self.sessions.idle_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "sessions.idle_timeout_secs must be greater than 0".to_owned(),
            ));
        }
        if let Some(contact) = &self.contact {
            contact.validate()?;
        }
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate layout configuration.
    fn validate_layout(&self) -> Result<(), ConfigError> {
        let breakpoint = self.layout.breakpoint;
        if !breakpoint.is_finite() || breakpoint <= 0.0 {
            return Err(ConfigError::Validation(
                "layout.breakpoint must be a positive number".to_owned(),
            ));
        }
        let width = self.layout.default_width;
        if !width.is_finite() || width < 0.0 {
            return Err(ConfigError::Validation(
                "layout.default_width must be a non-negative number".to_owned(),
            ));
        }
        Ok(())
    }

    /// Build the validated menu from `[[learn.sections]]`, if present.
    fn resolve_menu(&mut self) -> Result<(), ConfigError> {
        self.menu = match self.learn.sections.take() {
            Some(sections) => Some(MenuModel::new(sections)?),
            None => None,
        };
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref mut contact) = self.contact {
            contact.api_url = expand::expand_env(&contact.api_url, "contact.api_url")?;
            contact.service_id = expand::expand_env(&contact.service_id, "contact.service_id")?;
            contact.template_id =
                expand::expand_env(&contact.template_id, "contact.template_id")?;
            contact.public_key = expand::expand_env(&contact.public_key, "contact.public_key")?;
        }

        Ok(())
    }
}

/// Expand an optional configuration string supplied outside the TOML file.
///
/// # Errors
///
/// Returns `ConfigError::EnvVar` when a referenced variable is unset.
pub fn expand_setting(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    expand::expand_opt(value, field)
}
