// crates/educonnect-config/src/config.rs
// ============================================================================
// Module: EduConnect Platform Configuration
// Description: Configuration loading and validation for the platform.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits. Every
//! section has defaults mirroring the shipped platform settings, so an empty
//! file is a valid configuration. Invalid values fail closed: a blank
//! platform name, a malformed email, a zero SMTP port, or a non-HTTPS CDN
//! URL all reject the whole configuration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "educonnect.toml";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_BYTES: usize = 64 * 1024;
/// Maximum length of any configured string value.
const MAX_VALUE_LENGTH: usize = 256;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// EduConnect platform configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// General platform toggles and identity.
    pub general: GeneralConfig,
    /// Notification preferences per event class.
    pub notifications: NotificationConfig,
    /// Outbound email integration.
    pub email: EmailConfig,
    /// Payment gateway integration.
    pub payment: PaymentConfig,
    /// Storage and CDN integration.
    pub storage: StorageConfig,
}

impl PlatformConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is oversized, fails to parse,
    /// or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        if content.len() > MAX_CONFIG_FILE_BYTES {
            return Err(ConfigError::Invalid(format!(
                "config exceeds {MAX_CONFIG_FILE_BYTES} bytes ({} bytes)",
                content.len()
            )));
        }
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.general.validate()?;
        self.email.validate()?;
        self.payment.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

/// General platform toggles and identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Public platform name.
    pub platform_name: String,
    /// Support contact email address.
    pub support_email: String,
    /// Display timezone for the admin dashboard.
    pub timezone: String,
    /// Temporarily disable public access.
    pub maintenance_mode: bool,
    /// Allow new user signups.
    pub user_registration: bool,
    /// Auto-verify new schools on registration.
    pub auto_verification: bool,
    /// Enable detailed logging.
    pub debug_mode: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            platform_name: "EduConnect".to_string(),
            support_email: "support@educonnect.com".to_string(),
            timezone: "Asia/Kolkata".to_string(),
            maintenance_mode: false,
            user_registration: true,
            auto_verification: false,
            debug_mode: false,
        }
    }
}

impl GeneralConfig {
    /// Validates general settings.
    fn validate(&self) -> Result<(), ConfigError> {
        require_value("general.platform_name", &self.platform_name)?;
        require_email("general.support_email", &self.support_email)?;
        require_value("general.timezone", &self.timezone)?;
        Ok(())
    }
}

/// Notification preferences per event class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Notify when schools register.
    pub school_registrations: bool,
    /// Alert when vendor approval is needed.
    pub vendor_verifications: bool,
    /// Notify about flagged accounts.
    pub user_reports: bool,
    /// Server and performance alerts.
    pub system_alerts: bool,
    /// Daily summary via email.
    pub daily_analytics_report: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            school_registrations: true,
            vendor_verifications: true,
            user_reports: true,
            system_alerts: true,
            daily_analytics_report: false,
        }
    }
}

/// Outbound email integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// SMTP relay hostname.
    pub smtp_host: String,
    /// SMTP relay port.
    pub smtp_port: u16,
    /// From address on outbound mail.
    pub from_email: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            from_email: "noreply@educonnect.com".to_string(),
        }
    }
}

impl EmailConfig {
    /// Validates email settings.
    fn validate(&self) -> Result<(), ConfigError> {
        require_value("email.smtp_host", &self.smtp_host)?;
        if self.smtp_port == 0 {
            return Err(ConfigError::Invalid("email.smtp_port must be non-zero".to_string()));
        }
        require_email("email.from_email", &self.from_email)?;
        Ok(())
    }
}

/// Payment gateway integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Gateway provider name.
    pub gateway: String,
    /// Merchant identifier at the gateway (redacted in sample config).
    pub merchant_id: String,
    /// Route transactions through the gateway sandbox.
    pub test_mode: bool,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            gateway: "Razorpay".to_string(),
            merchant_id: "merchant_***********".to_string(),
            test_mode: true,
        }
    }
}

impl PaymentConfig {
    /// Validates payment settings.
    fn validate(&self) -> Result<(), ConfigError> {
        require_value("payment.gateway", &self.gateway)?;
        require_value("payment.merchant_id", &self.merchant_id)?;
        Ok(())
    }
}

/// Storage and CDN integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage provider name.
    pub provider: String,
    /// Bucket name for uploaded assets.
    pub bucket: String,
    /// Public CDN base URL.
    pub cdn_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: "AWS S3".to_string(),
            bucket: "educonnect-prod".to_string(),
            cdn_url: "https://cdn.educonnect.com".to_string(),
        }
    }
}

impl StorageConfig {
    /// Validates storage settings.
    fn validate(&self) -> Result<(), ConfigError> {
        require_value("storage.provider", &self.provider)?;
        require_value("storage.bucket", &self.bucket)?;
        if self.bucket.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(
                "storage.bucket must not contain whitespace".to_string(),
            ));
        }
        require_value("storage.cdn_url", &self.cdn_url)?;
        if !self.cdn_url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "storage.cdn_url must start with https://".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Requires a non-blank, bounded string value.
fn require_value(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be set")));
    }
    if value.len() > MAX_VALUE_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "{field} exceeds {MAX_VALUE_LENGTH} bytes"
        )));
    }
    Ok(())
}

/// Requires a plausible email address.
fn require_email(field: &str, value: &str) -> Result<(), ConfigError> {
    require_value(field, value)?;
    if !value.contains('@') {
        return Err(ConfigError::Invalid(format!("{field} must contain '@'")));
    }
    Ok(())
}
