//! Pricing configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                 | Default | Meaning                          |
//! |--------------------------|---------|----------------------------------|
//! | `TALLY_DISCOUNT_POLICY`  | `rate`  | `rate`, `fixed` or `none`        |
//! | `TALLY_VIP_RATE_BPS`     | `1000`  | VIP rate for the rate policy     |
//! | `TALLY_VIP_FIXED_AMOUNT` | `1000`  | VIP amount for the fixed policy  |
//! | `TALLY_LOG`              | `info`  | tracing filter directive         |

use serde::{Deserialize, Serialize};
use std::env;
use tracing_subscriber::EnvFilter;
use tally_core::{Money, PolicyKind, PolicySettings, DEFAULT_VIP_FIXED_AMOUNT, DEFAULT_VIP_RATE_BPS};

/// Pricing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Discount policy and its parameters
    pub policy: PolicySettings,

    /// tracing-subscriber filter directive, checked at load time
    pub log_filter: String,
}

impl PricingConfig {
    /// Builds the tracing filter for `log_filter`.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter)
            .map_err(|_| ConfigError::InvalidValue("TALLY_LOG".to_string()))
    }

    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = match lookup("TALLY_DISCOUNT_POLICY") {
            Some(value) => value
                .parse::<PolicyKind>()
                .map_err(|_| ConfigError::InvalidValue("TALLY_DISCOUNT_POLICY".to_string()))?,
            None => PolicyKind::default(),
        };

        let vip_rate_bps = lookup("TALLY_VIP_RATE_BPS")
            .unwrap_or_else(|| DEFAULT_VIP_RATE_BPS.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("TALLY_VIP_RATE_BPS".to_string()))?;

        let vip_fixed_amount = lookup("TALLY_VIP_FIXED_AMOUNT")
            .unwrap_or_else(|| DEFAULT_VIP_FIXED_AMOUNT.cents().to_string())
            .trim()
            .parse()
            .map(Money::from_cents)
            .map_err(|_| ConfigError::InvalidValue("TALLY_VIP_FIXED_AMOUNT".to_string()))?;

        let log_filter = lookup("TALLY_LOG").unwrap_or_else(|| "info".to_string());
        EnvFilter::try_new(&log_filter)
            .map_err(|_| ConfigError::InvalidValue("TALLY_LOG".to_string()))?;

        Ok(PricingConfig {
            policy: PolicySettings {
                kind,
                vip_rate_bps,
                vip_fixed_amount,
            },
            log_filter,
        })
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            policy: PolicySettings::default(),
            log_filter: "info".to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
