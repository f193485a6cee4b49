use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::frequency::FrequencyUnit;
use crate::roi::{CalculationContext, DEFAULT_FALLBACK_HOURLY_RATE};

/// Root configuration structure for roimap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoimapConfig {
    /// Defaults used by the calculation engine
    #[serde(default)]
    pub calculation: Option<CalculationConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl RoimapConfig {
    /// Calculation context for this configuration; engine defaults when the
    /// `[calculation]` table is absent.
    ///
    /// ```
    /// use roimap::config::RoimapConfig;
    /// let config = RoimapConfig::default();
    /// assert_eq!(config.calculation_context().fallback_hourly_rate, 80.0);
    /// ```
    pub fn calculation_context(&self) -> CalculationContext {
        self.calculation
            .as_ref()
            .map(CalculationConfig::to_context)
            .unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationConfig {
    /// Hourly rate used when hours were saved but no baseline rate is known
    #[serde(default = "default_fallback_hourly_rate")]
    pub fallback_hourly_rate: f64,

    /// Unit assumed for missing or unrecognized frequency units
    #[serde(default = "default_frequency_unit")]
    pub default_frequency_unit: String,
}

pub fn default_fallback_hourly_rate() -> f64 {
    DEFAULT_FALLBACK_HOURLY_RATE
}

pub fn default_frequency_unit() -> String {
    FrequencyUnit::default().as_str().to_string()
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            fallback_hourly_rate: default_fallback_hourly_rate(),
            default_frequency_unit: default_frequency_unit(),
        }
    }
}

impl CalculationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.fallback_hourly_rate.is_finite() || self.fallback_hourly_rate < 0.0 {
            return Err(Error::config(format!(
                "fallback_hourly_rate must be a non-negative number, got {}",
                self.fallback_hourly_rate
            )));
        }
        if FrequencyUnit::parse(&self.default_frequency_unit).is_none() {
            return Err(Error::config(format!(
                "unknown default_frequency_unit '{}'",
                self.default_frequency_unit
            )));
        }
        Ok(())
    }

    pub fn to_context(&self) -> CalculationContext {
        CalculationContext {
            fallback_hourly_rate: self.fallback_hourly_rate,
            default_frequency_unit: FrequencyUnit::parse(&self.default_frequency_unit)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// One of `terminal`, `json` or `markdown`
    pub default_format: Option<String>,
}
