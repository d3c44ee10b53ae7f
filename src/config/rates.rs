//! Exchange rate refresh configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatesConfig {
    /// Seconds between background refreshes; no refresh task when unset
    pub refresh_interval_secs: Option<u64>,
}

impl RatesConfig {
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.refresh_interval_secs == Some(0) {
            return Err(ValidationError::InvalidRefreshInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_disabled_by_default() {
        let config = RatesConfig::default();
        assert_eq!(config.refresh_interval(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_is_invalid() {
        let config = RatesConfig {
            refresh_interval_secs: Some(0),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRefreshInterval));
    }
}
