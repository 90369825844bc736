//! Page-level configuration for timings, thresholds, and labels.
//!
//! Every field has a default from [`crate::consts`], so a page may embed a
//! partial JSON object (or nothing at all) and still get a complete config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhanceConfig {
    pub toast_duration_ms: u32,
    pub toast_enter_delay_ms: u32,
    pub toast_exit_ms: u32,
    pub submit_delay_ms: u32,
    pub submit_pending_label: String,
    pub submit_success_message: String,
    pub back_to_top_threshold_px: f64,
    pub anchor_scroll_offset_px: f64,
    pub lazy_root_margin: String,
    pub lazy_threshold: f64,
    pub service_worker_url: Option<String>,
    pub theme_storage_key: String,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: consts::TOAST_DURATION_MS,
            toast_enter_delay_ms: consts::TOAST_ENTER_DELAY_MS,
            toast_exit_ms: consts::TOAST_EXIT_MS,
            submit_delay_ms: consts::SUBMIT_DELAY_MS,
            submit_pending_label: consts::SUBMIT_PENDING_LABEL.to_owned(),
            submit_success_message: consts::SUBMIT_SUCCESS_MESSAGE.to_owned(),
            back_to_top_threshold_px: consts::BACK_TO_TOP_THRESHOLD_PX,
            anchor_scroll_offset_px: consts::ANCHOR_SCROLL_OFFSET_PX,
            lazy_root_margin: consts::LAZY_ROOT_MARGIN.to_owned(),
            lazy_threshold: consts::LAZY_THRESHOLD,
            service_worker_url: Some(consts::SERVICE_WORKER_URL.to_owned()),
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl EnhanceConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    ///
    /// Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toast_duration_ms <= self.toast_enter_delay_ms {
            return Err(ConfigError::Invalid {
                field: "toastDurationMs",
                reason: format!(
                    "must exceed toastEnterDelayMs ({}), got {}",
                    self.toast_enter_delay_ms, self.toast_duration_ms
                ),
            });
        }
        if self.submit_pending_label.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "submitPendingLabel",
                reason: "must not be blank".to_owned(),
            });
        }
        if !(0.0..=1.0).contains(&self.lazy_threshold) {
            return Err(ConfigError::Invalid {
                field: "lazyThreshold",
                reason: format!("must be within 0..=1, got {}", self.lazy_threshold),
            });
        }
        if self.theme_storage_key.is_empty() {
            return Err(ConfigError::Invalid {
                field: "themeStorageKey",
                reason: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }
}
