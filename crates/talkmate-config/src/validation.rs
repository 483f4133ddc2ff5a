//! Configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every problem
//! into a single `ConfigError`.

use crate::schema::TalkmateConfig;
use talkmate_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TalkmateConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let api = &config.api;
    validate_not_blank(&mut errors, "api.api_base", &api.api_base);
    validate_not_blank(&mut errors, "api.text_model", &api.text_model);
    validate_not_blank(&mut errors, "api.vision_model", &api.vision_model);
    validate_range(&mut errors, "api.max_tokens", api.max_tokens, 1, 65536);
    validate_range_f64(&mut errors, "api.temperature", api.temperature, 0.0, 2.0);
    validate_range(
        &mut errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        300,
    );
    validate_range(
        &mut errors,
        "api.request_timeout_secs",
        api.request_timeout_secs,
        1,
        600,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]` (integer).
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if value.is_nan() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_not_blank(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}
