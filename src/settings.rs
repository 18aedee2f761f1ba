use std::str::FromStr;

use crate::error::{PlannerError, Result};

pub const CURRENCY_SYMBOL: &str = "R$";
pub const LOG_QUERY_PARAM: &str = "log";

#[derive(Clone, Debug, PartialEq)]
pub struct PlannerSettings {
    pub currency_symbol: String,
    pub log_level: log::Level,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl PlannerSettings {
    /// Applies a `?log=` override on top of the defaults.
    pub fn with_log_override(mut self, raw: Option<&str>) -> Result<Self> {
        if let Some(raw) = raw {
            self.log_level = log::Level::from_str(raw.trim())
                .map_err(|_| PlannerError::InvalidLogLevel(raw.to_string()))?;
        }
        Ok(self)
    }
}

fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// Defaults plus whatever the page URL overrides.
///
/// Returns the error alongside the defaults so the caller can report it once
/// logging is up.
pub fn load_settings() -> (PlannerSettings, Option<PlannerError>) {
    let raw = query_param(LOG_QUERY_PARAM);
    match PlannerSettings::default().with_log_override(raw.as_deref()) {
        Ok(settings) => (settings, None),
        Err(err) => (PlannerSettings::default(), Some(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_real_at_info() {
        let settings = PlannerSettings::default();
        assert_eq!(settings.currency_symbol, "R$");
        assert_eq!(settings.log_level, log::Level::Info);
    }

    #[test]
    fn log_override_is_case_insensitive() {
        let settings = PlannerSettings::default()
            .with_log_override(Some("DEBUG"))
            .unwrap();
        assert_eq!(settings.log_level, log::Level::Debug);
    }

    #[test]
    fn missing_override_keeps_defaults() {
        let settings = PlannerSettings::default().with_log_override(None).unwrap();
        assert_eq!(settings, PlannerSettings::default());
    }

    #[test]
    fn bad_override_is_reported() {
        let err = PlannerSettings::default()
            .with_log_override(Some("loud"))
            .unwrap_err();
        assert_eq!(err, PlannerError::InvalidLogLevel("loud".to_string()));
    }
}
