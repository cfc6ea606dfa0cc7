//! Materials Project connection settings loaded from environment variables.
//!
//! - `MP_API_KEY`      = API key sent as `X-API-KEY` (mandatory)
//! - `MP_BASE_URL`     = API base (default `https://api.materialsproject.org`)
//! - `MP_TIMEOUT_SECS` = request timeout in seconds (default `20`)

use crate::errors::MaterialsConfigError;

pub const DEFAULT_MP_BASE_URL: &str = "https://api.materialsproject.org";
pub const DEFAULT_MP_TIMEOUT_SECS: u64 = 20;

#[derive(Clone, PartialEq)]
pub struct MaterialsConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for MaterialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaterialsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MaterialsConfig {
    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, MaterialsConfigError> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = var("MP_API_KEY").ok_or(MaterialsConfigError::MissingVar("MP_API_KEY"))?;

        let base_url = var("MP_BASE_URL").unwrap_or_else(|| DEFAULT_MP_BASE_URL.into());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(MaterialsConfigError::InvalidFormat {
                var: "MP_BASE_URL",
                reason: "must start with http:// or https://",
            });
        }

        let timeout_secs = match var("MP_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .map_err(|_| MaterialsConfigError::InvalidNumber {
                    var: "MP_TIMEOUT_SECS",
                    reason: "expected u64",
                })?,
            None => DEFAULT_MP_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_key,
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_required() {
        let err = MaterialsConfig::from_lookup(&|_| None).unwrap_err();
        assert!(matches!(err, MaterialsConfigError::MissingVar("MP_API_KEY")));
    }

    #[test]
    fn defaults_and_overrides() {
        let cfg = MaterialsConfig::from_lookup(&|name| match name {
            "MP_API_KEY" => Some(" mp-key ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.api_key, "mp-key");
        assert_eq!(cfg.base_url, DEFAULT_MP_BASE_URL);
        assert_eq!(cfg.timeout_secs, DEFAULT_MP_TIMEOUT_SECS);

        let cfg = MaterialsConfig::from_lookup(&|name| match name {
            "MP_API_KEY" => Some("k".into()),
            "MP_BASE_URL" => Some("http://127.0.0.1:7000".into()),
            "MP_TIMEOUT_SECS" => Some("3".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.base_url, "http://127.0.0.1:7000");
        assert_eq!(cfg.timeout_secs, 3);
        assert!(!format!("{cfg:?}").contains("\"k\""));
    }

    #[test]
    fn rejects_bad_values() {
        let bad_url = MaterialsConfig::from_lookup(&|name| match name {
            "MP_API_KEY" => Some("k".into()),
            "MP_BASE_URL" => Some("api.materialsproject.org".into()),
            _ => None,
        });
        assert!(matches!(
            bad_url,
            Err(MaterialsConfigError::InvalidFormat { var: "MP_BASE_URL", .. })
        ));

        let bad_timeout = MaterialsConfig::from_lookup(&|name| match name {
            "MP_API_KEY" => Some("k".into()),
            "MP_TIMEOUT_SECS" => Some("soon".into()),
            _ => None,
        });
        assert!(matches!(
            bad_timeout,
            Err(MaterialsConfigError::InvalidNumber { .. })
        ));
    }
}
