use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub forms: FormsConfig,
    pub lists: ListsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormsConfig {
    /// Delay of the simulated save request
    pub submit_delay_ms: u32,
    /// How long a "saved" confirmation stays visible
    pub success_message_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsConfig {
    /// Pause after the last keystroke before the search is applied
    pub search_debounce_ms: u32,
    pub default_view: ListView,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListView {
    Table,
    Cards,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[forms]
submit_delay_ms = 1000
success_message_ms = 3000

[lists]
search_debounce_ms = 300
default_view = "table"
"#;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load the application configuration.
///
/// There is no file system in the browser, so this reads the embedded
/// default. Kept fallible so a bad edit of `DEFAULT_CONFIG` surfaces as an
/// error instead of a panic.
pub fn load_config() -> anyhow::Result<AppConfig> {
    parse_config(DEFAULT_CONFIG)
}

impl Default for AppConfig {
    fn default() -> Self {
        match load_config() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Embedded config is invalid, using built-in values: {}", e);
                Self {
                    forms: FormsConfig {
                        submit_delay_ms: 1000,
                        success_message_ms: 3000,
                    },
                    lists: ListsConfig {
                        search_debounce_ms: 300,
                        default_view: ListView::Table,
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.forms.submit_delay_ms, 1000);
        assert_eq!(config.lists.default_view, ListView::Table);
    }

    #[test]
    fn test_invalid_view_is_rejected() {
        let contents = DEFAULT_CONFIG.replace(r#""table""#, r#""grid""#);
        assert!(parse_config(&contents).is_err());
    }

    #[test]
    fn test_default_matches_embedded() {
        assert_eq!(AppConfig::default(), load_config().unwrap());
    }
}
