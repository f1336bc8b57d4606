use config::ConfigError;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TICK_RATE_MS: u64 = 33;

/// Raw on-disk shape; every field is optional so a partial file works.
#[derive(Deserialize, Clone, Debug, Default)]
struct ConfigFile {
    reduced_motion: Option<bool>,
    tick_rate_ms: Option<u64>,
    show_hints: Option<bool>,
}

/// Resolved presenter configuration: defaults, overlaid by the config file,
/// overlaid by `SPACEGUARD_*` environment variables. CLI flags win on top of
/// this at the call site.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub reduced_motion: bool,
    pub tick_rate_ms: u64,
    pub show_hints: bool,
    /// Path the config was resolved against (whether or not it existed).
    pub config_path: String,
}

fn get_config_path(custom_path: Option<&str>) -> String {
    custom_path.map(|p| p.to_string()).unwrap_or_else(|| {
        format!(
            "{}/.spaceguard/config.toml",
            std::env::var("HOME").unwrap_or_default()
        )
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    pub fn load(custom_config_path: Option<&str>) -> Result<Self, ConfigError> {
        let config_path = get_config_path(custom_config_path);

        let config_file = if Path::new(&config_path).exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::Message(format!("Failed to read config file: {}", e)))?;
            toml::from_str::<ConfigFile>(&content)
                .map_err(|e| ConfigError::Message(format!("Failed to parse config file: {}", e)))?
        } else {
            ConfigFile::default()
        };

        let reduced_motion = config_file.reduced_motion.unwrap_or(false);
        let tick_rate_ms = config_file.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS);
        let show_hints = config_file.show_hints.unwrap_or(true);

        // Override with environment variables if present.
        let reduced_motion = std::env::var("SPACEGUARD_REDUCED_MOTION")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(reduced_motion);
        let tick_rate_ms = std::env::var("SPACEGUARD_TICK_RATE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(tick_rate_ms);
        let show_hints = std::env::var("SPACEGUARD_SHOW_HINTS")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(show_hints);

        Ok(AppConfig {
            reduced_motion,
            tick_rate_ms,
            show_hints,
            config_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn full_config_file_parses() {
        let content = r#"
reduced_motion = true
tick_rate_ms = 50
show_hints = false
"#;
        let parsed: ConfigFile = toml::from_str(content).expect("Failed to parse config");
        assert_eq!(parsed.reduced_motion, Some(true));
        assert_eq!(parsed.tick_rate_ms, Some(50));
        assert_eq!(parsed.show_hints, Some(false));
    }

    #[test]
    fn partial_config_file_leaves_the_rest_unset() {
        let parsed: ConfigFile =
            toml::from_str("show_hints = false").expect("Failed to parse config");
        assert_eq!(parsed.reduced_motion, None);
        assert_eq!(parsed.tick_rate_ms, None);
        assert_eq!(parsed.show_hints, Some(false));
    }

    #[test]
    fn empty_config_file_parses_to_defaults() {
        let parsed: ConfigFile = toml::from_str("").expect("Failed to parse config");
        assert_eq!(parsed.reduced_motion, None);
        assert_eq!(parsed.tick_rate_ms, None);
        assert_eq!(parsed.show_hints, None);
    }

    #[test]
    fn custom_path_wins_over_home() {
        assert_eq!(
            get_config_path(Some("/tmp/deck.toml")),
            "/tmp/deck.toml".to_string()
        );
    }

    #[test_case("true", Some(true); "lowercase_true")]
    #[test_case("TRUE", Some(true); "uppercase_true")]
    #[test_case("1", Some(true); "one")]
    #[test_case("yes", Some(true); "yes")]
    #[test_case("on", Some(true); "on")]
    #[test_case("false", Some(false); "lowercase_false")]
    #[test_case("0", Some(false); "zero")]
    #[test_case("off", Some(false); "off")]
    #[test_case("maybe", None; "maybe")]
    fn bool_values_parse(value: &str, expected: Option<bool>) {
        assert_eq!(parse_bool(value), expected);
    }
}
