use std::env;

const DEFAULT_MAILBOX_CAPACITY: usize = 32;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings for the cinema system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Bound of the room actor's mailbox.
    pub mailbox_capacity: usize,
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads `CINEMA_MAILBOX_CAPACITY` and `CINEMA_LOG_LEVEL`, keeping the
    /// default for anything missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let mailbox_capacity = lookup("CINEMA_MAILBOX_CAPACITY")
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(defaults.mailbox_capacity);

        let log_level = lookup("CINEMA_LOG_LEVEL")
            .filter(|level| !level.trim().is_empty())
            .unwrap_or(defaults.log_level);

        Self {
            mailbox_capacity,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| values.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SystemConfig::from_lookup(lookup_from(&[])), SystemConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            ("CINEMA_MAILBOX_CAPACITY", "8"),
            ("CINEMA_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.mailbox_capacity, 8);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            ("CINEMA_MAILBOX_CAPACITY", "0"),
            ("CINEMA_LOG_LEVEL", "  "),
        ]));
        assert_eq!(config, SystemConfig::default());

        let config = SystemConfig::from_lookup(lookup_from(&[("CINEMA_MAILBOX_CAPACITY", "many")]));
        assert_eq!(config.mailbox_capacity, 32);
    }
}
