//! Bridge configuration.

use common::DEFAULT_CHANNEL;

/// Environment variable that overrides the channel name.
pub const CHANNEL_ENV: &str = "LEAFY_CHANNEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Name of the channel the bridge answers on.
    pub channel: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

impl BridgeConfig {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup. Unset or empty
    /// variables keep their default.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(channel) = lookup(CHANNEL_ENV).filter(|c| !c.is_empty()) {
            config.channel = channel;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel() {
        assert_eq!(BridgeConfig::default().channel, "leafy/core");
        assert_eq!(BridgeConfig::from_vars(|_| None), BridgeConfig::default());
    }

    #[test]
    fn test_channel_override() {
        let config = BridgeConfig::from_vars(|name| {
            (name == CHANNEL_ENV).then(|| "leafy/staging".to_string())
        });
        assert_eq!(config.channel, "leafy/staging");

        let config = BridgeConfig::from_vars(|_| Some(String::new()));
        assert_eq!(config.channel, DEFAULT_CHANNEL);
    }
}
