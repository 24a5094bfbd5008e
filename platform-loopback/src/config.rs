/// Configuration for one end of a loopback pairing.
#[derive(Debug, Clone)]
pub struct LoopbackConfig {
    /// Routing tag this end reports as its platform id.
    pub platform_id: String,

    /// Display name the paired endpoint sees for this end.
    pub display_name: String,

    /// Buffer size for in-process byte channels, in bytes.
    pub channel_capacity: usize,
}

impl LoopbackConfig {
    pub fn new(platform_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            platform_id: platform_id.into(),
            display_name: display_name.into(),
            ..Self::default()
        }
    }
}

impl Default for LoopbackConfig {
    fn default() -> Self {
        Self {
            platform_id: "loopback".to_string(),
            display_name: "Loopback endpoint".to_string(),
            channel_capacity: 64 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoopbackConfig::default();
        assert_eq!(config.platform_id, "loopback");
        assert_eq!(config.channel_capacity, 64 * 1024);
    }

    #[test]
    fn test_new_keeps_default_capacity() {
        let config = LoopbackConfig::new("loopback", "Phone");
        assert_eq!(config.display_name, "Phone");
        assert_eq!(config.channel_capacity, LoopbackConfig::default().channel_capacity);
    }
}
