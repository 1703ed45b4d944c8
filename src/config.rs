//! Factory configuration.

use serde::Deserialize;

/// Tunables for [`EntityFactory`].
///
/// Deserializable so a host can embed it in its own configuration file;
/// every key is optional.
///
/// [`EntityFactory`]: crate::factory::EntityFactory
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct FactoryConfig {
    /// Prefix of the synthetic URL given to binary embed resources, followed
    /// by the resource's filename.
    pub attachment_url_prefix: String,
    /// Skip channels of unsupported types inside a guild instead of failing
    /// the whole guild.
    pub skip_unknown_guild_channels: bool,
}

impl FactoryConfig {
    /// URL under which a binary resource with this filename is referenced.
    pub fn attachment_url(&self, filename: &str) -> String {
        format!("{}{filename}", self.attachment_url_prefix)
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            attachment_url_prefix: "attachment://".to_owned(),
            skip_unknown_guild_channels: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FactoryConfig;

    #[test]
    fn missing_keys_use_defaults() {
        let config: FactoryConfig =
            serde_json::from_str(r#"{ "skip_unknown_guild_channels": false }"#).unwrap();

        assert_eq!(config.attachment_url_prefix, "attachment://");
        assert!(!config.skip_unknown_guild_channels);
        assert_eq!(config.attachment_url("cat.png"), "attachment://cat.png");
    }
}
