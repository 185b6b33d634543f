use crate::Config;

/// Per-invocation values that replace the active provider's configured ones
#[derive(Debug, Default, Clone)]
pub struct ProviderOverrides {
    pub voice: Option<String>,
    pub language: Option<String>,
    pub model: Option<String>,
}

impl ProviderOverrides {
    pub const fn is_empty(&self) -> bool {
        self.voice.is_none() && self.language.is_none() && self.model.is_none()
    }
}

impl Config {
    /// Apply overrides to the active provider's block
    ///
    /// A voice override sets both `voice_id` and `voice`; each adapter only
    /// reads the key it understands. Without an active provider block this
    /// is a no-op and provider selection reports the problem instead.
    pub fn apply_overrides(&mut self, overrides: &ProviderOverrides) {
        if overrides.is_empty() {
            return;
        }

        let Some(provider) = self
            .active_provider
            .as_deref()
            .and_then(|name| self.providers.get_mut(name))
        else {
            return;
        };

        if let Some(voice) = &overrides.voice {
            provider.voice_id = Some(voice.clone());
            provider.voice = Some(voice.clone());
        }
        if let Some(language) = &overrides.language {
            provider.language = Some(language.clone());
        }
        if let Some(model) = &overrides.model {
            provider.model = Some(model.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigFormat, ProviderConfig};

    fn config() -> Config {
        let doc = r#"
active_provider = "speechify"

[providers.speechify]
voice = "cliff"
language = "en-US"

[providers.elevenlabs]
voice_id = "untouched"
"#;
        Config::parse(doc, ConfigFormat::Toml).unwrap()
    }

    #[test]
    fn overrides_replace_configured_values() {
        let mut config = config();
        config.apply_overrides(&ProviderOverrides {
            voice: Some("henry".to_owned()),
            language: None,
            model: Some("simba-multilingual".to_owned()),
        });

        let speechify = &config.providers["speechify"];
        assert_eq!(speechify.voice.as_deref(), Some("henry"));
        assert_eq!(speechify.language.as_deref(), Some("en-US"));
        assert_eq!(speechify.model.as_deref(), Some("simba-multilingual"));
    }

    #[test]
    fn inactive_providers_are_left_alone() {
        let mut config = config();
        config.apply_overrides(&ProviderOverrides {
            voice: Some("henry".to_owned()),
            ..ProviderOverrides::default()
        });

        assert_eq!(config.providers["elevenlabs"].voice_id.as_deref(), Some("untouched"));
    }

    #[test]
    fn missing_active_block_is_a_no_op() {
        let mut config = Config {
            active_provider: Some("speechify".to_owned()),
            ..Config::default()
        };
        config.apply_overrides(&ProviderOverrides {
            model: Some("simba-english".to_owned()),
            ..ProviderOverrides::default()
        });

        assert!(config.providers.is_empty());
        assert_eq!(config.active_provider_config(), None::<&ProviderConfig>);
    }
}
