use crate::types::util::str_enum;

str_enum! {
    /// Special feature a guild has been granted.
    pub enum GuildFeature {
        AnimatedIcon = "ANIMATED_ICON",
        Banner = "BANNER",
        Commerce = "COMMERCE",
        Community = "COMMUNITY",
        Discoverable = "DISCOVERABLE",
        Featurable = "FEATURABLE",
        InviteSplash = "INVITE_SPLASH",
        MoreEmoji = "MORE_EMOJI",
        News = "NEWS",
        Partnered = "PARTNERED",
        RelayEnabled = "RELAY_ENABLED",
        VanityUrl = "VANITY_URL",
        Verified = "VERIFIED",
        VipRegions = "VIP_REGIONS",
        WelcomeScreenEnabled = "WELCOME_SCREEN_ENABLED",
    }
}

#[cfg(test)]
mod tests {
    use super::GuildFeature;
    use serde_test::Token;

    #[test]
    fn unknown_features_are_kept_verbatim() {
        serde_test::assert_tokens(&GuildFeature::AnimatedIcon, &[Token::Str("ANIMATED_ICON")]);
        serde_test::assert_tokens(
            &GuildFeature::Unknown("MORE_SUPERCOOL_FEATURES".to_owned()),
            &[Token::Str("MORE_SUPERCOOL_FEATURES")],
        );
    }
}
