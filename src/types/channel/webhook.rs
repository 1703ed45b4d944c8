use crate::{
    app::App,
    types::{
        id::{
            marker::{ChannelMarker, GuildMarker, WebhookMarker},
            Id,
        },
        user::User,
        util::{impl_unique, int_enum},
    },
};

int_enum! {
    pub enum WebhookType: u64 {
        /// Posts messages sent to its token.
        Incoming = 1,
        /// Relays messages from a followed channel.
        ChannelFollower = 2,
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Webhook {
    pub app: App,
    pub id: Id<WebhookMarker>,
    pub kind: WebhookType,
    pub guild_id: Option<Id<GuildMarker>>,
    pub channel_id: Id<ChannelMarker>,
    /// Creator of the webhook, hidden when fetched by token.
    pub author: Option<User>,
    pub name: Option<String>,
    pub avatar_hash: Option<String>,
    /// Only sent for incoming webhooks.
    pub token: Option<String>,
}

impl_unique! {
    Webhook => WebhookMarker, |webhook| webhook.id;
}
