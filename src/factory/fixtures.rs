//! Shared payloads for factory and event tests.

use super::EntityFactory;
use crate::{
    app::{App, AppContext, Shard, ShardContext},
    types::util::Payload,
};
use serde_json::{json, Value};

#[derive(Debug)]
pub struct MockApp;

impl AppContext for MockApp {}

#[derive(Debug)]
pub struct MockShard;

impl ShardContext for MockShard {}

/// A factory with default configuration and the app it stamps on entities.
pub fn factory() -> (EntityFactory, App) {
    let app = App::new(MockApp);
    (EntityFactory::new(app.clone()), app)
}

pub fn shard() -> Shard {
    Shard::new(MockShard)
}

/// Unwrap a `json!` object literal.
pub fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}

/// Merge extra keys into a fixture, replacing existing ones.
pub fn with(mut base: Payload, extra: Value) -> Payload {
    base.extend(payload(extra));
    base
}

/// Remove keys from a fixture.
pub fn without(mut base: Payload, keys: &[&str]) -> Payload {
    for key in keys {
        base.remove(*key);
    }
    base
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub fn user() -> Payload {
    payload(json!({
        "id": "115590097100865541",
        "username": "nyaa",
        "avatar": "b3b24c6d7cbcdec129d5d537067061a8",
        "discriminator": "6127",
        "bot": true,
        "system": true,
        "public_flags": 131_072,
    }))
}

pub fn alternative_user() -> Payload {
    payload(json!({
        "id": "1231231",
        "username": "soad",
        "discriminator": "3333",
        "avatar": null,
    }))
}

pub fn my_user() -> Payload {
    payload(json!({
        "id": "379953393319542784",
        "username": "qt pi",
        "avatar": "820d0e50543216e812ad94e6ab7",
        "discriminator": "2880",
        "bot": true,
        "system": true,
        "email": "blahblah@blah.blah",
        "verified": true,
        "locale": "en-US",
        "mfa_enabled": true,
        "public_flags": 131_072,
        "flags": 3,
        "premium_type": 1,
    }))
}

// ---------------------------------------------------------------------------
// Guild pieces
// ---------------------------------------------------------------------------

pub fn member() -> Payload {
    payload(json!({
        "nick": "foobarbaz",
        "roles": ["11111", "22222", "33333", "44444"],
        "joined_at": "2015-04-26T06:26:56.936000+00:00",
        "premium_since": "2019-05-17T06:26:56.936000+00:00",
        "deaf": false,
        "mute": true,
        "user": Value::Object(user()),
    }))
}

pub fn role() -> Payload {
    payload(json!({
        "id": "41771983423143936",
        "name": "WE DEM BOYZZ!!!!!!",
        "color": 3_447_003,
        "hoist": true,
        "position": 0,
        "permissions": 66_321_471,
        "managed": false,
        "mentionable": false,
    }))
}

pub fn custom_emoji() -> Payload {
    payload(json!({ "id": "691225175349395456", "name": "test", "animated": true }))
}

pub fn known_custom_emoji() -> Payload {
    payload(json!({
        "id": "12345",
        "name": "testing",
        "animated": false,
        "available": true,
        "roles": ["123", "456"],
        "user": Value::Object(user()),
        "require_colons": true,
        "managed": false,
    }))
}

pub fn partial_integration() -> Payload {
    payload(json!({
        "id": "4949494949",
        "name": "Blah blah",
        "type": "twitch",
        "account": { "id": "543453", "name": "Blam" },
    }))
}

pub fn integration() -> Payload {
    payload(json!({
        "id": "420",
        "name": "blaze it",
        "type": "youtube",
        "account": { "id": "6969", "name": "Blaze it" },
        "enabled": true,
        "syncing": false,
        "role_id": "98494949",
        "enable_emoticons": false,
        "expire_behavior": 1,
        "expire_grace_period": 7,
        "user": Value::Object(user()),
        "synced_at": "2015-04-26T06:26:56.936000+00:00",
    }))
}

pub fn unavailable_guild() -> Payload {
    payload(json!({ "id": "4123123", "unavailable": true }))
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

pub fn permission_overwrite() -> Payload {
    payload(json!({ "id": "4242", "type": "member", "allow": 65, "deny": 49152 }))
}

pub fn partial_channel() -> Payload {
    payload(json!({ "id": "561884984214814750", "name": "general", "type": 0 }))
}

pub fn dm_channel() -> Payload {
    payload(json!({
        "id": "123",
        "last_message_id": "456",
        "type": 1,
        "recipients": [Value::Object(user())],
    }))
}

pub fn group_dm_channel() -> Payload {
    payload(json!({
        "id": "123",
        "name": "Secret Developer Group",
        "icon": "123asdf123adsf",
        "owner_id": "456",
        "application_id": "123789",
        "last_message_id": "456",
        "nicks": [{ "id": "115590097100865541", "nick": "nyaa" }],
        "type": 3,
        "recipients": [Value::Object(user())],
    }))
}

pub fn guild_category() -> Payload {
    payload(json!({
        "id": "123",
        "permission_overwrites": [Value::Object(permission_overwrite())],
        "name": "Test",
        "parent_id": "664565",
        "nsfw": true,
        "position": 3,
        "guild_id": "9876",
        "type": 4,
    }))
}

pub fn guild_text_channel() -> Payload {
    payload(json!({
        "id": "123",
        "guild_id": "567",
        "name": "general",
        "type": 0,
        "position": 6,
        "permission_overwrites": [Value::Object(permission_overwrite())],
        "rate_limit_per_user": 2,
        "nsfw": true,
        "topic": "¯\\_(ツ)_/¯",
        "last_message_id": "123456",
        "last_pin_timestamp": "2020-05-27T15:58:51.545252+00:00",
        "parent_id": "987",
    }))
}

pub fn guild_news_channel() -> Payload {
    payload(json!({
        "id": "7777",
        "guild_id": "123",
        "name": "Important Announcements",
        "type": 5,
        "position": 0,
        "permission_overwrites": [Value::Object(permission_overwrite())],
        "nsfw": true,
        "topic": "Super Important Announcements",
        "last_message_id": "456",
        "parent_id": "654",
        "last_pin_timestamp": "2020-05-27T15:58:51.545252+00:00",
    }))
}

pub fn guild_store_channel() -> Payload {
    payload(json!({
        "id": "123",
        "permission_overwrites": [Value::Object(permission_overwrite())],
        "name": "Half Life 3",
        "parent_id": "9876",
        "nsfw": true,
        "position": 2,
        "guild_id": "1234",
        "type": 6,
    }))
}

pub fn guild_voice_channel() -> Payload {
    payload(json!({
        "id": "555",
        "guild_id": "789",
        "name": "Secret Developer Discussions",
        "type": 2,
        "nsfw": true,
        "position": 4,
        "permission_overwrites": [Value::Object(permission_overwrite())],
        "bitrate": 64000,
        "user_limit": 3,
        "parent_id": "456",
    }))
}

pub fn embed() -> Payload {
    payload(json!({
        "title": "embed title",
        "description": "embed description",
        "url": "https://somewhere.com",
        "timestamp": "2020-03-22T16:40:39.218000+00:00",
        "color": 14_014_915,
        "footer": {
            "text": "footer text",
            "icon_url": "https://somewhere.com/footer.png",
            "proxy_icon_url": "https://media.somewhere.com/footer.png",
        },
        "image": {
            "url": "https://somewhere.com/image.png",
            "proxy_url": "https://media.somewhere.com/image.png",
            "height": 122,
            "width": 133,
        },
        "thumbnail": {
            "url": "https://somewhere.com/thumbnail.png",
            "proxy_url": "https://media.somewhere.com/thumbnail.png",
            "height": 123,
            "width": 456,
        },
        "video": { "url": "https://somewhere.com/video.mp4", "height": 1234, "width": 4567 },
        "provider": { "name": "some name", "url": "https://somewhere.com/provider" },
        "author": {
            "name": "some name",
            "url": "https://somewhere.com/author-url",
            "icon_url": "https://somewhere.com/author.png",
            "proxy_icon_url": "https://media.somewhere.com/author.png",
        },
        "fields": [{ "name": "title", "value": "some value", "inline": true }],
    }))
}

pub fn invite_with_metadata() -> Payload {
    payload(json!({
        "code": "aCode",
        "guild": {
            "id": "56188492224814744",
            "name": "Testin' Your Scene",
            "splash": "aSplashForSure",
            "banner": "aBannerForSure",
            "description": "Describe me cute kitty.",
            "icon": "bb71f469c158984e265093a81b3397fb",
            "features": ["FORCE_RELAY"],
            "verification_level": 2,
            "vanity_url_code": "I-am-very-vain",
        },
        "channel": Value::Object(partial_channel()),
        "inviter": Value::Object(user()),
        "target_user": Value::Object(alternative_user()),
        "target_user_type": 1,
        "approximate_presence_count": 42,
        "approximate_member_count": 84,
        "uses": 3,
        "max_uses": 8,
        "max_age": 239_349_393,
        "temporary": true,
        "created_at": "2015-04-26T06:26:56.936000+00:00",
    }))
}

// ---------------------------------------------------------------------------
// Messages and presences
// ---------------------------------------------------------------------------

pub fn partial_application() -> Payload {
    payload(json!({
        "id": "456",
        "name": "lighthouse",
        "description": "The best application",
        "icon": "2658b3029e775a931ffb49380073fa63",
        "cover_image": "58982a23790c4f22787b05d3be38a026",
        "summary": "asas",
    }))
}

pub fn message() -> Payload {
    payload(json!({
        "id": "123",
        "channel_id": "456",
        "guild_id": "678",
        "author": Value::Object(user()),
        "member": Value::Object(without(member(), &["user"])),
        "content": "some info",
        "timestamp": "2020-03-21T21:20:16.510000+00:00",
        "edited_timestamp": "2020-04-21T21:20:16.510000+00:00",
        "tts": true,
        "mention_everyone": true,
        "mentions": [{
            "id": "5678",
            "username": "uncool username",
            "avatar": "129387dskjafhasf",
            "discriminator": "4532",
        }],
        "mention_roles": ["987"],
        "mention_channels": [{ "id": "456", "guild_id": "678", "type": 1, "name": "bot-testing" }],
        "attachments": [{
            "id": "690922406474154014",
            "filename": "IMG.jpg",
            "size": 660_521,
            "url": "https://somewhere.com/attachments/123/456/IMG.jpg",
            "proxy_url": "https://media.somewhere.com/attachments/123/456/IMG.jpg",
            "width": 1844,
            "height": 2638,
        }],
        "embeds": [Value::Object(embed())],
        "reactions": [{ "emoji": Value::Object(custom_emoji()), "count": 100, "me": true }],
        "pinned": true,
        "webhook_id": "1234",
        "type": 0,
        "activity": { "type": 5, "party_id": "ae488379-351d-4a4f-ad32-2b9b01c91657" },
        "application": Value::Object(partial_application()),
        "message_reference": {
            "channel_id": "278325129692446722",
            "guild_id": "278325129692446720",
            "message_id": "306588351130107906",
        },
        "flags": 2,
        "nonce": "171000788183678976",
    }))
}

pub fn presence_activity() -> Payload {
    payload(json!({
        "name": "an activity",
        "type": 1,
        "url": "https://69.420.owouwunyaa",
        "created_at": 1_584_996_792_798_i64,
        "timestamps": { "start": 1_584_996_792_798_i64, "end": 1_999_999_792_798_i64 },
        "application_id": "40404040404040",
        "details": "They are doing stuff",
        "state": "STATED",
        "emoji": Value::Object(custom_emoji()),
        "party": { "id": "spotify:3234234234", "size": [2, 5] },
        "assets": {
            "large_image": "34234234234243",
            "large_text": "LARGE TEXT",
            "small_image": "3939393",
            "small_text": "small text",
        },
        "secrets": {
            "join": "who's a good secret?",
            "spectate": "I'm a good secret",
            "match": "No.",
        },
        "instance": true,
        "flags": 3,
    }))
}

pub fn member_presence() -> Payload {
    payload(json!({
        "user": Value::Object(user()),
        "roles": ["49494949"],
        "game": Value::Object(presence_activity()),
        "guild_id": "44004040",
        "status": "dnd",
        "activities": [Value::Object(presence_activity())],
        "client_status": { "desktop": "online", "mobile": "idle", "web": "dnd" },
        "premium_since": "2015-04-26T06:26:56.936000+00:00",
        "nick": "Nick",
    }))
}

pub fn voice_state() -> Payload {
    payload(json!({
        "guild_id": "929292929292992",
        "channel_id": "157733188964188161",
        "user_id": "80351110224678912",
        "member": Value::Object(member()),
        "session_id": "90326bd25d71d39b9ef95b299e3872ff",
        "deaf": true,
        "mute": true,
        "self_deaf": false,
        "self_mute": true,
        "self_stream": true,
        "self_video": true,
        "suppress": false,
    }))
}

pub fn guild() -> Payload {
    payload(json!({
        "afk_channel_id": "99998888777766",
        "afk_timeout": 1200,
        "application_id": "39494949",
        "approximate_member_count": 15,
        "approximate_presence_count": 7,
        "banner": "1a2b3c",
        "channels": [
            Value::Object(guild_text_channel()),
            Value::Object(guild_voice_channel()),
            Value::Object(guild_news_channel()),
        ],
        "default_message_notifications": 1,
        "description": "This is a server I guess, its a bit crap though",
        "discovery_splash": "famfamFAMFAMfam",
        "embed_channel_id": "9439394949",
        "embed_enabled": true,
        "emojis": [Value::Object(known_custom_emoji())],
        "explicit_content_filter": 2,
        "features": ["ANIMATED_ICON", "MORE_EMOJI", "NEWS", "SOME_UNDOCUMENTED_FEATURE"],
        "icon": "1a2b3c4d",
        "id": "265828729970753537",
        "joined_at": "2019-05-17T06:26:56.936000+00:00",
        "large": false,
        "max_members": 25000,
        "max_presences": 250,
        "max_video_channel_users": 25,
        "member_count": 14,
        "members": [Value::Object(member())],
        "mfa_level": 1,
        "name": "L33t guild",
        "owner_id": "6969696",
        "permissions": 66_321_471,
        "preferred_locale": "en-GB",
        "premium_subscription_count": 1,
        "premium_tier": 2,
        "presences": [Value::Object(member_presence())],
        "public_updates_channel_id": "33333333",
        "region": "eu-central",
        "roles": [Value::Object(role())],
        "rules_channel_id": "42042069",
        "splash": "0ff0ff0ff",
        "system_channel_flags": 3,
        "system_channel_id": "19216801",
        "unavailable": false,
        "vanity_url_code": "loool",
        "verification_level": 4,
        "voice_states": [Value::Object(voice_state())],
        "widget_channel_id": "9439394949",
        "widget_enabled": true,
    }))
}
