//! Zero-sized markers tagging an [`Id`] with the kind of resource it names.
//!
//! They carry no data. An `Id<RoleMarker>` and an `Id<UserMarker>` hold the
//! same integer but are different types, so one can't be passed where the
//! other is expected.
//!
//! [`Id`]: super::Id

/// Marker for application IDs.
///
/// Types such as [`Application`] or [`Guild::application_id`] use this ID
/// marker.
///
/// [`Application`]: crate::types::oauth::Application
/// [`Guild::application_id`]: crate::types::guild::Guild::application_id
#[derive(Debug)]
#[non_exhaustive]
pub struct ApplicationMarker;

/// Marker for attachment IDs.
///
/// Types such as [`Attachment`] use this ID marker.
///
/// [`Attachment`]: crate::types::channel::message::Attachment
#[derive(Debug)]
#[non_exhaustive]
pub struct AttachmentMarker;

/// Marker for audit log entry IDs.
///
/// Types such as [`AuditLogEntry`] use this ID marker.
///
/// [`AuditLogEntry`]: crate::types::guild::audit_log::AuditLogEntry
#[derive(Debug)]
#[non_exhaustive]
pub struct AuditLogEntryMarker;

/// Marker for channel IDs.
///
/// Types such as [`Channel`] or [`PartialChannel`] use this ID marker.
///
/// [`Channel`]: crate::types::channel::Channel
/// [`PartialChannel`]: crate::types::channel::PartialChannel
#[derive(Debug)]
#[non_exhaustive]
pub struct ChannelMarker;

/// Marker for emoji IDs.
///
/// Types such as [`CustomEmoji`] use this ID marker.
///
/// [`CustomEmoji`]: crate::types::guild::emoji::CustomEmoji
#[derive(Debug)]
#[non_exhaustive]
pub struct EmojiMarker;

/// Marker for IDs whose type depends on context.
///
/// A [`PermissionOverwrite`] targets either a member or a role, and an
/// audit log entry targets any kind of resource.
///
/// [`PermissionOverwrite`]: crate::types::channel::permission_overwrite::PermissionOverwrite
#[derive(Debug)]
#[non_exhaustive]
pub struct GenericMarker;

/// Marker for guild IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct GuildMarker;

/// Marker for integration IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct IntegrationMarker;

/// Marker for message IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct MessageMarker;

/// Marker for role IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct RoleMarker;

/// Marker for SKU IDs, such as an application's primary SKU.
#[derive(Debug)]
#[non_exhaustive]
pub struct SkuMarker;

/// Marker for team IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct TeamMarker;

/// Marker for user IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct UserMarker;

/// Marker for webhook IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct WebhookMarker;
