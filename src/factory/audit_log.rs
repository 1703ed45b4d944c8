use super::{collect_id_map, decode_permissions, EntityFactory};
use crate::{
    error::FactoryError,
    types::{
        guild::audit_log::{
            AuditLog, AuditLogChange, AuditLogChangeKey, AuditLogChangeValue, AuditLogEntry,
            AuditLogEntryInfo, AuditLogEventType,
        },
        util::{
            datetime,
            payload::{as_payloads, decode, decode_id, decode_string_int, PayloadExt},
            Field, Payload,
        },
    },
};
use serde_json::Value;

impl EntityFactory {
    /// Parse a page of a guild's audit log with the entities it references.
    pub fn deserialize_audit_log(&self, payload: &Payload) -> Result<AuditLog, FactoryError> {
        Ok(AuditLog {
            entries: collect_id_map(payload.objects("audit_log_entries")?, |entry| {
                self.deserialize_audit_log_entry(entry)
            })?,
            integrations: collect_id_map(payload.objects("integrations")?, |integration| {
                self.deserialize_partial_integration(integration)
            })?,
            users: collect_id_map(payload.objects("users")?, |user| self.deserialize_user(user))?,
            webhooks: collect_id_map(payload.objects("webhooks")?, |webhook| {
                self.deserialize_webhook(webhook)
            })?,
        })
    }

    /// Parse a single audit log entry.
    ///
    /// Change values are typed by their key and `options` by the entry's
    /// action type. Anything without a dedicated shape is kept as sent.
    pub fn deserialize_audit_log_entry(
        &self,
        payload: &Payload,
    ) -> Result<AuditLogEntry, FactoryError> {
        let action_type = payload.required("action_type")?;

        let mut changes = Vec::new();
        for change in payload.objects("changes")? {
            let key = change.required("key")?;
            changes.push(AuditLogChange {
                new_value: self.audit_log_change_value(&key, change.raw("new_value"))?,
                old_value: self.audit_log_change_value(&key, change.raw("old_value"))?,
                key,
            });
        }

        let options = payload
            .nullable_object("options")?
            .map(|options| self.audit_log_entry_info(&action_type, options))
            .transpose()?;

        Ok(AuditLogEntry {
            app: self.app.clone(),
            id: payload.id("id")?,
            target_id: payload.nullable_id("target_id")?,
            changes,
            user_id: payload.nullable_id("user_id")?,
            action_type,
            options,
            reason: payload.nullable("reason")?,
        })
    }

    fn audit_log_change_value(
        &self,
        key: &AuditLogChangeKey,
        value: Field<&Value>,
    ) -> Result<Option<AuditLogChangeValue>, FactoryError> {
        const FIELD: &str = "changes";

        let Field::Value(value) = value else {
            return Ok(None);
        };

        let converted = match key {
            AuditLogChangeKey::AddRoleToMember | AuditLogChangeKey::RemoveRoleFromMember => {
                AuditLogChangeValue::Roles(collect_id_map(as_payloads(FIELD, value)?, |role| {
                    self.deserialize_partial_role(role)
                })?)
            }
            AuditLogChangeKey::PermissionOverwrites => {
                AuditLogChangeValue::Overwrites(collect_id_map(
                    as_payloads(FIELD, value)?,
                    |overwrite| self.deserialize_permission_overwrite(overwrite),
                )?)
            }
            AuditLogChangeKey::Permissions | AuditLogChangeKey::Allow | AuditLogChangeKey::Deny => {
                AuditLogChangeValue::Permissions(decode_permissions(FIELD, value)?)
            }
            AuditLogChangeKey::Color => AuditLogChangeValue::Color(decode(FIELD, value)?),
            AuditLogChangeKey::Id
            | AuditLogChangeKey::OwnerId
            | AuditLogChangeKey::AfkChannelId
            | AuditLogChangeKey::WidgetChannelId
            | AuditLogChangeKey::SystemChannelId
            | AuditLogChangeKey::ApplicationId
            | AuditLogChangeKey::ChannelId
            | AuditLogChangeKey::InviterId => AuditLogChangeValue::Id(decode_id(FIELD, value)?),
            AuditLogChangeKey::AfkTimeout
            | AuditLogChangeKey::RateLimitPerUser
            | AuditLogChangeKey::MaxAge => {
                AuditLogChangeValue::Duration(datetime::seconds(decode_string_int(FIELD, value)?))
            }
            AuditLogChangeKey::PruneDeleteDays | AuditLogChangeKey::ExpireGracePeriod => {
                AuditLogChangeValue::Duration(datetime::days(decode_string_int(FIELD, value)?))
            }
            _ => AuditLogChangeValue::Raw(value.clone()),
        };

        Ok(Some(converted))
    }

    fn audit_log_entry_info(
        &self,
        action_type: &AuditLogEventType,
        options: &Payload,
    ) -> Result<AuditLogEntryInfo, FactoryError> {
        let info = match action_type {
            AuditLogEventType::ChannelOverwriteCreate
            | AuditLogEventType::ChannelOverwriteUpdate
            | AuditLogEventType::ChannelOverwriteDelete => AuditLogEntryInfo::ChannelOverwrite {
                id: options.id("id")?,
                kind: options.required("type")?,
                role_name: options.nullable("role_name")?,
            },
            AuditLogEventType::MessagePin | AuditLogEventType::MessageUnpin => {
                AuditLogEntryInfo::MessagePin {
                    channel_id: options.id("channel_id")?,
                    message_id: options.id("message_id")?,
                }
            }
            AuditLogEventType::MemberPrune => AuditLogEntryInfo::MemberPrune {
                delete_member_days: datetime::days(options.string_int("delete_member_days")?),
                members_removed: options.string_int("members_removed")?,
            },
            AuditLogEventType::MessageBulkDelete => AuditLogEntryInfo::MessageBulkDelete {
                count: options.string_int("count")?,
            },
            AuditLogEventType::MessageDelete => AuditLogEntryInfo::MessageDelete {
                count: options.string_int("count")?,
                channel_id: options.id("channel_id")?,
            },
            AuditLogEventType::MemberDisconnect => AuditLogEntryInfo::MemberDisconnect {
                count: options.string_int("count")?,
            },
            AuditLogEventType::MemberMove => AuditLogEntryInfo::MemberMove {
                count: options.string_int("count")?,
                channel_id: options.id("channel_id")?,
            },
            _ => AuditLogEntryInfo::Unrecognised(options.clone()),
        };

        Ok(info)
    }
}
