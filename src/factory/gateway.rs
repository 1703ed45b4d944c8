use super::EntityFactory;
use crate::{
    error::FactoryError,
    types::{
        gateway::{GatewayBot, SessionStartLimit},
        util::{datetime, payload::PayloadExt, Payload},
    },
};

impl EntityFactory {
    /// Parse the recommended gateway settings for a bot.
    ///
    /// `reset_after` is sent in milliseconds.
    pub fn deserialize_gateway_bot(&self, payload: &Payload) -> Result<GatewayBot, FactoryError> {
        let limit = payload.object("session_start_limit")?;

        Ok(GatewayBot {
            url: payload.required("url")?,
            shard_count: payload.required("shards")?,
            session_start_limit: SessionStartLimit {
                total: limit.required("total")?,
                remaining: limit.required("remaining")?,
                reset_after: datetime::milliseconds(limit.required("reset_after")?),
                max_concurrency: limit.required("max_concurrency")?,
            },
        })
    }
}
