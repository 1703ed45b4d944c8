//! Gateway connection info and presences.

pub mod presence;

use std::time::Duration;

/// How many new sessions may be started before the limit resets.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SessionStartLimit {
    pub total: u64,
    pub remaining: u64,
    pub reset_after: Duration,
    /// Sessions that may be identified at the same time.
    pub max_concurrency: u64,
}

/// Recommended gateway connection settings for a bot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GatewayBot {
    pub url: String,
    pub shard_count: u64,
    pub session_start_limit: SessionStartLimit,
}
