//! Opaque handles to the host application and its gateway shards.
//!
//! Entities keep a handle to the application that produced them so that
//! higher layers can act on them later. This crate never looks inside a
//! handle; it only clones it.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

/// State of the host application, as seen by the entities it owns.
pub trait AppContext: Debug + Send + Sync {}

/// State of a single gateway shard.
pub trait ShardContext: Debug + Send + Sync {}

/// Shared handle to the host application.
///
/// Clones are cheap. Two handles are equal only if they point at the same
/// application.
#[derive(Clone)]
pub struct App(Arc<dyn AppContext>);

impl App {
    /// Wrap the application state.
    pub fn new(context: impl AppContext + 'static) -> Self {
        Self(Arc::new(context))
    }

    /// Borrow the application state.
    pub fn context(&self) -> &dyn AppContext {
        &*self.0
    }
}

impl From<Arc<dyn AppContext>> for App {
    fn from(context: Arc<dyn AppContext>) -> Self {
        Self(context)
    }
}

impl PartialEq for App {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for App {}

impl Debug for App {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("App").field(&self.0).finish()
    }
}

/// Shared handle to the shard an event arrived on.
///
/// Same sharing and equality rules as [`App`].
#[derive(Clone)]
pub struct Shard(Arc<dyn ShardContext>);

impl Shard {
    /// Wrap the shard state.
    pub fn new(context: impl ShardContext + 'static) -> Self {
        Self(Arc::new(context))
    }

    /// Borrow the shard state.
    pub fn context(&self) -> &dyn ShardContext {
        &*self.0
    }
}

impl From<Arc<dyn ShardContext>> for Shard {
    fn from(context: Arc<dyn ShardContext>) -> Self {
        Self(context)
    }
}

impl PartialEq for Shard {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Shard {}

impl Debug for Shard {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Shard").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppContext, Shard, ShardContext};
    use static_assertions::assert_impl_all;
    use std::fmt::Debug;

    assert_impl_all!(App: Clone, Debug, Eq, Send, Sync);
    assert_impl_all!(Shard: Clone, Debug, Eq, Send, Sync);

    #[derive(Debug)]
    struct Host;

    impl AppContext for Host {}

    #[derive(Debug)]
    struct Connection;

    impl ShardContext for Connection {}

    #[test]
    fn equality_is_identity() {
        let app = App::new(Host);
        assert_eq!(app, app.clone());
        assert_ne!(app, App::new(Host));

        let shard = Shard::new(Connection);
        assert_eq!(shard, shard.clone());
        assert_ne!(shard, Shard::new(Connection));
    }
}
