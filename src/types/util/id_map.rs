//! Id-keyed, insertion-ordered entity collections.

use crate::types::id::Id;
use indexmap::IndexMap;

/// Entities keyed by their identifier, iterated in wire order.
pub type IdMap<M, E> = IndexMap<Id<M>, E>;

/// An entity with a natural key.
///
/// Most entities are keyed by their own `id`; members, presences and voice
/// states are keyed by their user's id.
pub trait Unique {
    /// Marker of the key's resource type.
    type Marker;

    /// The key this entity is stored under.
    fn key(&self) -> Id<Self::Marker>;
}

/// Collect entities into a map keyed by [`Unique::key`].
///
/// When two entities share a key the later one replaces the earlier one but
/// keeps the earlier position.
pub fn to_id_map<E: Unique>(entities: impl IntoIterator<Item = E>) -> IdMap<E::Marker, E> {
    entities
        .into_iter()
        .map(|entity| (entity.key(), entity))
        .collect()
}

/// Implement [`Unique`] for types keyed by a field holding an [`Id`].
macro_rules! impl_unique {
    ($($ty:ty => $marker:ty, |$this:ident| $key:expr;)+) => {
        $(
            impl $crate::types::util::Unique for $ty {
                type Marker = $marker;

                fn key(&self) -> $crate::types::id::Id<$marker> {
                    let $this = self;
                    $key
                }
            }
        )+
    };
}

pub(crate) use impl_unique;

#[cfg(test)]
mod tests {
    use super::{to_id_map, Unique};
    use crate::types::id::{marker::RoleMarker, Id};

    #[derive(Debug, PartialEq)]
    struct Named(u64, &'static str);

    impl Unique for Named {
        type Marker = RoleMarker;

        fn key(&self) -> Id<RoleMarker> {
            Id::new(self.0)
        }
    }

    #[test]
    fn preserves_wire_order() {
        let map = to_id_map([Named(3, "c"), Named(1, "a"), Named(2, "b")]);
        let keys: Vec<u64> = map.keys().map(|id| id.get()).collect();
        assert_eq!(keys, [3, 1, 2]);
    }

    #[test]
    fn later_duplicate_wins() {
        let map = to_id_map([Named(1, "first"), Named(2, "other"), Named(1, "second")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_index(0).unwrap().1, &Named(1, "second"));
    }
}
