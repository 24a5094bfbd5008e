//! Routable node identifier encoding.
//!
//! Every node id surfaced by the manager carries the tag of the platform
//! that produced it: `<tag>|<native-id>`. The tag is what lets a later
//! call be routed back to the originating platform; the native id is
//! opaque to the manager and is handed back to the platform unchanged.
//!
//! Splitting partitions on the *first* separator, so tags must never
//! contain it (the builder enforces this). Native ids are expected not to
//! contain it either; a platform that emits such ids would corrupt
//! round-tripping through callers that treat the joined id as opaque.

/// Separator between a platform tag and a native node id.
pub const PLATFORM_SEPARATOR: char = '|';

/// Prefixes `native_id` with the platform tag that produced it.
pub fn join_node_id(tag: &str, native_id: &str) -> String {
    format!("{tag}{PLATFORM_SEPARATOR}{native_id}")
}

/// Splits a routable id into `(tag, native_id)`.
///
/// Returns `None` when the id contains no separator, i.e. it was not
/// produced by a manager.
pub fn split_node_id(node_id: &str) -> Option<(&str, &str)> {
    node_id.split_once(PLATFORM_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_prefixes_tag() {
        assert_eq!(join_node_id("alpha", "5"), "alpha|5");
    }

    #[test]
    fn test_split_round_trips_join() {
        let joined = join_node_id("wearos", "node-17");
        assert_eq!(split_node_id(&joined), Some(("wearos", "node-17")));
    }

    #[test]
    fn test_split_partitions_on_first_separator() {
        assert_eq!(split_node_id("alpha|a|b"), Some(("alpha", "a|b")));
    }

    #[test]
    fn test_split_without_separator_is_none() {
        assert_eq!(split_node_id("Some borked ID"), None);
    }

    #[test]
    fn test_split_allows_empty_native_id() {
        assert_eq!(split_node_id("alpha|"), Some(("alpha", "")));
    }
}
