//! Substring search over the index, scoped to a subtree and optionally
//! inverted.

bitflags::bitflags! {
    /// Flags accepted by [`Database::match_`](crate::db::Database::match_) and
    /// [`Database::match_from_root`](crate::db::Database::match_from_root).
    pub struct MatchFlags: u32 {
        /// Negate the `sterm` test; scope still applies.
        const INVERT = 0b0000_0001;
    }
}

impl Default for MatchFlags {
    fn default() -> Self {
        MatchFlags::empty()
    }
}

/// An entry `entry` matches with search-term `sterm`, scope `scope`, flags
/// `flags` iff `scope` is a substring of `entry`, AND (`sterm` is a substring of
/// `entry`) XOR `flags.contains(INVERT)`.
///
/// Scope is matched by substring, not by path-prefix: this is a deliberate
/// compatibility choice carried over from the original implementation, and can
/// yield false positives when one node's local name is a substring of
/// another's.
pub fn matches(entry: &str, sterm: &str, scope: &str, flags: MatchFlags) -> bool {
    if !entry.contains(scope) {
        return false;
    }
    let found = entry.contains(sterm);
    found ^ flags.contains(MatchFlags::INVERT)
}

/// Filter `entries` (already sorted) down to those matching `sterm`/`scope`/`flags`.
pub fn filter<'a>(
    entries: &'a [String],
    sterm: &str,
    scope: &str,
    flags: MatchFlags,
) -> Vec<&'a str> {
    entries
        .iter()
        .map(String::as_str)
        .filter(|entry| matches(entry, sterm, scope, flags))
        .collect()
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
