/// The maximum number of entries a node may hold before it must split.
pub const MAX_ENTRIES: usize = 16;

/// Per-node slot capacity. One extra slot lets a node hold the overflowing
/// entry for the instant between insertion and the split that follows.
pub(crate) const ENTRY_CAPACITY: usize = MAX_ENTRIES + 1;
