/// Result of a create-style operation under the write-through protocol.
/// The entity always lands in the local store; the variant records whether
/// the remote authority confirmed the write, so callers can decide whether
/// to retry later instead of being handed a silently unsynced entity.
#[derive(Debug, Clone)]
pub enum SyncOutcome<T> {
    /// Committed remotely and mirrored locally.
    Synced(T),
    /// Committed locally only; the string is the remote failure.
    LocalOnly(T, String),
}

impl<T> SyncOutcome<T> {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncOutcome::Synced(_))
    }

    pub fn value(&self) -> &T {
        match self {
            SyncOutcome::Synced(value) | SyncOutcome::LocalOnly(value, _) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            SyncOutcome::Synced(value) | SyncOutcome::LocalOnly(value, _) => value,
        }
    }
}
