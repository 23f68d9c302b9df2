// src/progress.rs
/// Lightweight progress reporting for the enrichment pass.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of name groups.
    fn begin(&mut self, _total: usize) {}

    /// Called when one name group has been queried and merged.
    fn item_done(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
