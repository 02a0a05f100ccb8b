use crate::entities::SystemInfo;

pub trait SystemInfoProvider: Send + Sync {
    fn system_info(&self) -> SystemInfo;
}

/// Uniform index generator used to pick catalogue entries.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `[0, len)`. `len` is never zero.
    fn next_index(&self, len: usize) -> usize;
}
