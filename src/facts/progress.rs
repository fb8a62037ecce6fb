/// Receives progress notifications while repository facts are being extracted.
pub trait Progress {
    /// Called before each extraction step starts. `index` is zero-based.
    fn step(&self, index: usize, total: usize, name: &str);

    /// Called once all steps have run, successfully or not.
    fn finish(&self);
}

/// A progress sink that discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn step(&self, _index: usize, _total: usize, _name: &str) {}

    fn finish(&self) {}
}
