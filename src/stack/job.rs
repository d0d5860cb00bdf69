/// Side channel to the print job that owns the stack.
///
/// Operations that change the stack shape push derived bookkeeping
/// through this trait instead of editing job files themselves; the host
/// keeps ownership of its own schema. All methods default to no-ops so
/// callers without a surrounding job can pass [`NullJob`].
pub trait JobMeta {
    /// Number of over-exposed bottom layers the job currently declares.
    fn bottom_layer_count(&self) -> u32 {
        0
    }

    /// Called when layer insertion moved the bottom-layer boundary.
    fn set_bottom_layer_count(&mut self, count: u32) {
        let _ = count;
    }
}

/// Ignores every update; reports zero bottom layers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullJob;

impl JobMeta for NullJob {}
