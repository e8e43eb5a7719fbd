/// Lifetime of instances produced by a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Constructed on first resolution and cached for the container lifetime.
    #[default]
    Singleton,
    /// Constructed again on every resolution.
    Transient,
}
