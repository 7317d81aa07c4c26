/// Lifecycle state of a bounded stack handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StackState {
  /// No storage has been reserved yet.
  #[default]
  Uninitialized,
  /// Storage is reserved; push, pop, peek and clear are valid.
  Initialized,
  /// Storage was released by `destroy`; the handle may be initialized again.
  Destroyed,
}

impl StackState {
  /// Returns `true` when element operations are valid in this state.
  #[must_use]
  pub const fn is_initialized(self) -> bool {
    matches!(self, StackState::Initialized)
  }
}
