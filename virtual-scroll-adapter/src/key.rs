use alloc::sync::Arc;

/// Stable identity of an item across mutations.
///
/// When no key function is set, the positional index is used.
pub type ItemKey = u64;

/// Maps an item to its [`ItemKey`].
pub type KeyFn<T> = Arc<dyn Fn(&T) -> ItemKey + Send + Sync>;
