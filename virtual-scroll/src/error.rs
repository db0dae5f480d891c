/// A rejected [`crate::ViewportConfig`].
///
/// Configuration is validated before it is applied; on error the previously applied
/// configuration stays in effect.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("item height must be greater than zero")]
    ZeroItemHeight,
    #[error("container height must be greater than zero")]
    ZeroContainerHeight,
    #[error("load-more threshold must be within (0, 1], got {0}")]
    ThresholdOutOfRange(f64),
}
