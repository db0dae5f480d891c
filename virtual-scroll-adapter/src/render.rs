use alloc::vec::Vec;

/// Host-supplied rendering delegate.
///
/// The component only decides how many slots to render and at which absolute indexes; what a
/// slot looks like is entirely up to the renderer.
pub trait ItemRenderer<T> {
    type Output;

    fn render_item(&mut self, item: &T, index: usize) -> Self::Output;

    /// Rendered instead of the window when the collection is empty.
    fn render_empty(&mut self) -> Self::Output;
}

/// Result of [`crate::VirtualScroll::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered<O> {
    Empty(O),
    Window {
        /// Height standing in for the rows above the window.
        top_spacer: u64,
        items: Vec<O>,
        /// Height standing in for the rows below the window.
        bottom_spacer: u64,
    },
}

impl<O> Rendered<O> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Rendered rows; empty for [`Rendered::Empty`].
    pub fn items(&self) -> &[O] {
        match self {
            Self::Empty(_) => &[],
            Self::Window { items, .. } => items,
        }
    }
}
