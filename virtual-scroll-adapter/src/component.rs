use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use virtual_scroll::{ConfigError, ScrollDirection, Viewport, ViewportConfig, VisibleRange, Window};

use crate::{
    Easing, FrameThrottle, ItemKey, ItemRenderer, KeyFn, Rendered, ScrollAnimation, ScrollEvent,
    ScrollEventSink, SettleTimer, ViewportObserver, VirtualScrollOptions, VisibleWindow,
};

/// A framework-neutral virtual-scroll component.
///
/// It owns the item collection on behalf of the host and a [`virtual_scroll::Viewport`] that
/// decides which slice to render. The host drives it by calling:
/// - `on_scroll(offset, now_ms)` for every scroll event
/// - `tick(now_ms)` once per frame (throttled flushes, smooth scrolling, settle detection)
/// - the mutation methods (`add_items`, `insert_items`, `remove_item`, `update_item`)
///
/// Results are pushed to the sink `S` as [`ScrollEvent`]s and can also be read back with
/// [`Self::visible_items`] or [`Self::render`].
pub struct VirtualScroll<T, S> {
    viewport: Viewport,
    items: Vec<T>,
    sink: S,
    options: VirtualScrollOptions,
    key_fn: Option<KeyFn<T>>,
    observer: Option<Box<dyn ViewportObserver + Send>>,
    throttle: FrameThrottle,
    settle: SettleTimer,
    animation: Option<ScrollAnimation>,
    last_emitted: Option<VisibleRange>,
    host_loading: bool,
    load_requested: bool,
    has_more: bool,
}

impl<T, S> VirtualScroll<T, S> {
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn options(&self) -> &VirtualScrollOptions {
        &self.options
    }

    pub fn config(&self) -> &ViewportConfig {
        self.viewport.config()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The window from the last recomputation.
    pub fn window(&self) -> Window {
        self.viewport.window()
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.viewport.visible_range()
    }

    pub fn visible_items(&self) -> &[T] {
        self.items
            .get(self.visible_range().as_range())
            .unwrap_or(&[])
    }

    pub fn scroll_offset(&self) -> u64 {
        self.viewport.scroll_offset()
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.viewport.scroll_direction()
    }

    /// `true` while user scrolling has not settled or a smooth scroll is running.
    pub fn is_scrolling(&self) -> bool {
        self.settle.is_active() || self.animation.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.animation = None;
    }

    /// Whether a load is in flight, either reported by the host or requested by the component.
    pub fn is_loading(&self) -> bool {
        self.host_loading || self.load_requested
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Reports whether the host is currently fetching items.
    ///
    /// `false` also clears a pending `LoadMore` request, re-arming the trigger.
    pub fn set_loading(&mut self, loading: bool) {
        self.host_loading = loading;
        if !loading {
            self.load_requested = false;
        }
    }

    /// Disables `LoadMore` once the host has nothing left to fetch.
    pub fn set_has_more(&mut self, has_more: bool) {
        self.has_more = has_more;
    }

    pub fn with_key_fn(mut self, key_fn: impl Fn(&T) -> ItemKey + Send + Sync + 'static) -> Self {
        self.key_fn = Some(Arc::new(key_fn));
        self
    }

    pub fn set_key_fn(&mut self, key_fn: Option<impl Fn(&T) -> ItemKey + Send + Sync + 'static>) {
        self.key_fn = key_fn.map(|f| -> KeyFn<T> { Arc::new(f) });
    }

    pub fn with_viewport_observer(
        mut self,
        observer: impl ViewportObserver + Send + 'static,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn with_options(mut self, options: VirtualScrollOptions) -> Self {
        self.throttle = FrameThrottle::new(options.frame_interval_ms);
        self.settle = SettleTimer::new(options.settle_delay_ms);
        self.options = options;
        self
    }

    /// The key of the item at `index`: the key function's result, or the index itself.
    pub fn key_of(&self, index: usize) -> Option<ItemKey> {
        let item = self.items.get(index)?;
        Some(match &self.key_fn {
            Some(f) => f(item),
            None => index as ItemKey,
        })
    }

    pub fn index_of_key(&self, key: ItemKey) -> Option<usize> {
        match &self.key_fn {
            Some(f) => self.items.iter().position(|item| f(item) == key),
            None => usize::try_from(key).ok().filter(|&i| i < self.items.len()),
        }
    }

    /// Iterates over the visible items as `(key, absolute_index, item)` without allocations.
    pub fn for_each_visible(&self, mut f: impl FnMut(ItemKey, usize, &T)) {
        let range = self.visible_range();
        for (offset, item) in self.visible_items().iter().enumerate() {
            let index = range.start_index + offset;
            let key = match &self.key_fn {
                Some(key_fn) => key_fn(item),
                None => index as ItemKey,
            };
            f(key, index, item);
        }
    }

    /// Renders the current window through `renderer`, or its empty state.
    pub fn render<R: ItemRenderer<T>>(&self, renderer: &mut R) -> Rendered<R::Output> {
        if self.items.is_empty() {
            return Rendered::Empty(renderer.render_empty());
        }
        let window = self.window();
        let start = window.range.start_index;
        let items = self
            .visible_items()
            .iter()
            .enumerate()
            .map(|(offset, item)| renderer.render_item(item, start + offset))
            .collect();
        Rendered::Window {
            top_spacer: window.top_spacer,
            items,
            bottom_spacer: window.bottom_spacer,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<T: Clone, S: ScrollEventSink<T>> VirtualScroll<T, S> {
    /// Creates the component and emits the initial `ItemsVisible`.
    pub fn new(config: ViewportConfig, items: Vec<T>, sink: S) -> Result<Self, ConfigError> {
        let viewport = Viewport::new(config, items.len())?;
        let options = VirtualScrollOptions::default();
        let mut c = Self {
            viewport,
            items,
            sink,
            options,
            key_fn: None,
            observer: None,
            throttle: FrameThrottle::new(options.frame_interval_ms),
            settle: SettleTimer::new(options.settle_delay_ms),
            animation: None,
            last_emitted: None,
            host_loading: false,
            load_requested: false,
            has_more: true,
        };
        c.emit_window(true);
        Ok(c)
    }

    /// Replaces both the collection and the configuration.
    ///
    /// The configuration is validated first; on error nothing changes.
    pub fn configure(&mut self, items: Vec<T>, config: ViewportConfig) -> Result<(), ConfigError> {
        self.viewport.configure(config)?;
        self.set_items(items);
        Ok(())
    }

    /// Applies a new configuration. On error the last good configuration stays in effect.
    pub fn set_config(&mut self, config: ViewportConfig) -> Result<(), ConfigError> {
        self.viewport.configure(config)?;
        self.emit_window(false);
        Ok(())
    }

    /// Replaces the whole collection and re-emits the window.
    pub fn set_items(&mut self, items: Vec<T>) {
        if items.len() > self.items.len() {
            self.load_requested = false;
        }
        vdebug!(prev = self.items.len(), next = items.len(), "set_items");
        self.items = items;
        self.viewport.set_len(self.items.len());
        self.emit_window(true);
    }

    /// Call this when the container is resized.
    pub fn on_resize(&mut self, container_height: u32) -> Result<(), ConfigError> {
        if self.viewport.config().container_height == container_height {
            return Ok(());
        }
        self.viewport.set_container_height(container_height)?;
        let offset = self.viewport.scroll_offset();
        self.viewport.set_scroll_offset_clamped(offset);
        self.emit_window(false);
        Ok(())
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// The offset is clamped to the scrollable height. Recomputation runs at most once per
    /// frame interval; a deferred pass is flushed by [`Self::tick`] and always uses the latest
    /// offset. This cancels any active smooth scroll.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        self.cancel_animation();
        self.viewport.set_scroll_offset_clamped(offset);
        vtrace!(
            offset,
            applied = self.viewport.scroll_offset(),
            now_ms,
            "on_scroll"
        );
        self.settle.touch(now_ms);
        if self.throttle.request(now_ms) {
            self.flush_scroll();
        }
    }

    /// Advances the component.
    ///
    /// - Polls the viewport observer, if any.
    /// - If a smooth scroll is active, moves it forward and returns the new offset so the host
    ///   can apply it to the real scroll container.
    /// - Otherwise flushes a throttled recomputation and detects settle, returning `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.poll_observer();

        if let Some(animation) = self.animation {
            self.viewport
                .set_scroll_offset_clamped(animation.offset_at(now_ms));
            self.flush_scroll();
            if animation.is_finished(now_ms) {
                self.animation = None;
                self.settle.cancel();
                self.throttle.clear_pending();
                self.sink.emit(ScrollEvent::ScrollEnd);
            }
            return Some(self.viewport.scroll_offset());
        }

        if self.throttle.poll(now_ms) {
            self.flush_scroll();
        }
        if self.settle.poll(now_ms) {
            if self.throttle.is_pending() {
                self.throttle.clear_pending();
                self.flush_scroll();
            }
            vtrace!(now_ms, "scroll settled");
            self.sink.emit(ScrollEvent::ScrollEnd);
        }
        None
    }

    /// Jumps so that `index` sits at the top of the viewport (clamped), then emits `ScrollEnd`.
    ///
    /// Returns the applied offset.
    pub fn scroll_to_item(&mut self, index: usize) -> u64 {
        let offset = self.viewport.offset_for_index(index);
        self.scroll_to_offset(offset)
    }

    pub fn scroll_to_top(&mut self) -> u64 {
        self.scroll_to_offset(0)
    }

    /// Jumps to `offset` (clamped), then emits `ScrollEnd`. Returns the applied offset.
    pub fn scroll_to_offset(&mut self, offset: u64) -> u64 {
        self.cancel_animation();
        let applied = self.viewport.set_scroll_offset_clamped(offset);
        vdebug!(offset, applied, "scroll_to_offset");
        self.settle.cancel();
        self.throttle.clear_pending();
        self.flush_scroll();
        self.sink.emit(ScrollEvent::ScrollEnd);
        applied
    }

    /// Starts a smooth scroll to `index`. `ScrollEnd` is emitted from `tick` when it lands.
    ///
    /// Returns the clamped target offset.
    pub fn smooth_scroll_to_item(
        &mut self,
        index: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        let to = self.viewport.offset_for_index(index);
        self.smooth_scroll_to_offset(to, now_ms, duration_ms, easing)
    }

    pub fn smooth_scroll_to_offset(
        &mut self,
        offset: u64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        let to = self.viewport.clamp_scroll_offset(offset);
        let from = self.viewport.scroll_offset();
        self.animation = Some(ScrollAnimation::new(from, to, now_ms, duration_ms, easing));
        to
    }

    /// Appends `items`, or prepends them when `prepend` is set.
    ///
    /// Prepending shifts the scroll offset by the inserted height so the rows on screen do not
    /// jump. Returns the number of items added.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = T>, prepend: bool) -> usize {
        let at = if prepend { 0 } else { self.items.len() };
        self.insert_items(at, items)
    }

    /// Splices `items` in at `at` (clamped to the collection length).
    ///
    /// Insertions at or above the first visible row shift the scroll offset by the inserted
    /// height. Appending resolves a pending `LoadMore` request. Returns the number inserted.
    pub fn insert_items(&mut self, at: usize, items: impl IntoIterator<Item = T>) -> usize {
        let prev_len = self.items.len();
        let at = at.min(prev_len);
        let before = self.visible_range();

        drop(self.items.splice(at..at, items));
        let count = self.items.len() - prev_len;
        if count == 0 {
            return 0;
        }

        let shift = self.viewport.insert(at, count);
        if shift > 0 {
            if let Some(animation) = &mut self.animation {
                animation.translate(i64::try_from(shift).unwrap_or(i64::MAX));
            }
        }
        if at == prev_len {
            self.load_requested = false;
        }
        vdebug!(at, count, shift, len = self.items.len(), "insert_items");

        self.emit_window(at < before.end_index);
        count
    }

    /// Removes and returns the item at `index`. Out-of-range indexes are ignored.
    pub fn remove_item(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            vwarn!(index, len = self.items.len(), "remove_item: out-of-range index");
            return None;
        }
        let before = self.visible_range();
        let item = self.items.remove(index);
        let shift = self.viewport.remove(index, 1);
        if shift > 0 {
            if let Some(animation) = &mut self.animation {
                animation.translate(-i64::try_from(shift).unwrap_or(i64::MAX));
            }
        }
        vdebug!(index, shift, len = self.items.len(), "remove_item");

        self.emit_window(index < before.end_index);
        Some(item)
    }

    /// Replaces the item at `index` and returns the previous one.
    ///
    /// Only an index inside the current window re-emits `ItemsVisible`; other slots are not on
    /// screen. Out-of-range indexes are ignored.
    pub fn update_item(&mut self, index: usize, item: T) -> Option<T> {
        let Some(slot) = self.items.get_mut(index) else {
            vwarn!(index, len = self.items.len(), "update_item: out-of-range index");
            return None;
        };
        let prev = core::mem::replace(slot, item);
        if self.visible_range().contains(index) {
            self.emit_window(true);
        } else {
            vtrace!(index, "update_item: outside window");
        }
        Some(prev)
    }

    /// Recomputes the window and emits it unconditionally.
    pub fn refresh(&mut self) -> Window {
        self.emit_window(true);
        self.window()
    }

    fn poll_observer(&mut self) {
        let Some(height) = self
            .observer
            .as_mut()
            .and_then(|observer| observer.poll_container_height())
        else {
            return;
        };
        if self.on_resize(height).is_err() {
            vwarn!(height, "viewport observer reported an invalid height");
        }
    }

    fn flush_scroll(&mut self) {
        self.emit_window(false);
        self.check_load_more();
    }

    fn check_load_more(&mut self) {
        if self.is_loading() || !self.has_more || self.items.is_empty() {
            return;
        }
        if !self.viewport.crosses_threshold() {
            return;
        }
        let current_len = self.items.len();
        vdebug!(current_len, offset = self.viewport.scroll_offset(), "load more");
        self.load_requested = true;
        self.sink.emit(ScrollEvent::LoadMore { current_len });
    }

    fn emit_window(&mut self, force: bool) {
        let window = self.viewport.refresh();
        let range = window.range;
        if !force && self.last_emitted == Some(range) {
            return;
        }
        self.last_emitted = Some(range);

        debug_assert!(range.end_index <= self.items.len());
        let items = self
            .items
            .get(range.as_range())
            .map(<[T]>::to_vec)
            .unwrap_or_default();
        vtrace!(
            start = range.start_index,
            end = range.end_index,
            force,
            "items visible"
        );
        self.sink.emit(ScrollEvent::ItemsVisible(VisibleWindow {
            start_index: range.start_index,
            end_index: range.end_index,
            items,
        }));
    }
}

impl<T, S> fmt::Debug for VirtualScroll<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualScroll")
            .field("viewport", &self.viewport)
            .field("len", &self.items.len())
            .field("options", &self.options)
            .field("animation", &self.animation)
            .field("host_loading", &self.host_loading)
            .field("load_requested", &self.load_requested)
            .field("has_more", &self.has_more)
            .finish_non_exhaustive()
    }
}
