use crate::*;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start))
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn hotel_list() -> Viewport {
    let config = ViewportConfig::new(60, 400)
        .with_buffer(5)
        .with_threshold(0.8);
    Viewport::new(config, 1000).unwrap()
}

#[test]
fn window_at_top_of_list() {
    let v = hotel_list();
    let w = v.window();
    assert_eq!(w.visible_count, 7);
    assert_eq!(w.range, VisibleRange::new(0, 17));
    assert_eq!(w.top_spacer, 0);
    assert_eq!(w.bottom_spacer, (1000 - 17) * 60);
}

#[test]
fn window_midway() {
    let mut v = hotel_list();
    v.set_scroll_offset(6000);
    let w = v.recompute().unwrap();
    assert_eq!(w.range, VisibleRange::new(95, 112));
    assert_eq!(w.top_spacer, 95 * 60);
    assert_eq!(w.bottom_spacer, (1000 - 112) * 60);
}

#[test]
fn window_at_bottom_keeps_leading_buffer() {
    let mut v = hotel_list();
    let max = v.max_scroll_offset();
    assert_eq!(max, 60_000 - 400);
    v.set_scroll_offset(max);
    let w = v.refresh();
    // first = floor(59600 / 60) = 993 = 1000 - 7, start = 993 - 5
    assert_eq!(w.range, VisibleRange::new(988, 1000));
    assert_eq!(w.bottom_spacer, 0);
}

#[test]
fn offset_past_the_end_clamps_start() {
    let mut v = hotel_list();
    v.set_scroll_offset(6000);
    v.refresh();

    // The collection shrank under the user.
    v.set_len(50);
    let w = v.recompute().unwrap();
    assert_eq!(w.range.start_index, 50 - 7 - 5);
    assert_eq!(w.range.end_index, 50);
    assert_eq!(w.top_spacer + w.bottom_spacer + w.range.len() as u64 * 60, 50 * 60);
}

#[test]
fn short_list_renders_everything() {
    let v = Viewport::new(ViewportConfig::new(60, 400), 3).unwrap();
    let w = v.window();
    assert_eq!(w.range, VisibleRange::new(0, 3));
    assert_eq!(w.top_spacer, 0);
    assert_eq!(w.bottom_spacer, 0);
    assert_eq!(v.max_scroll_offset(), 0);
}

#[test]
fn empty_list_has_empty_window() {
    let mut v = Viewport::new(ViewportConfig::new(60, 400), 0).unwrap();
    v.set_scroll_offset(1234);
    let w = v.refresh();
    assert!(w.is_empty());
    assert_eq!(w.range, VisibleRange::new(0, 0));
    assert_eq!(w.top_spacer, 0);
    assert_eq!(w.bottom_spacer, 0);
    assert_eq!(v.scroll_ratio(), None);
    assert!(!v.crosses_threshold());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    assert_eq!(
        Viewport::new(ViewportConfig::new(0, 400), 10).unwrap_err(),
        ConfigError::ZeroItemHeight
    );
    assert_eq!(
        Viewport::new(ViewportConfig::new(60, 0), 10).unwrap_err(),
        ConfigError::ZeroContainerHeight
    );
    assert!(matches!(
        Viewport::new(ViewportConfig::new(60, 400).with_threshold(0.0), 10),
        Err(ConfigError::ThresholdOutOfRange(_))
    ));
    assert!(matches!(
        Viewport::new(ViewportConfig::new(60, 400).with_threshold(1.5), 10),
        Err(ConfigError::ThresholdOutOfRange(_))
    ));
    assert!(matches!(
        Viewport::new(ViewportConfig::new(60, 400).with_threshold(f64::NAN), 10),
        Err(ConfigError::ThresholdOutOfRange(_))
    ));
    assert!(ViewportConfig::new(60, 400).with_threshold(1.0).validate().is_ok());
}

#[test]
fn rejected_configure_keeps_last_good_config() {
    let mut v = hotel_list();
    let before = *v.config();
    assert_eq!(
        v.configure(before.with_item_height(0)),
        Err(ConfigError::ZeroItemHeight)
    );
    assert_eq!(*v.config(), before);
    assert_eq!(v.set_container_height(0), Err(ConfigError::ZeroContainerHeight));
    assert_eq!(*v.config(), before);

    v.set_container_height(800).unwrap();
    assert_eq!(v.config().container_height, 800);
    let w = v.recompute().unwrap();
    assert_eq!(w.visible_count, 14);
    assert_eq!(w.range, VisibleRange::new(0, 24));
}

#[test]
fn config_error_messages() {
    use std::string::ToString;
    assert_eq!(
        ConfigError::ZeroItemHeight.to_string(),
        "item height must be greater than zero"
    );
    assert_eq!(
        ConfigError::ThresholdOutOfRange(2.0).to_string(),
        "load-more threshold must be within (0, 1], got 2"
    );
}

#[test]
fn recompute_reports_only_changes() {
    let mut v = hotel_list();
    assert_eq!(v.recompute(), None);

    // Still inside item 0.
    v.set_scroll_offset(30);
    assert_eq!(v.recompute(), None);

    v.set_scroll_offset(60 * 6);
    let w = v.recompute().unwrap();
    assert_eq!(w.range, VisibleRange::new(1, 18));
    assert_eq!(v.recompute(), None);
}

#[test]
fn refresh_is_idempotent() {
    let mut v = hotel_list();
    v.set_scroll_offset(12_345);
    let a = v.refresh();
    let b = v.refresh();
    assert_eq!(a, b);
    assert_eq!(v.window(), b);
}

#[test]
fn scroll_direction_tracks_offset_changes() {
    let mut v = hotel_list();
    assert_eq!(v.scroll_direction(), None);
    v.set_scroll_offset(100);
    assert_eq!(v.scroll_direction(), Some(ScrollDirection::Forward));
    v.set_scroll_offset(50);
    assert_eq!(v.scroll_direction(), Some(ScrollDirection::Backward));
    v.set_scroll_offset(50);
    assert_eq!(v.scroll_direction(), Some(ScrollDirection::Backward));
}

#[test]
fn clamped_offsets() {
    let mut v = hotel_list();
    assert_eq!(v.set_scroll_offset_clamped(1_000_000), 59_600);
    assert_eq!(v.scroll_offset(), 59_600);
    assert_eq!(v.offset_for_index(0), 0);
    assert_eq!(v.offset_for_index(100), 6000);
    assert_eq!(v.offset_for_index(999), 59_600);
    assert_eq!(v.offset_for_index(5000), 59_600);
}

#[test]
fn load_more_threshold_boundary() {
    let mut v = hotel_list();
    assert_eq!(v.scroll_height(), 60_000);

    v.set_scroll_offset(47_599);
    assert!(!v.crosses_threshold());
    v.set_scroll_offset(47_600);
    assert!(v.crosses_threshold());
    v.set_scroll_offset(59_600);
    assert!(v.crosses_threshold());
}

#[test]
fn prepend_shifts_offset_by_inserted_height() {
    let mut v = hotel_list();
    v.set_scroll_offset(6000);
    v.refresh();
    let first = v.first_visible_index();

    let shift = v.insert(0, 5);
    assert_eq!(shift, 300);
    assert_eq!(v.scroll_offset(), 6300);
    assert_eq!(v.len(), 1005);
    assert_eq!(v.first_visible_index(), first + 5);
}

#[test]
fn prepend_at_top_still_anchors() {
    let mut v = hotel_list();
    assert_eq!(v.insert(0, 5), 300);
    assert_eq!(v.scroll_offset(), 300);
}

#[test]
fn append_does_not_shift() {
    let mut v = hotel_list();
    v.set_scroll_offset(6000);
    assert_eq!(v.insert(v.len(), 20), 0);
    assert_eq!(v.scroll_offset(), 6000);
    assert_eq!(v.len(), 1020);

    // Inserting below the viewport top is also invisible to the anchor.
    assert_eq!(v.insert(500, 1), 0);
    assert_eq!(v.scroll_offset(), 6000);
}

#[test]
fn insert_into_empty_list_does_not_shift() {
    let mut v = Viewport::new(ViewportConfig::new(60, 400), 0).unwrap();
    assert_eq!(v.insert(0, 10), 0);
    assert_eq!(v.scroll_offset(), 0);
    assert_eq!(v.len(), 10);
}

#[test]
fn remove_above_viewport_pulls_offset_up() {
    let mut v = hotel_list();
    v.set_scroll_offset(6000); // first visible = 100

    assert_eq!(v.remove(10, 1), 60);
    assert_eq!(v.scroll_offset(), 5940);
    assert_eq!(v.len(), 999);

    // Straddling the first visible item: only the rows above count.
    let first = v.first_visible_index();
    assert_eq!(first, 99);
    assert_eq!(v.remove(97, 4), 2 * 60);
    assert_eq!(v.len(), 995);

    // Below the viewport top: no shift.
    let offset = v.scroll_offset();
    assert_eq!(v.remove(500, 3), 0);
    assert_eq!(v.scroll_offset(), offset);
}

#[test]
fn remove_out_of_range_is_noop() {
    let mut v = hotel_list();
    assert_eq!(v.remove(1000, 1), 0);
    assert_eq!(v.len(), 1000);
    assert_eq!(v.remove(998, 10), 0);
    assert_eq!(v.len(), 998);
}

#[test]
fn randomized_window_invariants() {
    let mut rng = Lcg::new(0x5eed_1234);
    for _ in 0..2000 {
        let item_height = rng.gen_range_u32(1, 200);
        let container_height = rng.gen_range_u32(1, 2000);
        let buffer = rng.gen_range_usize(0, 20);
        let len = rng.gen_range_usize(0, 5000);
        let config = ViewportConfig::new(item_height, container_height).with_buffer(buffer);
        let scroll_height = len as u64 * item_height as u64;
        let offset = rng.gen_range_u64(0, scroll_height + 1);

        let w = Window::compute(&config, len, offset);
        let r = w.range;
        assert!(r.start_index <= r.end_index);
        assert!(r.end_index <= len);
        assert!(r.len() <= config.max_window_len());
        assert_eq!(
            w.top_spacer + w.bottom_spacer + r.len() as u64 * item_height as u64,
            scroll_height
        );
    }
}

#[test]
fn randomized_start_is_monotonic_in_offset() {
    let mut rng = Lcg::new(42);
    for _ in 0..200 {
        let item_height = rng.gen_range_u32(1, 100);
        let container_height = rng.gen_range_u32(1, 1000);
        let buffer = rng.gen_range_usize(0, 10);
        let len = rng.gen_range_usize(1, 2000);
        let config = ViewportConfig::new(item_height, container_height).with_buffer(buffer);
        let max = (len as u64 * item_height as u64).saturating_sub(container_height as u64);

        let mut offset = 0u64;
        let mut prev_start = 0usize;
        while offset <= max {
            let w = Window::compute(&config, len, offset);
            assert!(w.range.start_index >= prev_start);
            prev_start = w.range.start_index;
            offset += rng.gen_range_u64(1, 3 * item_height as u64 + 1);
        }
    }
}
