// Example: window math for a long fixed-height list.
use virtual_scroll::{Viewport, ViewportConfig};

fn main() {
    let config = ViewportConfig::new(60, 400).with_buffer(5);
    let mut v = match Viewport::new(config, 1_000) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("invalid config: {err}");
            return;
        }
    };

    let w = v.window();
    println!(
        "top: range={:?} top_spacer={} bottom_spacer={}",
        w.range, w.top_spacer, w.bottom_spacer
    );

    v.set_scroll_offset(6_000);
    if let Some(w) = v.recompute() {
        println!("scrolled: range={:?} scroll_height={}", w.range, v.scroll_height());
    }

    // Five rows arrive above the viewport; the tracked offset follows them.
    let shift = v.insert(0, 5);
    let w = v.refresh();
    println!(
        "after prepend: shift={shift} offset={} range={:?}",
        v.scroll_offset(),
        w.range
    );
}
