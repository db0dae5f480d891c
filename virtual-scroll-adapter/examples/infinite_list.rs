// Example: drive the component from a simulated scroll loop and serve `LoadMore` requests.
use virtual_scroll::ViewportConfig;
use virtual_scroll_adapter::{EventQueue, ScrollEvent, VirtualScroll};

fn page(start: u64, len: u64) -> Vec<String> {
    (start..start + len).map(|i| format!("room #{i}")).collect()
}

fn main() {
    let config = ViewportConfig::new(60, 400).with_threshold(0.8);
    let Ok(mut list) = VirtualScroll::new(config, page(0, 100), EventQueue::<String>::new()) else {
        return;
    };

    let mut now_ms = 0;
    let mut offset = 0;
    while list.len() < 300 {
        now_ms += 16;
        offset += 240;
        list.on_scroll(offset, now_ms);
        list.tick(now_ms);

        let events: Vec<_> = list.sink_mut().drain().collect();
        for event in events {
            match event {
                ScrollEvent::ItemsVisible(w) => {
                    println!("visible {}..{} ({} rows)", w.start_index, w.end_index, w.items.len());
                }
                ScrollEvent::LoadMore { current_len } => {
                    println!("load more at len={current_len}");
                    list.add_items(page(current_len as u64, 100), false);
                }
                ScrollEvent::ScrollEnd => println!("scroll end"),
            }
        }
    }
    list.set_has_more(false);
    println!("done: len={} offset={}", list.len(), list.scroll_offset());
}
