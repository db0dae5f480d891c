// Example: older messages are prepended while the user reads; the row on screen stays put.
use virtual_scroll::ViewportConfig;
use virtual_scroll_adapter::{Easing, EventQueue, VirtualScroll};

#[derive(Clone, Debug)]
struct Message {
    id: u64,
    body: String,
}

fn messages(ids: std::ops::Range<u64>) -> Vec<Message> {
    ids.map(|id| Message {
        id,
        body: format!("message {id}"),
    })
    .collect()
}

fn main() {
    let config = ViewportConfig::new(40, 320).with_buffer(3);
    let Ok(list) = VirtualScroll::new(config, messages(1_000..1_200), EventQueue::<Message>::new()) else {
        return;
    };
    let mut list = list.with_key_fn(|m: &Message| m.id);

    list.scroll_to_item(50);
    let top = list.viewport().first_visible_index();
    println!(
        "before: offset={} top={:?}",
        list.scroll_offset(),
        list.items().get(top).map(|m| &m.body)
    );

    list.add_items(messages(900..1_000), true);
    let top = list.viewport().first_visible_index();
    println!(
        "after:  offset={} top={:?}",
        list.scroll_offset(),
        list.items().get(top).map(|m| &m.body)
    );
    println!("index of key 1050 = {:?}", list.index_of_key(1_050));

    // Glide back to the newest message.
    let target = list.smooth_scroll_to_item(list.len() - 1, 0, 240, Easing::EaseOutCubic);
    let mut now_ms = 0;
    while list.is_animating() {
        now_ms += 16;
        if let Some(offset) = list.tick(now_ms) {
            println!("t={now_ms:>3}ms offset={offset} (target {target})");
        }
    }
    println!("{} events emitted", list.sink().len());
}
