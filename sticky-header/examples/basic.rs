// Example: drive the engine from a simulated page and print every notification.
use sticky_header::{Dom, Position, StickyHeader, StickyHeaderEvent, StickyHeaderOptions};

/// A page with a 64px header, one promo block and a 3000px body.
struct Page {
    scroll_top: u64,
}

impl Dom for Page {
    type Element = &'static str;

    fn query_selector(&self, selector: &str) -> Option<&'static str> {
        match selector {
            ".sg-sticky-header" => Some("header"),
            "#promo" => Some("promo"),
            _ => None,
        }
    }

    fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    fn offset_height(&self, element: &&'static str) -> u32 {
        if *element == "header" { 64 } else { 300 }
    }

    fn page_top(&self, element: &&'static str) -> i64 {
        if *element == "promo" { 900 } else { 0 }
    }

    fn viewport_height(&self) -> u64 {
        700
    }

    fn content_height(&self) -> u64 {
        3_000
    }

    fn add_class(&mut self, element: &&'static str, class: &str) {
        println!("  {element}.classList.add({class:?})");
    }

    fn remove_class(&mut self, element: &&'static str, class: &str) {
        println!("  {element}.classList.remove({class:?})");
    }

    fn set_position(&mut self, element: &&'static str, position: Position) {
        println!("  {element}.style.position = {:?}", position.as_css());
    }

    fn set_body_padding_top(&mut self, padding: u32) {
        println!("  body.style.paddingTop = {padding}px");
    }

    fn dispatch_event(&mut self, event: StickyHeaderEvent<'_, &'static str>) {
        println!("  event {} {:?}", event.name(), event.kind);
    }
}

fn main() {
    let opts = StickyHeaderOptions::default()
        .with_sticky_start(100)
        .with_element_on_over(["#promo"])
        .with_on_offset_y([500, 1500]);

    let mut header = match StickyHeader::new(Page { scroll_top: 0 }, opts) {
        Ok(header) => header,
        Err(err) => {
            eprintln!("setup failed: {err}");
            return;
        }
    };
    println!("regions={:?}", header.regions());

    // Each step is one scroll event followed by one interval poll.
    for st in [50, 150, 600, 1000, 1600, 1200, 400, 20] {
        println!("scroll_top={st}");
        header.dom_mut().scroll_top = st;
        header.on_scroll_tick();
        header.poll();
    }

    println!("final state={:?}", header.state());
}
