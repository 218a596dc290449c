// Example: a host loop feeding scroll events and timer ticks into a Driver.
use sticky_header::{Dom, Position, StickyHeaderEvent, StickyHeaderOptions};
use sticky_header_adapter::Driver;

#[derive(Debug, Default)]
struct Page {
    scroll_top: u64,
}

impl Dom for Page {
    type Element = ();

    fn query_selector(&self, _selector: &str) -> Option<()> {
        Some(())
    }

    fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    fn offset_height(&self, _: &()) -> u32 {
        80
    }

    fn page_top(&self, _: &()) -> i64 {
        0
    }

    fn viewport_height(&self) -> u64 {
        900
    }

    fn content_height(&self) -> u64 {
        4_000
    }

    fn add_class(&mut self, _: &(), class: &str) {
        println!("    +class {class}");
    }

    fn remove_class(&mut self, _: &(), _class: &str) {}

    fn set_position(&mut self, _: &(), position: Position) {
        println!("    position {}", position.as_css());
    }

    fn set_body_padding_top(&mut self, _padding: u32) {}

    fn dispatch_event(&mut self, event: StickyHeaderEvent<'_, ()>) {
        println!("    event {}", event.name());
    }
}

fn main() {
    let opts = StickyHeaderOptions::default()
        .with_sticky_start(200)
        .with_on_offset_y([1_000, 2_000]);
    let mut driver = match Driver::new(Page::default(), opts, 0) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    // A 60fps host loop: scroll down for a second, pause, then scroll back up.
    let mut now_ms = 0u64;
    let mut st = 0u64;
    for frame in 0..180u64 {
        now_ms += 16;
        let step = match frame {
            0..60 => Some(st + 40),
            90..150 => Some(st.saturating_sub(40)),
            _ => None,
        };
        if let Some(next) = step {
            st = next;
            driver.engine_mut().dom_mut().scroll_top = st;
            driver.on_scroll();
        }
        if driver.tick(now_ms) {
            println!("t={now_ms}ms evaluated at scroll_top={st}");
        }
    }

    driver.dispose();
    println!("disposed; final state={:?}", driver.engine().state());
}
