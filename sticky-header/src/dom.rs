use crate::{Position, StickyHeaderEvent};

/// The host DOM capability the engine drives.
///
/// The engine never touches a real document: an adapter provides element lookup, layout reads,
/// style/class mutation and event dispatch. In a browser this maps onto `querySelector`,
/// `getBoundingClientRect`, `offsetHeight`, `classList`, `style` and `document.dispatchEvent`;
/// tests use an in-memory fake.
pub trait Dom {
    /// Handle to an element of the host document.
    type Element;

    /// Returns the first element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Current vertical scroll offset of the page.
    fn scroll_top(&self) -> u64;

    /// Rendered height of `element`, borders included.
    fn offset_height(&self, element: &Self::Element) -> u32;

    /// Top of `element` relative to the top of the page body, rounded to the nearest pixel.
    fn page_top(&self, element: &Self::Element) -> i64;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> u64;

    /// Height of the page content.
    fn content_height(&self) -> u64;

    fn add_class(&mut self, element: &Self::Element, class: &str);

    fn remove_class(&mut self, element: &Self::Element, class: &str);

    fn set_position(&mut self, element: &Self::Element, position: Position);

    /// Sets the body's top padding in pixels; `0` clears it.
    fn set_body_padding_top(&mut self, padding: u32);

    /// Delivers a notification to the host's listeners.
    fn dispatch_event(&mut self, event: StickyHeaderEvent<'_, Self::Element>);
}
