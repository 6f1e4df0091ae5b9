//! Smooth scrolling to the newest entry in the message list.

/// Smoothly scroll the given element into view.
///
/// The chat view keeps an invisible marker after the last rendered row and
/// scrolls it into view whenever the list or the typing row changes.
#[cfg(feature = "hydrate")]
pub fn scroll_into_view_smooth(el: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
