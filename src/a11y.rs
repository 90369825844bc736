//! Keyboard accessibility helpers.

#[cfg(test)]
#[path = "a11y_test.rs"]
mod a11y_test;

/// Where forward Tab should move focus when it would leave the page.
///
/// Returns `Some(0)` when Tab (without Shift) is pressed on the last
/// focusable element; the caller focuses the first one and prevents the
/// default. Any other key or position leaves focus to the browser.
#[must_use]
pub fn tab_wrap_target(key: &str, shift: bool, active: Option<usize>, focusable: usize) -> Option<usize> {
    if key != "Tab" || shift || focusable == 0 {
        return None;
    }
    (active == Some(focusable - 1)).then_some(0)
}
