use super::*;

// =============================================================
// Tab wrap
// =============================================================

#[test]
fn tab_on_last_element_wraps_to_first() {
    assert_eq!(tab_wrap_target("Tab", false, Some(4), 5), Some(0));
}

#[test]
fn tab_elsewhere_is_left_to_browser() {
    assert_eq!(tab_wrap_target("Tab", false, Some(2), 5), None);
    assert_eq!(tab_wrap_target("Tab", false, None, 5), None);
}

#[test]
fn shift_tab_and_other_keys_are_ignored() {
    assert_eq!(tab_wrap_target("Tab", true, Some(4), 5), None);
    assert_eq!(tab_wrap_target("Enter", false, Some(4), 5), None);
}

#[test]
fn no_focusable_elements_never_wraps() {
    assert_eq!(tab_wrap_target("Tab", false, None, 0), None);
}
