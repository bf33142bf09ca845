use super::*;

// =============================================================
// Defaults and toggling
// =============================================================

#[test]
fn nav_starts_closed() {
    assert!(!NavState::default().expanded);
}

#[test]
fn toggle_opens_then_closes() {
    let mut nav = NavState::default();
    nav.toggle();
    assert!(nav.expanded);
    nav.toggle();
    assert!(!nav.expanded);
}

#[test]
fn toggle_pair_restores_original_state() {
    for start in [false, true] {
        let mut nav = NavState { expanded: start };
        nav.toggle();
        nav.toggle();
        assert_eq!(nav.expanded, start);
    }
}

// =============================================================
// Link clicks
// =============================================================

#[test]
fn link_click_on_narrow_viewport_always_closes() {
    for start in [false, true] {
        let mut nav = NavState { expanded: start };
        nav.link_clicked(true);
        assert!(!nav.expanded);
    }
}

#[test]
fn link_click_on_wide_viewport_leaves_menu_alone() {
    for start in [false, true] {
        let mut nav = NavState { expanded: start };
        nav.link_clicked(false);
        assert_eq!(nav.expanded, start);
    }
}
