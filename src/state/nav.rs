#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Mobile navigation menu state.
///
/// `expanded` is the ground truth mirrored into the toggle button's
/// `aria-expanded` attribute and the link list's display style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub expanded: bool,
}

impl NavState {
    /// Flip the menu open or closed.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// A click on a nav link closes the menu on narrow viewports, regardless
    /// of its prior state. On wide viewports the menu is left alone.
    pub fn link_clicked(&mut self, narrow: bool) {
        if narrow {
            self.expanded = false;
        }
    }
}
