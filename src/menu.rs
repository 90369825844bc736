//! Mobile navigation menu state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of the `.main-nav` menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The `.menu-toggle` button was pressed.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A click landed somewhere on the page. Closes the menu when it fell
    /// outside both the menu and its toggle. Returns whether it closed.
    pub fn click(&mut self, inside_menu: bool, inside_toggle: bool) -> bool {
        if inside_menu || inside_toggle {
            return false;
        }
        self.close()
    }

    /// A key was pressed. Escape closes the menu. Returns whether it closed.
    pub fn key(&mut self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        self.close()
    }

    fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
