//! Mobile navigation toggle.

/// Open/closed state of the hamburger menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button clicked.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click landed somewhere on the page.
    ///
    /// Closes the menu unless the click hit the toggle or the menu itself.
    pub fn click_outside(&mut self, inside_toggle: bool, inside_menu: bool) {
        if !inside_toggle && !inside_menu {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut nav = NavMenu::default();
        assert!(!nav.is_open());
        nav.toggle();
        assert!(nav.is_open());
        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn test_link_click_closes() {
        let mut nav = NavMenu::default();
        nav.toggle();
        nav.close();
        assert!(!nav.is_open());
    }

    #[test]
    fn test_click_outside() {
        let mut nav = NavMenu::default();
        nav.toggle();

        nav.click_outside(true, false);
        assert!(nav.is_open());
        nav.click_outside(false, true);
        assert!(nav.is_open());
        nav.click_outside(false, false);
        assert!(!nav.is_open());
    }
}
