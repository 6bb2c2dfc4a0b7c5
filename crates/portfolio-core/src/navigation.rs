//! Shell navigation state: loading gate, mobile menu and active section.

use crate::section::SectionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    menu_open: bool,
    active_section: SectionId,
    loading: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active_section: SectionId::default(),
            loading: true,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }

    /// Flip the mobile menu, returning the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Leave the loading screen. Returns `true` only for the call that
    /// actually performed the transition.
    pub fn finish_loading(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }

    /// Returns `true` if the active section changed.
    pub fn set_active(&mut self, section: SectionId) -> bool {
        if self.active_section == section {
            return false;
        }
        self.active_section = section;
        true
    }

    /// A scroll-to-section action finished; the mobile menu never stays
    /// open across navigation.
    pub fn finish_navigation(&mut self) {
        self.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let nav = NavigationState::new();
        assert!(!nav.is_menu_open());
        assert!(nav.is_loading());
        assert_eq!(nav.active_section(), SectionId::Home);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut nav = NavigationState::new();
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn loading_finishes_once() {
        let mut nav = NavigationState::new();
        assert!(nav.finish_loading());
        assert!(!nav.is_loading());
        assert!(!nav.finish_loading());
        assert!(!nav.is_loading());
    }

    #[test]
    fn navigation_closes_menu() {
        let mut nav = NavigationState::new();
        nav.toggle_menu();
        nav.finish_navigation();
        assert!(!nav.is_menu_open());

        // Already closed stays closed
        nav.finish_navigation();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn set_active_reports_changes() {
        let mut nav = NavigationState::new();
        assert!(!nav.set_active(SectionId::Home));
        assert!(nav.set_active(SectionId::About));
        assert!(nav.is_active(SectionId::About));
        assert!(!nav.is_active(SectionId::Home));
        // Same section again is not a change
        assert!(!nav.set_active(SectionId::About));
    }
}
