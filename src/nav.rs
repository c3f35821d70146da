use leptos::prelude::*;

use crate::section::{ActiveSection, SectionId};

/// Where the viewport should go after a navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Element(SectionId),
    Top,
    Stay,
}

impl ScrollTarget {
    pub fn resolve(id: SectionId, element_exists: bool) -> Self {
        if element_exists {
            ScrollTarget::Element(id)
        } else if id == SectionId::default() {
            ScrollTarget::Top
        } else {
            ScrollTarget::Stay
        }
    }
}

pub fn is_scrolled(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

/// State behind the navigation bar: the shared register plus the local
/// collapsed-menu flag.
#[derive(Debug, Clone, Copy)]
pub struct NavState {
    active: ActiveSection,
    menu_open: RwSignal<bool>,
}

impl NavState {
    pub fn new(active: ActiveSection) -> Self {
        Self {
            active,
            menu_open: RwSignal::new(false),
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn is_highlighted(&self, id: SectionId) -> bool {
        self.active.current() == id
    }

    /// Controls in display order, each paired with its highlight state.
    pub fn controls(&self) -> Vec<(SectionId, bool)> {
        let current = self.active.current();
        SectionId::ALL
            .into_iter()
            .map(|id| (id, id == current))
            .collect()
    }

    /// Handle activation of a control; the caller performs the returned scroll.
    pub fn navigate(&self, id: SectionId, element_exists: bool) -> ScrollTarget {
        self.active.set(id);
        self.menu_open.set(false);
        ScrollTarget::resolve(id, element_exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_nav<T>(f: impl FnOnce(NavState, ActiveSection) -> T) -> T {
        let owner = Owner::new();
        owner.with(|| {
            let active = ActiveSection::new();
            f(NavState::new(active), active)
        })
    }

    #[test]
    fn test_scroll_target_resolution() {
        assert_eq!(
            ScrollTarget::resolve(SectionId::Projects, true),
            ScrollTarget::Element(SectionId::Projects)
        );
        assert_eq!(
            ScrollTarget::resolve(SectionId::Hero, false),
            ScrollTarget::Top
        );
        assert_eq!(
            ScrollTarget::resolve(SectionId::Resume, false),
            ScrollTarget::Stay
        );
    }

    #[test]
    fn test_exactly_one_highlighted() {
        with_nav(|nav, active| {
            for id in SectionId::ALL {
                active.set(id);
                let lit = nav
                    .controls()
                    .into_iter()
                    .filter(|(_, on)| *on)
                    .map(|(id, _)| id)
                    .collect::<Vec<_>>();
                assert_eq!(lit, vec![id]);
                assert!(nav.is_highlighted(id));
            }
        });
    }

    #[test]
    fn test_controls_cover_every_section() {
        with_nav(|nav, _| {
            let ids = nav.controls().into_iter().map(|(id, _)| id).collect::<Vec<_>>();
            assert_eq!(ids, SectionId::ALL.to_vec());
        });
    }

    #[test]
    fn test_click_projects_scenario() {
        with_nav(|nav, active| {
            nav.toggle_menu();
            assert!(nav.is_menu_open());

            let target = nav.navigate(SectionId::Projects, true);

            assert_eq!(active.current_untracked(), SectionId::Projects);
            assert!(!nav.is_menu_open());
            assert_eq!(target, ScrollTarget::Element(SectionId::Projects));
            assert!(nav.is_highlighted(SectionId::Projects));
            assert!(!nav.is_highlighted(SectionId::Hero));
        });
    }

    #[test]
    fn test_navigate_collapses_closed_menu_too() {
        with_nav(|nav, _| {
            assert!(!nav.is_menu_open());
            nav.navigate(SectionId::Contact, true);
            assert!(!nav.is_menu_open());
            nav.toggle_menu();
            nav.toggle_menu();
            assert!(!nav.is_menu_open());
        });
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0, 20.0));
        assert!(!is_scrolled(20.0, 20.0));
        assert!(is_scrolled(21.0, 20.0));
    }
}
