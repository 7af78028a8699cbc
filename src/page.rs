//! Orchestrator state for the whole page.
//!
//! Every browser signal the page reacts to is turned into a [`PageEvent`] and folded
//! into [`PageState`]. Side effects (actually scrolling the window) are expressed as a
//! [`ScrollRequest`] tagged with a generation counter, so the view layer can run each
//! request exactly once.

use crate::cursor::{CursorVariant, PointerPosition, PointerThrottle};
use crate::navigation::{
    header_opacity, scroll_progress, NavState, ScrollRequest, SectionBounds, SectionId,
};

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    Scrolled {
        scroll_y: f64,
        document_height: f64,
        viewport_height: f64,
        sections: Vec<(SectionId, Option<SectionBounds>)>,
    },
    PointerSampled {
        position: PointerPosition,
        at_ms: f64,
    },
    CursorVariantChanged(CursorVariant),
    ToggleMenu,
    Navigate(SectionId),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub nav: NavState,
    pub progress: f64,
    pub pointer: PointerPosition,
    pub cursor_variant: CursorVariant,
    pub scroll_request: Option<(u64, ScrollRequest)>,
    throttle: PointerThrottle,
    scroll_generation: u64,
}

impl PageState {
    pub fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::Scrolled {
                scroll_y,
                document_height,
                viewport_height,
                sections,
            } => {
                self.progress = scroll_progress(scroll_y, document_height, viewport_height);
                self.nav.observe_scroll(scroll_y, &sections);
            }
            PageEvent::PointerSampled { position, at_ms } => {
                if self.throttle.admit(at_ms) {
                    self.pointer = position;
                }
            }
            PageEvent::CursorVariantChanged(variant) => self.cursor_variant = variant,
            PageEvent::ToggleMenu => self.nav.toggle_menu(),
            PageEvent::Navigate(target) => {
                let request = self.nav.navigate(target);
                self.scroll_generation = self.scroll_generation.wrapping_add(1);
                self.scroll_request = Some((self.scroll_generation, request));
            }
        }
    }

    pub fn active(&self) -> SectionId {
        self.nav.active
    }

    pub fn menu_open(&self) -> bool {
        self.nav.menu_open
    }

    pub fn header_opacity(&self) -> f64 {
        header_opacity(self.progress)
    }

    pub fn progress_style(&self) -> String {
        format!("transform: scaleX({:.4});", self.progress)
    }

    pub fn header_style(&self) -> String {
        format!("opacity: {:.3};", self.header_opacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(scroll_y: f64) -> PageEvent {
        let mut top = 0.0;
        let sections = SectionId::ALL
            .iter()
            .map(|id| {
                let bounds = SectionBounds {
                    offset_top: top,
                    height: 1_000.0,
                };
                top += 1_000.0;
                (*id, Some(bounds))
            })
            .collect();

        PageEvent::Scrolled {
            scroll_y,
            document_height: 6_000.0,
            viewport_height: 1_000.0,
            sections,
        }
    }

    #[test]
    fn projects_control_scrolls_and_closes_menu_in_one_event() {
        let mut page = PageState::default();
        page.apply(PageEvent::ToggleMenu);
        assert!(page.menu_open());

        page.apply(PageEvent::Navigate(SectionId::Projects));

        assert!(!page.menu_open());
        let (_, request) = page.scroll_request.expect("scroll requested");
        assert_eq!(request.anchor(), "projects");
        assert!(request.smooth);
    }

    #[test]
    fn repeated_navigation_gets_fresh_generations() {
        let mut page = PageState::default();

        page.apply(PageEvent::Navigate(SectionId::About));
        let first = page.scroll_request.map(|(generation, _)| generation);
        page.apply(PageEvent::Navigate(SectionId::About));
        let second = page.scroll_request.map(|(generation, _)| generation);

        assert_ne!(first, second);
    }

    #[test]
    fn scrolling_updates_progress_header_and_active_section() {
        let mut page = PageState::default();

        page.apply(scrolled(0.0));
        assert_eq!(page.active(), SectionId::Home);
        assert_eq!(page.header_opacity(), 0.0);

        page.apply(scrolled(3_000.0));
        assert_eq!(page.active(), SectionId::Projects);
        assert!((page.progress - 0.6).abs() < 1e-9);
        assert_eq!(page.header_opacity(), 1.0);
        assert_eq!(page.header_style(), "opacity: 1.000;");
        assert_eq!(page.progress_style(), "transform: scaleX(0.6000);");
    }

    #[test]
    fn scrolling_past_every_section_keeps_last_match() {
        let mut page = PageState::default();

        page.apply(scrolled(5_500.0));
        assert_eq!(page.active(), SectionId::Contact);
        page.apply(scrolled(9_000.0));
        assert_eq!(page.active(), SectionId::Contact);
    }

    #[test]
    fn pointer_samples_are_throttled() {
        let mut page = PageState::default();

        page.apply(PageEvent::PointerSampled {
            position: PointerPosition::new(5.0, 5.0),
            at_ms: 100.0,
        });
        page.apply(PageEvent::PointerSampled {
            position: PointerPosition::new(9.0, 9.0),
            at_ms: 105.0,
        });
        assert_eq!(page.pointer, PointerPosition::new(5.0, 5.0));

        page.apply(PageEvent::PointerSampled {
            position: PointerPosition::new(12.0, 14.0),
            at_ms: 111.0,
        });
        assert_eq!(page.pointer, PointerPosition::new(12.0, 14.0));
    }

    #[test]
    fn dropped_pointer_sample_leaves_state_equal() {
        let mut page = PageState::default();
        page.apply(PageEvent::PointerSampled {
            position: PointerPosition::new(1.0, 1.0),
            at_ms: 50.0,
        });
        let before = page.clone();

        page.apply(PageEvent::PointerSampled {
            position: PointerPosition::new(2.0, 2.0),
            at_ms: 52.0,
        });

        assert_eq!(page, before);
    }

    #[test]
    fn cursor_variant_follows_navigation_hover() {
        let mut page = PageState::default();

        page.apply(PageEvent::CursorVariantChanged(CursorVariant::Hover));
        assert_eq!(page.cursor_variant, CursorVariant::Hover);
        page.apply(PageEvent::CursorVariantChanged(CursorVariant::Default));
        assert_eq!(page.cursor_variant, CursorVariant::Default);
    }
}
