pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;
pub const HEADER_FADE_PROGRESS: f64 = 0.05;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.height
    }
}

/// Picks the first section whose extent holds `scroll_y + 100`. Sections without
/// bounds (not attached yet) are skipped; with no match `current` is kept.
pub fn active_section(
    scroll_y: f64,
    sections: &[(SectionId, Option<SectionBounds>)],
    current: SectionId,
) -> SectionId {
    let probe = scroll_y + ACTIVE_SECTION_OFFSET_PX;

    sections
        .iter()
        .find_map(|(id, bounds)| bounds.filter(|b| b.contains(probe)).map(|_| *id))
        .unwrap_or(current)
}

pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if !range.is_finite() || range <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }

    (scroll_y / range).clamp(0.0, 1.0)
}

pub fn header_opacity(progress: f64) -> f64 {
    (progress / HEADER_FADE_PROGRESS).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: SectionId,
    pub smooth: bool,
}

impl ScrollRequest {
    pub fn anchor(&self) -> &'static str {
        self.target.anchor()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: SectionId,
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the mobile menu and returns the scroll to perform. The active section
    /// itself follows from the resulting scroll events, not from this call.
    pub fn navigate(&mut self, target: SectionId) -> ScrollRequest {
        self.menu_open = false;
        ScrollRequest {
            target,
            smooth: true,
        }
    }

    pub fn observe_scroll(
        &mut self,
        scroll_y: f64,
        sections: &[(SectionId, Option<SectionBounds>)],
    ) -> bool {
        let next = active_section(scroll_y, sections, self.active);
        let changed = next != self.active;
        self.active = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(heights: &[f64]) -> Vec<(SectionId, Option<SectionBounds>)> {
        let mut top = 0.0;
        SectionId::ALL
            .iter()
            .zip(heights)
            .map(|(id, height)| {
                let bounds = SectionBounds {
                    offset_top: top,
                    height: *height,
                };
                top += height;
                (*id, Some(bounds))
            })
            .collect()
    }

    #[test]
    fn probe_point_is_scroll_plus_offset() {
        let sections = stacked(&[800.0, 600.0, 600.0, 600.0, 600.0, 400.0]);

        assert_eq!(active_section(0.0, &sections, SectionId::Contact), SectionId::Home);
        assert_eq!(active_section(699.0, &sections, SectionId::Home), SectionId::Home);
        assert_eq!(active_section(700.0, &sections, SectionId::Home), SectionId::About);
        assert_eq!(active_section(1_950.0, &sections, SectionId::Home), SectionId::Projects);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let sections = stacked(&[500.0, 500.0]);

        assert_eq!(active_section(5_000.0, &sections, SectionId::About), SectionId::About);
        assert_eq!(
            active_section(5_000.0, &sections, SectionId::Education),
            SectionId::Education
        );
    }

    #[test]
    fn gap_between_sections_keeps_stale_section() {
        let sections = vec![
            (
                SectionId::Home,
                Some(SectionBounds {
                    offset_top: 0.0,
                    height: 500.0,
                }),
            ),
            (
                SectionId::About,
                Some(SectionBounds {
                    offset_top: 700.0,
                    height: 500.0,
                }),
            ),
        ];

        assert_eq!(active_section(450.0, &sections, SectionId::Home), SectionId::Home);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let overlapping = SectionBounds {
            offset_top: 0.0,
            height: 1_000.0,
        };
        let sections = vec![
            (SectionId::Projects, Some(overlapping)),
            (SectionId::Education, Some(overlapping)),
        ];

        assert_eq!(active_section(0.0, &sections, SectionId::Home), SectionId::Projects);
    }

    #[test]
    fn detached_sections_are_skipped() {
        let sections = vec![
            (SectionId::Home, None),
            (
                SectionId::About,
                Some(SectionBounds {
                    offset_top: 0.0,
                    height: 400.0,
                }),
            ),
        ];

        assert_eq!(active_section(0.0, &sections, SectionId::Home), SectionId::About);
    }

    #[test]
    fn progress_is_clamped_and_safe_on_short_pages() {
        assert_eq!(scroll_progress(0.0, 3_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(1_000.0, 3_000.0, 1_000.0), 0.5);
        assert_eq!(scroll_progress(4_000.0, 3_000.0, 1_000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 3_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(100.0, 800.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(100.0, 1_000.0, 1_000.0), 0.0);
    }

    #[test]
    fn header_fades_in_over_first_five_percent() {
        assert_eq!(header_opacity(0.0), 0.0);
        assert!((header_opacity(0.025) - 0.5).abs() < 1e-9);
        assert_eq!(header_opacity(0.05), 1.0);
        assert_eq!(header_opacity(0.8), 1.0);
    }

    #[test]
    fn navigating_to_projects_scrolls_and_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);

        let request = nav.navigate(SectionId::Projects);

        assert_eq!(request.anchor(), "projects");
        assert!(request.smooth);
        assert!(!nav.menu_open);
    }

    #[test]
    fn navigating_with_closed_menu_keeps_it_closed() {
        let mut nav = NavState::default();

        let request = nav.navigate(SectionId::Contact);

        assert_eq!(request.target, SectionId::Contact);
        assert!(!nav.menu_open);
    }

    #[test]
    fn toggle_flips_menu_state() {
        let mut nav = NavState::default();

        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn observe_scroll_reports_changes_only() {
        let sections = stacked(&[800.0, 600.0]);
        let mut nav = NavState::default();

        assert!(!nav.observe_scroll(0.0, &sections));
        assert!(nav.observe_scroll(800.0, &sections));
        assert_eq!(nav.active, SectionId::About);
        assert!(!nav.observe_scroll(9_000.0, &sections));
        assert_eq!(nav.active, SectionId::About);
    }

    #[test]
    fn anchors_follow_section_order() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(|id| id.anchor()).collect();

        assert_eq!(
            anchors,
            ["home", "about", "experience", "projects", "education", "contact"]
        );
    }
}
