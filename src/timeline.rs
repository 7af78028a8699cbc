pub const ENTRANCE_OFFSET_PX: f64 = 50.0;
pub const ENTRANCE_STAGGER_S: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Primary,
    Secondary,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Primary
        } else {
            Self::Secondary
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "timeline-primary",
            Self::Secondary => "timeline-secondary",
        }
    }

    pub fn entrance_offset_px(self) -> f64 {
        match self {
            Self::Primary => ENTRANCE_OFFSET_PX,
            Self::Secondary => -ENTRANCE_OFFSET_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSlot {
    pub index: usize,
    pub side: TimelineSide,
}

impl TimelineSlot {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            side: TimelineSide::for_index(index),
        }
    }

    pub fn entrance_delay_s(&self) -> f64 {
        ENTRANCE_STAGGER_S * self.index as f64
    }

    pub fn card_style(&self, visible: bool) -> String {
        let offset = if visible {
            0.0
        } else {
            self.side.entrance_offset_px()
        };

        format!(
            "--entrance-x: {offset:.0}px; transition-delay: {:.1}s;",
            self.entrance_delay_s()
        )
    }
}

pub fn layout(len: usize) -> Vec<TimelineSlot> {
    (0..len).map(TimelineSlot::new).collect()
}
