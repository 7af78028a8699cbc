pub const POINTER_THROTTLE_MS: f64 = 10.0;
pub const INNER_RING_DIAMETER: f64 = 8.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
}

impl CursorVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hover => "hover",
        }
    }

    pub fn outer_diameter(self) -> f64 {
        match self {
            Self::Default => 32.0,
            Self::Hover => 48.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPlacement {
    pub left: f64,
    pub top: f64,
    pub diameter: f64,
}

impl RingPlacement {
    pub fn centered_on(position: PointerPosition, diameter: f64) -> Self {
        let radius = diameter / 2.0;
        Self {
            left: position.x - radius,
            top: position.y - radius,
            diameter,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translate3d({:.1}px, {:.1}px, 0); width: {:.0}px; height: {:.0}px;",
            self.left, self.top, self.diameter, self.diameter
        )
    }
}

pub fn outer_ring(position: PointerPosition, variant: CursorVariant) -> RingPlacement {
    RingPlacement::centered_on(position, variant.outer_diameter())
}

pub fn inner_ring(position: PointerPosition) -> RingPlacement {
    RingPlacement::centered_on(position, INNER_RING_DIAMETER)
}

/// Caller-side rate limit for pointer samples. A sample passes only when strictly
/// more than the window has elapsed since the last one that passed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerThrottle {
    window_ms: f64,
    last_admitted_ms: f64,
}

impl Default for PointerThrottle {
    fn default() -> Self {
        Self::new(POINTER_THROTTLE_MS)
    }
}

impl PointerThrottle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_admitted_ms: f64::NEG_INFINITY,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_admitted_ms > self.window_ms {
            self.last_admitted_ms = now_ms;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_ring_is_centered_for_each_variant() {
        let position = PointerPosition::new(100.0, 60.0);

        let default_ring = outer_ring(position, CursorVariant::Default);
        assert_eq!(default_ring.left, 84.0);
        assert_eq!(default_ring.top, 44.0);
        assert_eq!(default_ring.diameter, 32.0);

        let hover_ring = outer_ring(position, CursorVariant::Hover);
        assert_eq!(hover_ring.left, 76.0);
        assert_eq!(hover_ring.top, 36.0);
        assert_eq!(hover_ring.diameter, 48.0);
    }

    #[test]
    fn inner_ring_ignores_variant() {
        let ring = inner_ring(PointerPosition::new(10.0, 10.0));

        assert_eq!(ring.left, 6.0);
        assert_eq!(ring.top, 6.0);
        assert_eq!(ring.diameter, INNER_RING_DIAMETER);
    }

    #[test]
    fn ring_style_positions_by_transform() {
        let ring = outer_ring(PointerPosition::new(16.0, 16.0), CursorVariant::Default);

        assert_eq!(
            ring.style(),
            "transform: translate3d(0.0px, 0.0px, 0); width: 32px; height: 32px;"
        );
    }

    #[test]
    fn throttle_admits_first_sample() {
        let mut throttle = PointerThrottle::default();

        assert!(throttle.admit(0.0));
    }

    #[test]
    fn throttle_drops_samples_inside_the_window() {
        let mut throttle = PointerThrottle::default();

        assert!(throttle.admit(1_000.0));
        assert!(!throttle.admit(1_004.0));
        assert!(!throttle.admit(1_010.0));
        assert!(throttle.admit(1_010.5));
        assert!(!throttle.admit(1_015.0));
        assert!(throttle.admit(1_021.0));
    }

    #[test]
    fn throttle_bounds_update_rate() {
        let mut throttle = PointerThrottle::default();
        let admitted = (0..1_000)
            .map(|ms| throttle.admit(f64::from(ms)))
            .filter(|passed| *passed)
            .count();

        assert_eq!(admitted, 91);
    }
}
