//! Decorative background particles.
//!
//! A field is generated once per mount from an injected uniform source so the
//! browser can pass `Math.random` while tests pass their own generator.

pub const PARTICLE_COUNT: usize = 30;
const SIZE_RANGE_PX: (f64, f64) = (5.0, 15.0);
const DURATION_RANGE_S: (f64, f64) = (10.0, 30.0);
const DELAY_RANGE_S: (f64, f64) = (0.0, 5.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleTone {
    Purple,
    Pink,
    Blue,
}

impl ParticleTone {
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::Purple,
            1 => Self::Pink,
            _ => Self::Blue,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Purple => "particle-purple",
            Self::Pink => "particle-pink",
            Self::Blue => "particle-blue",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    pub tone: ParticleTone,
}

impl ParticleSpec {
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x, self.y, self.size, self.size, self.duration, self.delay
        )
    }
}

/// Generates a field of `count` particles. `uniform` must yield values in `[0, 1)`.
pub fn generate_field(count: usize, mut uniform: impl FnMut() -> f64) -> Vec<ParticleSpec> {
    (0..count)
        .map(|id| ParticleSpec {
            id,
            x: percent(uniform()),
            y: percent(uniform()),
            size: scale(uniform(), SIZE_RANGE_PX),
            duration: scale(uniform(), DURATION_RANGE_S),
            delay: scale(uniform(), DELAY_RANGE_S),
            tone: ParticleTone::for_index(id),
        })
        .collect()
}

fn unit(sample: f64) -> f64 {
    if sample.is_finite() {
        sample.clamp(0.0, 1.0 - f64::EPSILON)
    } else {
        0.0
    }
}

fn percent(sample: f64) -> f64 {
    unit(sample) * 100.0
}

fn scale(sample: f64, (low, high): (f64, f64)) -> f64 {
    low + unit(sample) * (high - low)
}
