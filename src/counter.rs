use crate::content::MAX_LEVEL;

pub const COUNT_STEP_MS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Delayed,
    Counting,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterSchedule {
    Reveal,
    Wait(u32),
    Step(u32),
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCounter {
    target: u8,
    delay_ms: u32,
    value: u8,
    phase: CounterPhase,
}

impl SkillCounter {
    pub fn new(target: u8, delay_ms: u32) -> Self {
        Self {
            target: target.min(MAX_LEVEL),
            delay_ms,
            value: 0,
            phase: CounterPhase::Idle,
        }
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == CounterPhase::Complete
    }

    /// One-shot. A zero target completes here without scheduling anything.
    pub fn reveal(&mut self) -> Option<u32> {
        if self.phase != CounterPhase::Idle {
            return None;
        }

        if self.target == 0 {
            self.phase = CounterPhase::Complete;
            return None;
        }

        self.phase = CounterPhase::Delayed;
        Some(self.delay_ms)
    }

    pub fn start_counting(&mut self) {
        if self.phase == CounterPhase::Delayed {
            self.phase = CounterPhase::Counting;
        }
    }

    pub fn tick(&mut self) -> bool {
        if self.phase != CounterPhase::Counting {
            return false;
        }

        self.value = self.value.saturating_add(1).min(self.target);
        if self.value >= self.target {
            self.phase = CounterPhase::Complete;
            return false;
        }

        true
    }

    pub fn schedule(&self, visible: bool) -> CounterSchedule {
        match self.phase {
            CounterPhase::Idle if visible => CounterSchedule::Reveal,
            CounterPhase::Delayed => CounterSchedule::Wait(self.delay_ms),
            CounterPhase::Counting => CounterSchedule::Step(COUNT_STEP_MS),
            CounterPhase::Idle | CounterPhase::Complete => CounterSchedule::Idle,
        }
    }

    pub fn fill_fraction(&self) -> f64 {
        f64::from(self.value) / f64::from(MAX_LEVEL)
    }

    pub fn readout(&self) -> String {
        format!("{}%", self.value)
    }

    pub fn fill_style(&self) -> String {
        format!("transform: scaleX({:.2});", self.fill_fraction())
    }

    pub fn counting_duration_ms(&self) -> u32 {
        u32::from(self.target) * COUNT_STEP_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(counter: &mut SkillCounter) -> Vec<u8> {
        let mut seen = vec![counter.value()];
        if counter.reveal().is_some() {
            counter.start_counting();
            loop {
                let more = counter.tick();
                seen.push(counter.value());
                if !more {
                    break;
                }
            }
        }
        seen
    }

    #[test]
    fn counts_from_zero_to_target_in_unit_steps() {
        for (target, delay) in [(1, 0), (37, 100), (85, 400), (100, 0)] {
            let mut counter = SkillCounter::new(target, delay);
            let seen = run_to_completion(&mut counter);

            let expected: Vec<u8> = (0..=target).collect();
            assert_eq!(seen, expected);
            assert!(counter.is_complete());
            assert_eq!(counter.value(), target);
        }
    }

    #[test]
    fn does_nothing_until_revealed() {
        let mut counter = SkillCounter::new(50, 0);

        assert!(!counter.tick());
        counter.start_counting();
        assert_eq!(counter.phase(), CounterPhase::Idle);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut counter = SkillCounter::new(20, 250);

        assert_eq!(counter.reveal(), Some(250));
        assert_eq!(counter.reveal(), None);
        assert_eq!(counter.phase(), CounterPhase::Delayed);
    }

    #[test]
    fn zero_target_completes_without_scheduling() {
        let mut counter = SkillCounter::new(0, 300);

        assert_eq!(counter.reveal(), None);
        assert!(counter.is_complete());
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.counting_duration_ms(), 0);
    }

    #[test]
    fn ticks_after_completion_leave_value_stable() {
        let mut counter = SkillCounter::new(3, 0);
        run_to_completion(&mut counter);

        assert!(!counter.tick());
        assert!(!counter.tick());
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn readout_and_fill_share_the_same_value() {
        let mut counter = SkillCounter::new(40, 0);
        counter.reveal();
        counter.start_counting();
        for _ in 0..25 {
            counter.tick();
        }

        assert_eq!(counter.readout(), "25%");
        assert!((counter.fill_fraction() - 0.25).abs() < f64::EPSILON);
        assert_eq!(counter.fill_style(), "transform: scaleX(0.25);");
    }

    #[test]
    fn schedule_follows_phase_and_stops_once_complete() {
        let mut counter = SkillCounter::new(2, 150);
        assert_eq!(counter.schedule(false), CounterSchedule::Idle);
        assert_eq!(counter.schedule(true), CounterSchedule::Reveal);

        counter.reveal();
        assert_eq!(counter.schedule(false), CounterSchedule::Wait(150));

        counter.start_counting();
        assert_eq!(counter.schedule(true), CounterSchedule::Step(COUNT_STEP_MS));

        while counter.tick() {}
        assert_eq!(counter.schedule(true), CounterSchedule::Idle);
        assert_eq!(counter.reveal(), None);
    }

    #[test]
    fn target_is_clamped_to_hundred() {
        let counter = SkillCounter::new(180, 0);

        assert_eq!(counter.target(), 100);
        assert_eq!(counter.counting_duration_ms(), 1_000);
    }
}
