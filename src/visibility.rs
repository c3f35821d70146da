use crate::section::{ActiveSection, SectionId};

/// Observers report ratios that land a hair under the threshold they fired for.
const RATIO_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Entered,
    Exited,
}

/// Edge detector over intersection reports for one screen region.
///
/// Re-triggerable: the region can enter and exit any number of times.
#[derive(Debug, Clone)]
pub struct VisibilitySensor {
    threshold: f64,
    visible: bool,
}

impl VisibilitySensor {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed one intersection report, returning the transition it caused.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> Option<Transition> {
        let now = is_intersecting && ratio + RATIO_TOLERANCE >= self.threshold;
        if now == self.visible {
            return None;
        }
        self.visible = now;
        Some(if now {
            Transition::Entered
        } else {
            Transition::Exited
        })
    }

    /// [`observe`](Self::observe), then make `id` the active section when the
    /// region has just entered. Exits leave the register alone.
    pub fn report(
        &mut self,
        is_intersecting: bool,
        ratio: f64,
        id: SectionId,
        active: ActiveSection,
    ) -> Option<Transition> {
        let transition = self.observe(is_intersecting, ratio);
        if transition == Some(Transition::Entered) {
            active.set(id);
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::Owner;

    use super::*;

    #[test]
    fn test_starts_hidden() {
        let sensor = VisibilitySensor::new(0.3);
        assert!(!sensor.is_visible());
    }

    #[test]
    fn test_enters_at_threshold() {
        let mut sensor = VisibilitySensor::new(0.3);
        assert_eq!(sensor.observe(true, 0.1), None);
        assert_eq!(sensor.observe(true, 0.3), Some(Transition::Entered));
        assert!(sensor.is_visible());
        // further reports above threshold are not transitions
        assert_eq!(sensor.observe(true, 0.8), None);
    }

    #[test]
    fn test_tolerates_rounding_below_threshold() {
        let mut sensor = VisibilitySensor::new(0.3);
        assert_eq!(sensor.observe(true, 0.2999), Some(Transition::Entered));
    }

    #[test]
    fn test_exits_and_retriggers() {
        let mut sensor = VisibilitySensor::new(0.3);
        assert_eq!(sensor.observe(true, 0.5), Some(Transition::Entered));
        assert_eq!(sensor.observe(true, 0.1), Some(Transition::Exited));
        assert_eq!(sensor.observe(false, 0.0), None);
        assert_eq!(sensor.observe(true, 0.4), Some(Transition::Entered));
        assert_eq!(sensor.observe(false, 0.0), Some(Transition::Exited));
    }

    #[test]
    fn test_not_intersecting_never_enters() {
        let mut sensor = VisibilitySensor::new(0.3);
        // stale ratio on a non-intersecting entry
        assert_eq!(sensor.observe(false, 0.5), None);
        assert!(!sensor.is_visible());
    }

    #[test]
    fn test_report_drives_register() {
        let owner = Owner::new();
        owner.with(|| {
            let active = ActiveSection::new();
            let mut sensor = VisibilitySensor::new(0.3);

            let entered = sensor.report(true, 0.6, SectionId::Skills, active);
            assert_eq!(entered, Some(Transition::Entered));
            assert_eq!(active.current_untracked(), SectionId::Skills);

            // another region takes over while this one is still visible
            active.set(SectionId::Education);
            assert_eq!(sensor.report(true, 0.9, SectionId::Skills, active), None);
            assert_eq!(active.current_untracked(), SectionId::Education);

            let exited = sensor.report(false, 0.0, SectionId::Skills, active);
            assert_eq!(exited, Some(Transition::Exited));
            assert_eq!(active.current_untracked(), SectionId::Education);

            // coming back into view claims the register again
            let again = sensor.report(true, 0.4, SectionId::Skills, active);
            assert_eq!(again, Some(Transition::Entered));
            assert_eq!(active.current_untracked(), SectionId::Skills);
        });
    }
}
