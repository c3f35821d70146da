//! Section-driven camera tracking.
//!
//! Each section owns a fixed waypoint. Every animation frame the camera moves
//! a constant fraction of the remaining distance toward the waypoint of the
//! active section, then re-aims at the world origin. The gap shrinks
//! geometrically and never reaches zero.

use glam::Vec3;

use crate::section::SectionId;

/// Where the camera looks after every step.
pub const FOCAL_POINT: Vec3 = Vec3::ZERO;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub section: SectionId,
    pub position: [f32; 3],
}

const fn waypoint(section: SectionId, x: f32, y: f32, z: f32) -> Waypoint {
    Waypoint {
        section,
        position: [x, y, z],
    }
}

pub const WAYPOINTS: [Waypoint; 8] = [
    waypoint(SectionId::Hero, 0.0, 2.0, 10.0),
    waypoint(SectionId::Experience, -5.0, 2.0, 10.0),
    waypoint(SectionId::Projects, 5.0, 3.0, 8.0),
    waypoint(SectionId::Skills, 3.0, 1.0, 5.0),
    waypoint(SectionId::Certifications, -3.0, 0.0, 8.0),
    waypoint(SectionId::Education, 0.0, -2.0, 10.0),
    waypoint(SectionId::Resume, 2.0, 2.0, 7.0),
    waypoint(SectionId::Contact, 0.0, 0.0, 6.0),
];

pub fn waypoint_for(section: SectionId) -> Option<&'static Waypoint> {
    WAYPOINTS.iter().find(|w| w.section == section)
}

/// Camera target for a section, falling back to the hero waypoint.
pub fn target(section: SectionId) -> Vec3 {
    waypoint_for(section)
        .or_else(|| waypoint_for(SectionId::Hero))
        .map(|w| Vec3::from_array(w.position))
        .unwrap_or(Vec3::ZERO)
}

/// Camera target for a raw section identifier. Unknown identifiers behave
/// exactly like the hero section.
pub fn target_for(id: &str) -> Vec3 {
    target(SectionId::from_str_or_default(id))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Sole writer of the camera pose.
#[derive(Debug, Clone)]
pub struct CameraAnimator {
    pose: CameraPose,
    smoothing: f32,
}

impl CameraAnimator {
    pub fn new(start: Vec3, smoothing: f32) -> Self {
        Self {
            pose: CameraPose {
                position: start,
                look_at: FOCAL_POINT,
            },
            smoothing,
        }
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Advance one frame toward the waypoint of `section`.
    pub fn frame(&mut self, section: SectionId) -> &CameraPose {
        self.step_toward(target(section));
        &self.pose
    }

    pub fn frame_for(&mut self, id: &str) -> &CameraPose {
        self.step_toward(target_for(id));
        &self.pose
    }

    pub fn step_toward(&mut self, target: Vec3) {
        let current = self.pose.position;
        self.pose.position = current + (target - current) * self.smoothing;
        self.pose.look_at = FOCAL_POINT;
    }
}

/// Slow sway applied to the whole scene group, as (x, y) rotation in radians.
pub fn scene_sway(elapsed: f32) -> (f32, f32) {
    ((elapsed * 0.1).sin() * 0.05, (elapsed * 0.2).sin() * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3, eps: f32) -> bool {
        (a - b).abs().max_element() <= eps
    }

    #[test]
    fn test_every_section_has_a_waypoint() {
        for id in SectionId::ALL {
            let w = waypoint_for(id).expect("missing waypoint");
            assert_eq!(w.section, id);
            assert!(w.position.iter().all(|c| c.is_finite()));
        }
        assert_eq!(target(SectionId::Projects), Vec3::new(5.0, 3.0, 8.0));
        assert_eq!(target(SectionId::Contact), Vec3::new(0.0, 0.0, 6.0));
    }

    #[test]
    fn test_unknown_behaves_like_hero() {
        assert_eq!(target_for("blog"), target_for("hero"));
        assert_eq!(target_for(""), Vec3::new(0.0, 2.0, 10.0));

        let mut unknown = CameraAnimator::new(Vec3::new(1.0, -4.0, 3.0), 0.05);
        let mut hero = unknown.clone();
        for _ in 0..25 {
            let a = *unknown.frame_for("not-a-section");
            let b = *hero.frame(SectionId::Hero);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_single_frame_scenario() {
        let mut animator = CameraAnimator::new(Vec3::ZERO, 0.05);
        let pose = animator.frame(SectionId::Hero);
        assert!(close(pose.position, Vec3::new(0.0, 0.1, 0.5), 1e-6));
        assert_eq!(pose.look_at, Vec3::ZERO);
    }

    #[test]
    fn test_converges_within_tolerance() {
        let mut animator = CameraAnimator::new(Vec3::ZERO, 0.05);
        // gap after n frames is 0.95^n of the start distance
        for _ in 0..150 {
            animator.frame(SectionId::Hero);
        }
        assert!(close(
            animator.pose().position,
            Vec3::new(0.0, 2.0, 10.0),
            0.01
        ));
    }

    #[test]
    fn test_gap_decays_geometrically() {
        let mut animator = CameraAnimator::new(Vec3::ZERO, 0.05);
        for _ in 0..100 {
            animator.frame(SectionId::Hero);
        }
        let gap = (Vec3::new(0.0, 2.0, 10.0) - animator.pose().position).length();
        let expected = Vec3::new(0.0, 2.0, 10.0).length() * 0.95f32.powi(100);
        assert!((gap - expected).abs() < 1e-3);
    }

    #[test]
    fn test_monotonic_without_overshoot() {
        for smoothing in [0.01, 0.05, 0.3, 0.5, 0.9] {
            let goal = target(SectionId::Experience);
            let start = Vec3::new(7.0, -3.0, 0.5);
            let mut animator = CameraAnimator::new(start, smoothing);
            let mut prev = (goal - start).length();
            for _ in 0..60 {
                animator.frame(SectionId::Experience);
                let pos = animator.pose().position;
                let dist = (goal - pos).length();
                if prev > 1e-4 {
                    assert!(dist < prev, "distance grew at smoothing {smoothing}");
                }
                // each axis stays on the starting side of the target
                for axis in 0..3 {
                    let before = start[axis] - goal[axis];
                    let now = pos[axis] - goal[axis];
                    assert!(before * now >= 0.0, "overshoot at smoothing {smoothing}");
                }
                prev = dist;
            }
        }
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut animator = CameraAnimator::new(Vec3::ZERO, 0.05);
        for _ in 0..10 {
            animator.frame(SectionId::Skills);
        }
        let before = animator.pose().position;
        animator.frame(SectionId::Education);
        let after = animator.pose().position;
        let goal = target(SectionId::Education);
        assert!((goal - after).length() < (goal - before).length());
    }

    #[test]
    fn test_sway_is_bounded() {
        for t in [0.0, 1.0, 7.5, 123.4] {
            let (x, y) = scene_sway(t);
            assert!(x.abs() <= 0.05 + f32::EPSILON);
            assert!(y.abs() <= 0.1 + f32::EPSILON);
        }
        assert_eq!(scene_sway(0.0), (0.0, 0.0));
    }
}
