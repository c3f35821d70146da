//! Decorative background scene: a declarative description of what floats
//! where, a perspective projector, and a flattening pass that turns the
//! scene into a depth-sorted list of 2D draw commands.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_6, TAU};

use glam::{EulerRot, Mat4, Vec3, Vec4Swizzles};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    camera::{scene_sway, CameraPose},
    config::SiteConfig,
    section::SectionId,
    theme::Palette,
};

const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

const STAR_RADIUS: f32 = 100.0;
const STAR_DEPTH: f32 = 50.0;
const STAR_FACTOR: f32 = 4.0;
const CLOUD_WIDTH: f32 = 10.0;
const CLOUD_DEPTH: f32 = 1.5;
const CLOUD_SEGMENTS: usize = 20;
const CLOUD_SPEED: f32 = 0.4;
const LABEL_SIZE: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Panel { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
    Cube { size: f32 },
    Torus { radius: f32, tube: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Primary,
    Glass,
    Fixed(&'static str),
}

impl Tint {
    pub fn resolve(&self, palette: &Palette) -> &'static str {
        match self {
            Tint::Primary => palette.primary,
            Tint::Glass => palette.glass,
            Tint::Fixed(c) => c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub tint: Tint,
    pub alpha: f32,
    pub glow: bool,
}

/// Gentle bobbing and wobbling of a floating object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl FloatParams {
    pub fn transform(&self, elapsed: f32, phase: f32) -> Mat4 {
        let t = (elapsed + phase) / 4.0 * self.speed;
        let rotation = Mat4::from_euler(
            EulerRot::XYZ,
            t.cos() / 8.0 * self.rotation_intensity,
            t.sin() / 8.0 * self.rotation_intensity,
            t.sin() / 20.0 * self.rotation_intensity,
        );
        let lift = t.sin() / 10.0 * self.float_intensity;
        Mat4::from_translation(Vec3::new(0.0, lift, 0.0)) * rotation
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub offset: [f32; 3],
}

/// The decorative group standing for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    pub section: SectionId,
    pub position: [f32; 3],
    pub rotation_y: f32,
    pub shape: Shape,
    pub label: Label,
    pub float: FloatParams,
}

pub const ROOMS: [Room; 3] = [
    Room {
        section: SectionId::Experience,
        position: [-6.0, 2.0, -2.0],
        rotation_y: FRAC_PI_4,
        shape: Shape::Panel {
            width: 3.0,
            height: 2.0,
            depth: 0.2,
        },
        label: Label {
            text: "EXPERIENCE",
            offset: [0.0, 0.0, 0.2],
        },
        float: FloatParams {
            speed: 1.5,
            rotation_intensity: 0.2,
            float_intensity: 0.5,
        },
    },
    Room {
        section: SectionId::Projects,
        position: [6.0, 3.0, -1.0],
        rotation_y: -FRAC_PI_4,
        shape: Shape::Panel {
            width: 3.0,
            height: 2.0,
            depth: 0.2,
        },
        label: Label {
            text: "PROJECTS",
            offset: [0.0, 0.0, 0.2],
        },
        float: FloatParams {
            speed: 1.2,
            rotation_intensity: 0.1,
            float_intensity: 0.3,
        },
    },
    Room {
        section: SectionId::Skills,
        position: [3.0, -1.0, -3.0],
        rotation_y: -FRAC_PI_6,
        shape: Shape::Sphere { radius: 1.2 },
        label: Label {
            text: "SKILLS",
            offset: [0.0, 0.0, 1.3],
        },
        float: FloatParams {
            speed: 1.3,
            rotation_intensity: 0.15,
            float_intensity: 0.4,
        },
    },
];

pub fn room_for(section: SectionId) -> Option<&'static Room> {
    ROOMS.iter().find(|r| r.section == section)
}

const CORE_FLOAT: FloatParams = FloatParams {
    speed: 2.0,
    rotation_intensity: 0.1,
    float_intensity: 0.3,
};
const CORE_RADIUS: f32 = 0.8;
const MOTE_SIZE: f32 = 0.05;
const MOTE_SPREAD: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    pub transform: Mat4,
    pub shape: Shape,
    pub material: Material,
    pub label: Option<Label>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Mote {
    position: Vec3,
    speed: f32,
    phase: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Star {
    position: Vec3,
    phase: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CloudPuff {
    position: Vec3,
    size: f32,
    phase: f32,
}

/// Everything behind the page content. Particle fields are generated once
/// from the configured seed.
#[derive(Debug, Clone)]
pub struct Backdrop {
    stars: Vec<Star>,
    motes: Vec<Mote>,
    clouds: Vec<CloudPuff>,
}

impl Backdrop {
    pub fn new(config: &SiteConfig) -> Self {
        let mut rng = SmallRng::seed_from_u64(config.seed);

        let mut r = STAR_RADIUS + STAR_DEPTH;
        let stars = (0..config.star_count)
            .map(|_| {
                r -= STAR_DEPTH / config.star_count as f32 * rng.gen::<f32>();
                let polar = (1.0 - 2.0 * rng.gen::<f32>()).acos();
                let azimuth = TAU * rng.gen::<f32>();
                Star {
                    position: Vec3::new(
                        r * polar.sin() * azimuth.sin(),
                        r * polar.cos(),
                        r * polar.sin() * azimuth.cos(),
                    ),
                    phase: TAU * rng.gen::<f32>(),
                }
            })
            .collect();

        let half = MOTE_SPREAD / 2.0;
        let motes = (0..config.mote_count)
            .map(|_| Mote {
                position: Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ),
                speed: rng.gen_range(1.0..3.0),
                phase: rng.gen_range(0.0..100.0),
            })
            .collect();

        let clouds = (0..CLOUD_SEGMENTS)
            .map(|i| {
                let along = i as f32 / (CLOUD_SEGMENTS - 1) as f32 - 0.5;
                CloudPuff {
                    position: Vec3::new(
                        along * CLOUD_WIDTH,
                        rng.gen_range(-0.3..0.3),
                        rng.gen_range(-CLOUD_DEPTH..CLOUD_DEPTH) / 2.0,
                    ),
                    size: rng.gen_range(0.8..1.6),
                    phase: TAU * rng.gen::<f32>(),
                }
            })
            .collect();

        Self {
            stars,
            motes,
            clouds,
        }
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn mote_count(&self) -> usize {
        self.motes.len()
    }

    /// Solid objects of the scene at `elapsed` seconds. The room belonging to
    /// `active` is highlighted.
    pub fn nodes(&self, elapsed: f32, active: SectionId) -> Vec<SceneNode> {
        let group = group_transform(elapsed);
        let mut nodes = ROOMS
            .iter()
            .map(|room| SceneNode {
                transform: group
                    * Mat4::from_translation(Vec3::from_array(room.position))
                    * Mat4::from_rotation_y(room.rotation_y)
                    * room.float.transform(elapsed, 0.0),
                shape: room.shape,
                material: Material {
                    tint: Tint::Glass,
                    alpha: if matches!(room.shape, Shape::Sphere { .. }) {
                        0.25
                    } else {
                        0.4
                    },
                    glow: false,
                },
                label: Some(room.label),
                highlighted: room.section == active,
            })
            .collect::<Vec<_>>();

        let core = group * CORE_FLOAT.transform(elapsed, 0.0);
        nodes.push(SceneNode {
            transform: core,
            shape: Shape::Sphere {
                radius: CORE_RADIUS,
            },
            material: Material {
                tint: Tint::Primary,
                alpha: 0.95,
                glow: true,
            },
            label: None,
            highlighted: false,
        });
        nodes.extend(self.motes.iter().map(|mote| {
            let float = FloatParams {
                speed: mote.speed,
                rotation_intensity: 0.2,
                float_intensity: 0.5,
            };
            SceneNode {
                transform: core
                    * Mat4::from_translation(mote.position)
                    * float.transform(elapsed, mote.phase),
                shape: Shape::Cube { size: MOTE_SIZE },
                material: Material {
                    tint: Tint::Primary,
                    alpha: 0.6,
                    glow: false,
                },
                label: None,
                highlighted: false,
            }
        }));
        nodes
    }

    /// Depth-sorted draw list for one frame.
    pub fn draw_list(
        &self,
        elapsed: f32,
        active: SectionId,
        projector: &Projector,
        palette: &Palette,
    ) -> Vec<DrawItem> {
        let group = group_transform(elapsed);
        let mut items = Vec::with_capacity(self.stars.len() + self.clouds.len() + 64);

        for star in &self.stars {
            let Some(p) = projector.project(group.transform_point3(star.position)) else {
                continue;
            };
            let twinkle = 0.6 + 0.4 * (elapsed + star.phase).sin();
            let size = (STAR_FACTOR * 12.0 / p.depth).clamp(0.5, 2.5);
            items.push(DrawItem {
                depth: p.depth,
                cmd: DrawCmd::Dot {
                    at: [p.x, p.y],
                    size,
                    color: palette.star,
                    alpha: twinkle,
                },
            });
        }

        for puff in &self.clouds {
            let drift = Vec3::new((elapsed * CLOUD_SPEED + puff.phase).sin() * 0.3, 0.0, 0.0);
            let Some(p) = projector.project(group.transform_point3(puff.position + drift)) else {
                continue;
            };
            items.push(DrawItem {
                depth: p.depth,
                cmd: DrawCmd::Disc {
                    center: [p.x, p.y],
                    radius: projector.pixels(puff.size, p.depth),
                    color: palette.cloud,
                    alpha: 0.08,
                    glow: true,
                },
            });
        }

        items.extend(flatten(&self.nodes(elapsed, active), projector, palette));
        sort_far_to_near(&mut items);
        items
    }
}

fn group_transform(elapsed: f32) -> Mat4 {
    let (x, y) = scene_sway(elapsed);
    Mat4::from_euler(EulerRot::XYZ, x, y, 0.0)
}

/// Camera of the small scene behind the hero banner.
pub const HERO_CAMERA: CameraPose = CameraPose {
    position: Vec3::new(0.0, 0.0, 5.0),
    look_at: Vec3::ZERO,
};
/// The hero scene keeps a wider lens than the backdrop.
pub const HERO_FOV_DEGREES: f32 = 75.0;

pub fn hero_projector(width: f32, height: f32) -> Projector {
    Projector::new(&HERO_CAMERA, HERO_FOV_DEGREES, width, height)
}

/// Sphere, cube and torus swaying behind the hero banner.
pub fn hero_nodes(elapsed: f32) -> Vec<SceneNode> {
    let group = Mat4::from_euler(
        EulerRot::XYZ,
        (elapsed * 0.2).sin() * 0.15,
        (elapsed * 0.3).sin() * 0.2,
        0.0,
    );
    let glass = |color| Material {
        tint: Tint::Fixed(color),
        alpha: 0.6,
        glow: false,
    };
    vec![
        SceneNode {
            transform: group,
            shape: Shape::Sphere { radius: 0.5 },
            material: glass("#0071c5"),
            label: None,
            highlighted: false,
        },
        SceneNode {
            transform: group * Mat4::from_translation(Vec3::new(1.0, 0.5, 0.0)),
            shape: Shape::Cube { size: 0.3 },
            material: glass("#0284c7"),
            label: None,
            highlighted: false,
        },
        SceneNode {
            transform: group
                * Mat4::from_translation(Vec3::new(-1.0, -0.5, 0.0))
                * Mat4::from_rotation_x(FRAC_PI_4),
            shape: Shape::Torus {
                radius: 0.3,
                tube: 0.1,
            },
            material: glass("#0369a1"),
            label: None,
            highlighted: false,
        },
    ]
}

pub fn hero_draw_list(elapsed: f32, projector: &Projector, palette: &Palette) -> Vec<DrawItem> {
    let mut items = flatten(&hero_nodes(elapsed), projector, palette);
    sort_far_to_near(&mut items);
    items
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Distance along the view direction.
    pub depth: f32,
}

/// Maps world coordinates to canvas pixels for one camera pose and viewport.
#[derive(Debug, Clone)]
pub struct Projector {
    view_proj: Mat4,
    width: f32,
    height: f32,
    focal: f32,
}

impl Projector {
    pub fn new(pose: &CameraPose, fov_degrees: f32, width: f32, height: f32) -> Self {
        let fov = fov_degrees.to_radians();
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        let view = Mat4::look_at_rh(pose.position, pose.look_at, Vec3::Y);
        let proj = Mat4::perspective_rh(fov, aspect, NEAR, FAR);
        Self {
            view_proj: proj * view,
            width,
            height,
            focal: height * 0.5 / (fov * 0.5).tan(),
        }
    }

    /// `None` for points behind the near plane.
    pub fn project(&self, world: Vec3) -> Option<ScreenPoint> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w <= NEAR {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc.y) * 0.5 * self.height,
            depth: clip.w,
        })
    }

    /// On-screen size of a world length seen at `depth`.
    pub fn pixels(&self, world_size: f32, depth: f32) -> f32 {
        world_size * self.focal / depth
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon {
        points: Vec<[f32; 2]>,
        fill: &'static str,
        alpha: f32,
        stroke: Option<&'static str>,
    },
    Disc {
        center: [f32; 2],
        radius: f32,
        color: &'static str,
        alpha: f32,
        glow: bool,
    },
    Ring {
        points: Vec<[f32; 2]>,
        width: f32,
        color: &'static str,
        alpha: f32,
    },
    Text {
        at: [f32; 2],
        text: &'static str,
        size: f32,
        color: &'static str,
        alpha: f32,
    },
    Dot {
        at: [f32; 2],
        size: f32,
        color: &'static str,
        alpha: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub depth: f32,
    pub cmd: DrawCmd,
}

fn sort_far_to_near(items: &mut [DrawItem]) {
    items.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}

// corner indices of each box face, counter-clockwise seen from outside
const BOX_FACES: [[usize; 4]; 6] = [
    [4, 5, 6, 7],
    [1, 0, 3, 2],
    [0, 4, 7, 3],
    [5, 1, 2, 6],
    [3, 7, 6, 2],
    [0, 1, 5, 4],
];

fn box_corners(w: f32, h: f32, d: f32) -> [Vec3; 8] {
    let (x, y, z) = (w / 2.0, h / 2.0, d / 2.0);
    [
        Vec3::new(-x, -y, -z),
        Vec3::new(x, -y, -z),
        Vec3::new(x, y, -z),
        Vec3::new(-x, y, -z),
        Vec3::new(-x, -y, z),
        Vec3::new(x, -y, z),
        Vec3::new(x, y, z),
        Vec3::new(-x, y, z),
    ]
}

/// Turn scene nodes into unsorted draw items.
pub fn flatten(nodes: &[SceneNode], projector: &Projector, palette: &Palette) -> Vec<DrawItem> {
    let mut items = Vec::new();
    for node in nodes {
        let color = node.material.tint.resolve(palette);
        match node.shape {
            Shape::Panel {
                width,
                height,
                depth,
            } => push_box(&mut items, node, projector, palette, color, width, height, depth),
            Shape::Cube { size } => {
                push_box(&mut items, node, projector, palette, color, size, size, size)
            }
            Shape::Sphere { radius } => {
                let Some(c) = projector.project(node.transform.transform_point3(Vec3::ZERO))
                else {
                    continue;
                };
                items.push(DrawItem {
                    depth: c.depth,
                    cmd: DrawCmd::Disc {
                        center: [c.x, c.y],
                        radius: projector.pixels(radius, c.depth),
                        color,
                        alpha: node.material.alpha,
                        glow: node.material.glow || node.highlighted,
                    },
                });
            }
            Shape::Torus { radius, tube } => {
                const STEPS: usize = 32;
                let projected = (0..STEPS)
                    .map(|i| {
                        let a = TAU * i as f32 / STEPS as f32;
                        let local = Vec3::new(a.cos() * radius, a.sin() * radius, 0.0);
                        projector.project(node.transform.transform_point3(local))
                    })
                    .collect::<Option<Vec<_>>>();
                let Some(projected) = projected else {
                    continue;
                };
                let depth = projected.iter().map(|p| p.depth).sum::<f32>() / STEPS as f32;
                items.push(DrawItem {
                    depth,
                    cmd: DrawCmd::Ring {
                        points: projected.iter().map(|p| [p.x, p.y]).collect(),
                        width: projector.pixels(tube * 2.0, depth),
                        color,
                        alpha: node.material.alpha,
                    },
                });
            }
        }

        if let Some(label) = node.label {
            let anchor = node
                .transform
                .transform_point3(Vec3::from_array(label.offset));
            if let Some(p) = projector.project(anchor) {
                items.push(DrawItem {
                    // labels sit just in front of their shape
                    depth: p.depth - 0.01,
                    cmd: DrawCmd::Text {
                        at: [p.x, p.y],
                        text: label.text,
                        size: projector.pixels(LABEL_SIZE, p.depth),
                        color: palette.primary,
                        alpha: if node.highlighted { 1.0 } else { 0.7 },
                    },
                });
            }
        }
    }
    items
}

#[allow(clippy::too_many_arguments)]
fn push_box(
    items: &mut Vec<DrawItem>,
    node: &SceneNode,
    projector: &Projector,
    palette: &Palette,
    color: &'static str,
    width: f32,
    height: f32,
    depth: f32,
) {
    let corners = box_corners(width, height, depth)
        .map(|c| projector.project(node.transform.transform_point3(c)));
    let stroke = if node.highlighted {
        Some(palette.primary)
    } else {
        None
    };
    for face in BOX_FACES {
        let Some(points) = face.iter().map(|&i| corners[i]).collect::<Option<Vec<_>>>() else {
            continue;
        };
        items.push(DrawItem {
            depth: points.iter().map(|p| p.depth).sum::<f32>() / 4.0,
            cmd: DrawCmd::Polygon {
                points: points.iter().map(|p| [p.x, p.y]).collect(),
                fill: color,
                alpha: node.material.alpha,
                stroke,
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn projector_at(position: Vec3) -> Projector {
        let pose = CameraPose {
            position,
            look_at: Vec3::ZERO,
        };
        Projector::new(&pose, 50.0, 800.0, 600.0)
    }

    fn small_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.star_count = 200;
        config
    }

    #[test]
    fn test_origin_projects_to_center() {
        let p = projector_at(Vec3::new(0.0, 2.0, 10.0))
            .project(Vec3::ZERO)
            .expect("origin is in front of the camera");
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
        assert!((p.depth - Vec3::new(0.0, 2.0, 10.0).length()).abs() < 1e-3);
    }

    #[test]
    fn test_behind_camera_is_culled() {
        let projector = projector_at(Vec3::new(0.0, 0.0, 10.0));
        assert!(projector.project(Vec3::new(0.0, 0.0, 20.0)).is_none());
        assert!(projector.project(Vec3::new(0.0, 0.0, 9.95)).is_none());
    }

    #[test]
    fn test_up_is_up_on_screen() {
        let projector = projector_at(Vec3::new(0.0, 0.0, 10.0));
        let above = projector.project(Vec3::new(0.0, 1.0, 0.0)).unwrap();
        let right = projector.project(Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(above.y < 300.0);
        assert!(right.x > 400.0);
    }

    #[test]
    fn test_pixels_shrink_with_depth() {
        let projector = projector_at(Vec3::new(0.0, 0.0, 10.0));
        assert!(projector.pixels(1.0, 5.0) > projector.pixels(1.0, 10.0));
        // one unit at the focal length covers exactly `focal` pixels
        let focal = 300.0 / (25.0f32.to_radians()).tan();
        assert!((projector.pixels(1.0, 1.0) - focal).abs() < 1e-2);
    }

    #[test]
    fn test_rooms_are_unique_per_section() {
        for room in &ROOMS {
            assert_eq!(room_for(room.section), Some(room));
        }
        assert!(room_for(SectionId::Contact).is_none());
    }

    #[test]
    fn test_float_is_bounded() {
        let params = ROOMS[0].float;
        for t in [0.0, 0.5, 3.3, 40.0] {
            let lift = params.transform(t, 0.0).transform_point3(Vec3::ZERO).y;
            assert!(lift.abs() <= params.float_intensity / 10.0 + 1e-6);
        }
    }

    #[test]
    fn test_backdrop_is_deterministic() {
        let a = Backdrop::new(&small_config());
        let b = Backdrop::new(&small_config());
        assert_eq!(a.stars, b.stars);
        assert_eq!(a.motes, b.motes);
        assert_eq!(a.star_count(), 200);
        assert_eq!(a.mote_count(), 20);
    }

    #[test]
    fn test_stars_live_in_their_shell() {
        let backdrop = Backdrop::new(&small_config());
        for star in &backdrop.stars {
            let r = star.position.length();
            assert!(r >= STAR_RADIUS - 1e-3 && r <= STAR_RADIUS + STAR_DEPTH + 1e-3);
        }
    }

    #[test]
    fn test_active_room_is_highlighted() {
        let backdrop = Backdrop::new(&small_config());
        let nodes = backdrop.nodes(1.0, SectionId::Projects);
        let lit = nodes.iter().filter(|n| n.highlighted).collect::<Vec<_>>();
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].label.map(|l| l.text), Some("PROJECTS"));

        let none_lit = backdrop.nodes(1.0, SectionId::Resume);
        assert!(none_lit.iter().all(|n| !n.highlighted));
        // rooms + core + motes
        assert_eq!(none_lit.len(), ROOMS.len() + 1 + 20);
    }

    #[test]
    fn test_draw_list_is_far_to_near() {
        let backdrop = Backdrop::new(&small_config());
        let projector = projector_at(Vec3::new(0.0, 2.0, 10.0));
        let items = backdrop.draw_list(2.0, SectionId::Hero, &projector, &Theme::Dark.palette());
        assert!(!items.is_empty());
        assert!(items.windows(2).all(|w| w[0].depth >= w[1].depth));
        assert!(items
            .iter()
            .any(|i| matches!(i.cmd, DrawCmd::Text { text: "SKILLS", .. })));
    }

    #[test]
    fn test_hero_uses_wide_lens() {
        let hero = hero_projector(400.0, 400.0)
            .project(Vec3::new(1.0, 0.0, 0.0))
            .expect("in front of the hero camera");
        // 200 + 200 * (1 / 5) / tan(37.5°)
        assert!((hero.x - 252.13).abs() < 0.05, "x = {}", hero.x);

        let narrow = Projector::new(&HERO_CAMERA, 50.0, 400.0, 400.0)
            .project(Vec3::new(1.0, 0.0, 0.0))
            .expect("in front of the hero camera");
        assert!(hero.x < narrow.x);
    }

    #[test]
    fn test_hero_scene_draws_every_shape() {
        let projector = hero_projector(400.0, 400.0);
        let items = hero_draw_list(0.0, &projector, &Theme::Light.palette());
        let discs = items
            .iter()
            .filter(|i| matches!(i.cmd, DrawCmd::Disc { .. }))
            .count();
        let rings = items
            .iter()
            .filter(|i| matches!(i.cmd, DrawCmd::Ring { .. }))
            .count();
        let faces = items
            .iter()
            .filter(|i| matches!(i.cmd, DrawCmd::Polygon { .. }))
            .count();
        assert_eq!((discs, rings, faces), (1, 1, 6));
    }

    #[test]
    fn test_tint_follows_palette() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_eq!(Tint::Primary.resolve(&light), "#0071c5");
        assert_eq!(Tint::Glass.resolve(&dark), "#1f2937");
        assert_eq!(Tint::Fixed("#123456").resolve(&dark), "#123456");
    }
}
