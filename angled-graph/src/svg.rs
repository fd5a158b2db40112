// Reference host scene that keeps its groups in memory and renders them to
// SVG. Scene space is y-up; SVG output flips y.

use crate::algorithms::batch::Transition;
use crate::model::{AngleGlyph, Vec2};
use crate::scene::{GroupId, Scene, Visual, VisualGroup};

pub const DOT_RADIUS: f32 = 0.08;
pub const STROKE_WIDTH: f32 = 0.04;
const VIEW_PAD: f32 = 0.5;

#[derive(Clone, Debug, Default)]
pub struct SvgScene {
    groups: Vec<VisualGroup>,
    frames_per_play: u32,
    frames: Vec<String>,
    plays: usize,
}

fn pt(p: Vec2) -> String {
    format!("{} {}", p.x, 0.0 - p.y)
}

/// SVG path data for one visual.
pub fn visual_path(v: &Visual) -> String {
    match v {
        Visual::Dot { at, .. } => {
            let r = DOT_RADIUS;
            let left = Vec2::new(at.x - r, at.y);
            let right = Vec2::new(at.x + r, at.y);
            format!(
                "M {} A {} {} 0 1 0 {} A {} {} 0 1 0 {} Z",
                pt(left),
                r,
                r,
                pt(right),
                r,
                r,
                pt(left)
            )
        }
        Visual::Line { start, end, .. } => format!("M {} L {}", pt(*start), pt(*end)),
        Visual::Angle { glyph, .. } => match glyph {
            AngleGlyph::Arc { center, radius, start_angle, angle } => {
                let from = *center + Vec2::from_angle(*start_angle) * *radius;
                let to = *center + Vec2::from_angle(start_angle + angle) * *radius;
                // counterclockwise in scene space is counterclockwise on screen
                let sweep = if *angle > 0.0 { 0 } else { 1 };
                format!("M {} A {} {} 0 0 {} {}", pt(from), radius, radius, sweep, pt(to))
            }
            AngleGlyph::RightAngle { points, .. } => format!(
                "M {} L {} L {} L {} Z",
                pt(points[0]),
                pt(points[1]),
                pt(points[2]),
                pt(points[3])
            ),
        },
    }
}

fn extend_bounds(b: &mut Option<(f32, f32, f32, f32)>, p: Vec2, pad: f32) {
    let (x0, y0, x1, y1) = (p.x - pad, -p.y - pad, p.x + pad, -p.y + pad);
    *b = Some(match *b {
        None => (x0, y0, x1, y1),
        Some((a0, b0, a1, b1)) => (a0.min(x0), b0.min(y0), a1.max(x1), b1.max(y1)),
    });
}

impl SvgScene {
    pub fn new() -> Self {
        SvgScene::default()
    }
    /// Records `frames` evenly spaced snapshots for every `play`, the last one
    /// at the end of the transition.
    pub fn with_frames(frames: u32) -> Self {
        SvgScene {
            frames_per_play: frames,
            ..Default::default()
        }
    }

    pub fn groups(&self) -> &[VisualGroup] {
        &self.groups
    }
    pub fn group(&self, id: GroupId) -> Option<&VisualGroup> {
        self.groups.iter().find(|g| g.id == id)
    }
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
    pub fn take_frames(&mut self) -> Vec<String> {
        std::mem::take(&mut self.frames)
    }
    pub fn play_count(&self) -> usize {
        self.plays
    }

    /// Visuals of every group in drawing order (lowest z first, then
    /// insertion order).
    pub fn draw_order(&self) -> Vec<&Visual> {
        let mut all: Vec<&Visual> = self.groups.iter().flat_map(|g| g.visuals.iter()).collect();
        all.sort_by_key(|v| v.z_index());
        all
    }

    pub fn to_svg_paths(&self) -> Vec<String> {
        self.draw_order().into_iter().map(visual_path).collect()
    }

    pub fn to_svg(&self) -> String {
        let order = self.draw_order();
        let mut bounds = None;
        for v in &order {
            match v {
                Visual::Dot { at, .. } => extend_bounds(&mut bounds, *at, VIEW_PAD),
                Visual::Line { start, end, .. } => {
                    extend_bounds(&mut bounds, *start, VIEW_PAD);
                    extend_bounds(&mut bounds, *end, VIEW_PAD);
                }
                Visual::Angle { glyph, .. } => match glyph {
                    AngleGlyph::Arc { center, radius, .. } => {
                        extend_bounds(&mut bounds, *center, VIEW_PAD + radius)
                    }
                    AngleGlyph::RightAngle { points, .. } => {
                        for p in points {
                            extend_bounds(&mut bounds, *p, VIEW_PAD);
                        }
                    }
                },
            }
        }
        let (x0, y0, x1, y1) = bounds.unwrap_or((-1.0, -1.0, 1.0, 1.0));
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
            x0,
            y0,
            x1 - x0,
            y1 - y0
        );
        for v in order {
            let fill = if matches!(v, Visual::Dot { .. }) { "black" } else { "none" };
            out.push_str(&format!(
                "  <path d=\"{}\" fill=\"{}\" stroke=\"black\" stroke-width=\"{}\"/>\n",
                visual_path(v),
                fill,
                STROKE_WIDTH
            ));
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Scene for SvgScene {
    fn add(&mut self, group: VisualGroup) {
        match self.groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    fn remove(&mut self, id: GroupId) {
        self.groups.retain(|g| g.id != id);
    }

    fn play(&mut self, transition: &Transition) {
        self.plays += 1;
        let steps = self.frames_per_play.max(1);
        for i in 1..=steps {
            let frame = transition.sample(i as f32 / steps as f32);
            for g in self.groups.iter_mut() {
                if g.id == transition.image || g.id == transition.angle_image {
                    g.apply_frame(&frame);
                }
            }
            if self.frames_per_play > 0 {
                log::trace!("recorded frame {}/{}", i, steps);
                self.frames.push(self.to_svg());
            }
        }
    }
}
