use crate::geometry::angle::{angle_of_vector, edge_angle, is_approx_right_angle, sweep_between};
use crate::geometry::tolerance::{near_zero, EPS_LEN};
use crate::model::{AngleGlyph, AngleStyle, Vec2};

/// Glyph for the angle at `at` between an edge arriving there and an edge
/// leaving from it. Both edges are given as `(start, end)`.
pub fn angle_glyph(
    incoming: (Vec2, Vec2),
    outgoing: (Vec2, Vec2),
    at: Vec2,
    style: &AngleStyle,
) -> AngleGlyph {
    if near_zero((incoming.0 - incoming.1).length(), EPS_LEN)
        || near_zero((outgoing.1 - outgoing.0).length(), EPS_LEN)
    {
        log::trace!("angle glyph at ({}, {}) uses a zero-length edge", at.x, at.y);
    }
    // Both directions point away from the intersection.
    let a1 = angle_of_vector(incoming.0 - incoming.1);
    let a2 = edge_angle(outgoing.0, outgoing.1);
    let (start, magnitude) = sweep_between(a1, a2);

    if is_approx_right_angle(magnitude, style.right_angle_epsilon) {
        let to_start = Vec2::from_angle(a1) * style.radius;
        let to_end = Vec2::from_angle(a2) * style.radius;
        AngleGlyph::RightAngle {
            points: [at, at + to_start, at + to_start + to_end, at + to_end],
            z_index: -1,
        }
    } else {
        AngleGlyph::Arc {
            center: at,
            radius: style.radius,
            start_angle: start,
            angle: magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn square_corner_is_bracket() {
        // A(0,0) -> B(0,1) -> C(1,1)
        let g = angle_glyph(
            (p(0.0, 0.0), p(0.0, 1.0)),
            (p(0.0, 1.0), p(1.0, 1.0)),
            p(0.0, 1.0),
            &AngleStyle::default(),
        );
        match g {
            AngleGlyph::RightAngle { points, z_index } => {
                assert_eq!(z_index, -1);
                assert_eq!(points[0], p(0.0, 1.0));
                assert!((points[1].x - 0.0).abs() < 1e-6 && (points[1].y - 0.7).abs() < 1e-6);
                assert!((points[2].x - 0.3).abs() < 1e-6 && (points[2].y - 0.7).abs() < 1e-6);
                assert!((points[3].x - 0.3).abs() < 1e-6 && (points[3].y - 1.0).abs() < 1e-6);
            }
            other => panic!("expected bracket, got {:?}", other),
        }
    }

    #[test]
    fn acute_corner_is_arc_from_smaller_angle() {
        // incoming points back along +x, outgoing leaves at 45 degrees
        let g = angle_glyph(
            (p(1.0, 0.0), p(0.0, 0.0)),
            (p(0.0, 0.0), p(1.0, 1.0)),
            p(0.0, 0.0),
            &AngleStyle::default(),
        );
        match g {
            AngleGlyph::Arc { center, radius, start_angle, angle } => {
                assert_eq!(center, p(0.0, 0.0));
                assert!((radius - 0.3).abs() < 1e-6);
                assert!(start_angle.abs() < 1e-6);
                assert!((angle - FRAC_PI_4).abs() < 1e-6);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn reflex_difference_sweeps_backwards() {
        // directions at 3π/4 and -3π/4: raw difference 3π/2 wraps to -π/2,
        // and 0.02 off the right angle gives an arc
        let a1 = 0.75 * PI - 0.02;
        let a2 = -0.75 * PI;
        let g = angle_glyph(
            (Vec2::from_angle(a1), p(0.0, 0.0)),
            (p(0.0, 0.0), Vec2::from_angle(a2)),
            p(0.0, 0.0),
            &AngleStyle::default(),
        );
        match g {
            AngleGlyph::Arc { start_angle, angle, .. } => {
                assert!((start_angle - a2).abs() < 1e-5);
                assert!(angle < 0.0);
                assert!((angle + FRAC_PI_2 + 0.02).abs() < 1e-4);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn style_controls_size_and_slack() {
        let style = AngleStyle { radius: 1.0, right_angle_epsilon: 0.1 };
        let g = angle_glyph(
            (p(1.0, 0.0), p(0.0, 0.0)),
            (p(0.0, 0.0), Vec2::from_angle(FRAC_PI_2 + 0.05)),
            p(0.0, 0.0),
            &style,
        );
        match g {
            AngleGlyph::RightAngle { points, .. } => {
                assert!((points[1].x - 1.0).abs() < 1e-6);
            }
            other => panic!("expected bracket, got {:?}", other),
        }
    }
}
