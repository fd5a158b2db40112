use angled_graph::error::GraphError;
use angled_graph::model::{Alternate, AngleGlyph, AngleRequest, EdgeKey, Vec2};
use angled_graph::scene::Visual;
use angled_graph::{AngledGraph, SvgScene};
use std::f32::consts::FRAC_PI_2;

fn square() -> AngledGraph {
    AngledGraph::new(
        [("A", (0.0, 0.0)), ("B", (0.0, 1.0)), ("C", (1.0, 1.0)), ("D", (1.0, 0.0))],
        [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
    )
    .unwrap()
}

fn corners() -> Vec<AngleRequest> {
    vec![
        AngleRequest::new(("A", "B"), ("B", "C")),
        AngleRequest::new(("B", "C"), ("C", "D")),
        AngleRequest::new(("C", "D"), ("D", "A")),
        AngleRequest::new(("D", "A"), ("A", "B")),
    ]
}

#[test]
fn unit_square_has_four_right_angles() {
    let mut g = square();
    let mut scene = SvgScene::new();
    g.add_to(&mut scene);
    g.add_angles(&mut scene, corners()).unwrap();

    assert_eq!(g.active_angles().len(), 4);
    for a in g.active_angles() {
        assert!(a.glyph.is_right_angle(), "{} should be a bracket", a.key);
        assert_eq!(a.glyph.z_index(), -1);
        if let AngleGlyph::RightAngle { points, .. } = &a.glyph {
            let corner = g.vertex_position(a.key.intersection()).unwrap();
            assert_eq!(points[0], corner);
        }
    }
    let angles = scene.group(g.angle_image_id()).unwrap();
    assert_eq!(angles.visuals.len(), 4);
    // brackets render beneath the image
    assert!(matches!(scene.draw_order()[0], Visual::Angle { .. }));
}

#[test]
fn bracket_arms_follow_both_edges() {
    let mut g = square();
    let mut scene = SvgScene::new();
    g.add_angles(&mut scene, [AngleRequest::new(("D", "A"), ("A", "B"))]).unwrap();
    match &g.active_angles()[0].glyph {
        AngleGlyph::RightAngle { points, .. } => {
            let expect = [(0.0, 0.0), (0.3, 0.0), (0.3, 0.3), (0.0, 0.3)];
            for (p, (x, y)) in points.iter().zip(expect) {
                assert!((p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6, "{:?}", p);
            }
        }
        other => panic!("expected bracket, got {:?}", other),
    }
}

#[test]
fn unknown_edge_leaves_active_set_unchanged() {
    let mut g = square();
    let mut scene = SvgScene::new();
    g.add_angles(&mut scene, [AngleRequest::new(("A", "B"), ("B", "C"))]).unwrap();
    let before = g.active_angles().to_vec();

    let err = g
        .add_angles(
            &mut scene,
            [
                AngleRequest::new(("C", "D"), ("D", "A")),
                AngleRequest::new(("B", "C"), ("C", "X")),
            ],
        )
        .unwrap_err();
    assert_eq!(err, GraphError::UnknownEdge { start: "C".into(), end: "X".into() });
    assert_eq!(g.active_angles(), &before[..]);
    assert_eq!(scene.group(g.angle_image_id()).unwrap().visuals.len(), 1);
}

#[test]
fn remove_angles_clears_scene_and_state() {
    let mut g = square();
    let mut scene = SvgScene::new();
    g.add_to(&mut scene);
    g.add_angles(&mut scene, corners()).unwrap();
    g.remove_angles(&mut scene);
    assert!(g.active_angles().is_empty());
    assert!(scene.group(g.angle_image_id()).is_none());
    assert!(scene.group(g.image_id()).is_some());
}

#[test]
fn alternate_flag_is_kept_but_inert() {
    let mut a = square();
    let mut b = square();
    let mut scene = SvgScene::new();
    a.add_angles(&mut scene, [AngleRequest::new(("A", "B"), ("B", "C"))]).unwrap();
    b.add_angles(
        &mut scene,
        [AngleRequest::new(("A", "B"), ("B", "C")).with_alternate(Alternate::Secondary)],
    )
    .unwrap();
    assert_eq!(b.active_angles()[0].alternate, Alternate::Secondary);
    assert_eq!(a.active_angles()[0].glyph, b.active_angles()[0].glyph);
    assert_eq!(Alternate::try_from(2u8), Err(GraphError::InvalidAlternate(2)));
}

#[test]
fn angles_refresh_when_vertices_move() {
    let mut g = square();
    let mut scene = SvgScene::with_frames(3);
    g.add_to(&mut scene);
    g.add_angles(&mut scene, corners()).unwrap();
    g.move_vertices(&mut scene, [("A", (-1.0, -1.0)), ("B", (-1.0, 0.0))]).unwrap();

    let at_a = g
        .active_angles()
        .iter()
        .find(|a| a.key.intersection() == "A")
        .unwrap();
    match &at_a.glyph {
        AngleGlyph::Arc { center, radius, start_angle, angle } => {
            assert_eq!(*center, Vec2::new(-1.0, -1.0));
            assert!((radius - 0.3).abs() < 1e-6);
            // D-A points along atan(1/2); A->B points straight up
            assert!((start_angle - 0.5f32.atan()).abs() < 1e-5);
            assert!((angle - (FRAC_PI_2 - 0.5f32.atan())).abs() < 1e-5);
        }
        other => panic!("expected arc, got {:?}", other),
    }
    // the scene's angle group matches the committed glyphs
    let group = scene.group(g.angle_image_id()).unwrap();
    for v in &group.visuals {
        if let Visual::Angle { key, glyph } = v {
            let active = g.active_angles().iter().find(|a| &a.key == key).unwrap();
            assert_eq!(glyph, &active.glyph);
        }
    }
    assert_eq!(scene.frames().len(), 3);
}

#[test]
fn right_angle_needs_to_be_close() {
    // B->C leaves 0.02 rad above the x-axis, so the corner at B is 90 degrees plus 0.02 rad
    let c = (0.02f32.cos(), 1.0 + 0.02f32.sin());
    let mut g = AngledGraph::new(
        [("A", (0.0, 0.0)), ("B", (0.0, 1.0)), ("C", c)],
        [("A", "B"), ("B", "C")],
    )
    .unwrap();
    let mut scene = SvgScene::new();
    g.add_angles(&mut scene, [AngleRequest::new(("A", "B"), ("B", "C"))]).unwrap();
    assert!(!g.active_angles()[0].glyph.is_right_angle());
}

#[test]
fn edge_key_display() {
    assert_eq!(EdgeKey::new("A", "B").to_string(), "A->B");
}
