use angled_graph::error::GraphError;
use angled_graph::model::Vec2;
use angled_graph::scene::{GroupKind, Visual};
use angled_graph::{AngledGraph, SvgScene};

fn square() -> AngledGraph {
    AngledGraph::new(
        [("A", (0.0, 0.0)), ("B", (0.0, 1.0)), ("C", (1.0, 1.0)), ("D", (1.0, 0.0))],
        [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
    )
    .expect("square")
}

#[test]
fn positions_read_back_exactly() {
    let g = AngledGraph::new(
        [("p", (0.1, -7.25)), ("q", (1e6, 3.333_333)), ("r", (-0.0, 42.0))],
        [("p", "q")],
    )
    .unwrap();
    assert_eq!(g.vertex_position("p").unwrap(), Vec2::new(0.1, -7.25));
    assert_eq!(g.vertex_position("q").unwrap(), Vec2::new(1e6, 3.333_333));
    assert_eq!(g.vertex_position("r").unwrap(), Vec2::new(-0.0, 42.0));
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn edges_start_on_their_vertices() {
    let g = square();
    let e = g.edge("C", "D").unwrap();
    assert_eq!(e.start, Vec2::new(1.0, 1.0));
    assert_eq!(e.end, Vec2::new(1.0, 0.0));
    assert!((e.angle() + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn edge_to_unknown_vertex_is_rejected() {
    let r = AngledGraph::new([("A", (0.0, 0.0))], [("A", "Z")]);
    assert_eq!(r.unwrap_err(), GraphError::UnknownVertex("Z".into()));
}

#[test]
fn unknown_lookups_fail() {
    let g = square();
    assert_eq!(
        g.vertex_position("E").unwrap_err(),
        GraphError::UnknownVertex("E".into())
    );
    // direction matters for lookup
    assert_eq!(
        g.edge("B", "A").unwrap_err(),
        GraphError::UnknownEdge { start: "B".into(), end: "A".into() }
    );
}

#[test]
fn non_finite_and_huge_coordinates_rejected() {
    let r = AngledGraph::new([("A", (f32::INFINITY, 0.0))], Vec::<(&str, &str)>::new());
    assert_eq!(r.unwrap_err().code(), "non_finite");
    let r = AngledGraph::new([("A", (0.0, 1.0e9))], Vec::<(&str, &str)>::new());
    assert_eq!(r.unwrap_err().code(), "out_of_range");
}

#[test]
fn self_loops_are_allowed() {
    let g = AngledGraph::new([("A", (2.0, 2.0))], [("A", "A")]).unwrap();
    let e = g.edge("A", "A").unwrap();
    assert!(e.key.is_self_loop());
    assert_eq!(e.start, e.end);
}

#[test]
fn add_and_remove_image() {
    let g = square();
    let mut scene = SvgScene::new();
    g.add_to(&mut scene);
    let img = scene.group(g.image_id()).expect("image group");
    assert_eq!(img.id.kind, GroupKind::Image);
    let dots = img.visuals.iter().filter(|v| matches!(v, Visual::Dot { .. })).count();
    let lines = img.visuals.iter().filter(|v| matches!(v, Visual::Line { .. })).count();
    assert_eq!((dots, lines), (4, 4));
    assert_eq!(scene.to_svg_paths().len(), 8);

    g.remove_from(&mut scene);
    assert!(scene.group(g.image_id()).is_none());
    assert!(scene.groups().is_empty());
    assert_eq!(scene.play_count(), 0);
}

#[test]
fn two_graphs_share_a_scene() {
    let a = square();
    let b = square();
    let mut scene = SvgScene::new();
    a.add_to(&mut scene);
    b.add_to(&mut scene);
    assert_eq!(scene.groups().len(), 2);
    a.remove_from(&mut scene);
    assert_eq!(scene.groups().len(), 1);
    assert!(scene.group(b.image_id()).is_some());
}

#[test]
fn cloned_graph_owns_its_groups() {
    let a = square();
    let mut b = a.clone();
    assert_ne!(a.id(), b.id());
    assert_ne!(a.image_id(), b.image_id());
    assert_ne!(a.angle_image_id(), b.angle_image_id());

    let mut scene = SvgScene::new();
    a.add_to(&mut scene);
    b.add_to(&mut scene);
    assert_eq!(scene.groups().len(), 2);

    b.move_vertex(&mut scene, "A", (-1.0, -1.0)).expect("move");
    assert_eq!(a.vertex_position("A").unwrap(), Vec2::new(0.0, 0.0));
    let a_dot = scene
        .group(a.image_id())
        .unwrap()
        .visuals
        .iter()
        .find_map(|v| match v {
            Visual::Dot { label, at } if label == "A" => Some(*at),
            _ => None,
        });
    assert_eq!(a_dot, Some(Vec2::new(0.0, 0.0)));

    a.remove_from(&mut scene);
    assert_eq!(scene.groups().len(), 1);
    assert!(scene.group(b.image_id()).is_some());
}
