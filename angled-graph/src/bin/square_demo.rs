// Run with `cargo run -p angled-graph --features demo --bin square_demo`.

use angled_graph::model::AngleRequest;
use angled_graph::{AngledGraph, SvgScene};
use std::path::PathBuf;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let mut frames = 12u32;
    let mut out: Option<PathBuf> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--frames=") { if let Ok(v) = val.parse() { frames = v; } }
        else if let Some(val) = a.strip_prefix("--out=") { out = Some(PathBuf::from(val)); }
    }

    if let Err(e) = run(frames, out) {
        eprintln!("square_demo: {}", e);
        std::process::exit(1);
    }
}

fn run(frames: u32, out: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let mut scene = SvgScene::with_frames(frames);
    let mut g = AngledGraph::new(
        [("A", (0.0, 0.0)), ("B", (0.0, 1.0)), ("C", (1.0, 1.0)), ("D", (1.0, 0.0))],
        [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
    )?;
    g.add_to(&mut scene);
    g.add_angles(
        &mut scene,
        [
            AngleRequest::new(("A", "B"), ("B", "C")),
            AngleRequest::new(("B", "C"), ("C", "D")),
            AngleRequest::new(("C", "D"), ("D", "A")),
            AngleRequest::new(("D", "A"), ("A", "B")),
        ],
    )?;
    g.move_vertices(&mut scene, [("A", (-1.0, -1.0)), ("B", (-1.0, 0.0))])?;
    g.move_vertices(&mut scene, [("C", (0.0, 0.0)), ("D", (0.0, -1.0))])?;
    g.move_vertices(&mut scene, [("A", (-2.0, -2.0))])?;

    match out {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let recorded = scene.take_frames();
            for (i, svg) in recorded.iter().enumerate() {
                std::fs::write(dir.join(format!("frame_{:04}.svg", i)), svg)?;
            }
            println!("wrote {} frames to {}", recorded.len(), dir.display());
        }
        None => print!("{}", scene.to_svg()),
    }
    Ok(())
}
