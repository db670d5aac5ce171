//! Orbit headless viewer CLI
//!
//! Loads a scene configuration, builds its animation curve and steps the
//! per-frame tick without a window, printing what a renderer would draw.
//!
//! # Usage
//!
//! ```bash
//! # Animate a scene for 120 frames and print object positions as CSV
//! orbit_viewer scene.json materials.mtl --ticks 120
//!
//! # Show scene and curve statistics
//! orbit_viewer --summary scene.json materials.mtl
//!
//! # Dump the sampled path of a curve
//! orbit_viewer --curve lemniscate --points 21 --samples 50
//! ```
//!
//! Set `RUST_LOG=debug` to see curve construction details.

use std::path::Path;
use std::process;

use orbit_core::traits::BoundingBox;
use orbit_core::{Result, Tolerance};
use orbit_curve::{CurveSettings, Shape};
use orbit_scene::{MaterialLibrary, Scene, SceneConfig};

const DEFAULT_TICKS: usize = 60;

fn print_usage() {
    eprintln!(
        r#"Orbit headless viewer

USAGE:
    orbit_viewer <scene.json> [materials.mtl ...] [--ticks N]
    orbit_viewer --summary <scene.json> [materials.mtl ...]
    orbit_viewer --curve <ellipse|lemniscate> [--points N] [--samples N]

ARGS:
    <scene.json>      Scene configuration (objects, camera, frustum, curve)
    [materials.mtl]   Material libraries referenced by the objects

OPTIONS:
    --ticks N         Number of frames to simulate (default {DEFAULT_TICKS})
    --summary         Print statistics about the scene and its curve
    --curve SHAPE     Print the sampled path of a curve as CSV
    --points N        Control polygon point count for --curve (default 20)
    --samples N       Samples per Bezier segment for --curve (default 100)
    --help            Show this help message
"#
    );
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("Error: Missing required argument <scene.json>\n");
        print_usage();
        process::exit(1);
    }

    if args[0] == "--help" || args[0] == "-h" {
        print_usage();
        process::exit(0);
    }

    let result = match args[0].as_str() {
        "--summary" => {
            if args.len() < 2 {
                eprintln!("Error: --summary requires a scene file\n");
                print_usage();
                process::exit(1);
            }
            handle_summary(&args[1], &args[2..])
        }
        "--curve" => {
            if args.len() < 2 {
                eprintln!("Error: --curve requires a shape\n");
                print_usage();
                process::exit(1);
            }
            handle_curve(&args[1], &args[2..])
        }
        _ => handle_animate(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Split trailing `--flag value` pairs from positional arguments.
fn parse_flag(args: &[String], flag: &str) -> Option<usize> {
    let pos = args.iter().position(|a| a == flag)?;
    match args.get(pos + 1).map(|v| v.parse::<usize>()) {
        Some(Ok(value)) => Some(value),
        _ => {
            eprintln!("Error: {} expects a non-negative integer\n", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn positional(args: &[String]) -> Vec<&String> {
    let mut out = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            iter.next();
        } else {
            out.push(arg);
        }
    }
    out
}

fn load_scene(scene_path: &str, mtl_paths: &[&String]) -> Result<Scene> {
    let config = SceneConfig::from_file(Path::new(scene_path))?;

    let mut materials = MaterialLibrary::new();
    for path in mtl_paths {
        let source = std::fs::read_to_string(path.as_str())?;
        materials.parse_into(&source)?;
    }
    log::info!("loaded {} materials", materials.len());

    Scene::from_config(&config, &materials)
}

fn handle_animate(args: &[String]) -> Result<()> {
    let ticks = parse_flag(args, "--ticks").unwrap_or(DEFAULT_TICKS);
    let files = positional(args);
    let (scene_path, mtl_paths) = files
        .split_first()
        .map(|(s, rest)| (s.as_str(), rest))
        .unwrap_or_else(|| {
            eprintln!("Error: Missing required argument <scene.json>\n");
            print_usage();
            process::exit(1);
        });

    let mut scene = load_scene(scene_path, mtl_paths)?;

    println!("tick,object,x,y,z");
    for tick in 0..ticks {
        scene.tick()?;
        for (_, object) in scene.objects() {
            if object.motion.is_path_animated() {
                let p = object.position();
                println!("{},{},{:.6},{:.6},{:.6}", tick, object.name, p.x, p.y, p.z);
            }
        }
    }

    let frame = scene.frame();
    log::debug!("final frame carries {} object uniforms", frame.objects.len());
    Ok(())
}

fn handle_summary(scene_path: &str, rest: &[String]) -> Result<()> {
    let files = positional(rest);
    let scene = load_scene(scene_path, &files)?;
    let animation = scene.animation();
    let path = animation.path();

    println!("Objects:          {}", scene.len());
    println!("Path-animated:    {}", scene.animated_count());
    println!("Shape:            {:?}", animation.settings().polygon.shape);
    println!("Control points:   {}", animation.polygon().len());
    println!("Bezier segments:  {}", animation.polygon().segment_count());
    println!("Path samples:     {}", path.len());
    match path.bounding_box() {
        Some((min, max)) => {
            println!(
                "Path bounds:      ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
                min.x, min.y, min.z, max.x, max.y, max.z
            );
            println!(
                "Closed loop:      {}",
                path.is_closed_within(Tolerance::loose())
            );
        }
        None => println!("Path bounds:      (empty path, animation disabled)"),
    }
    for (id, object) in scene.objects() {
        let marker = if scene.selected() == Some(id) { "*" } else { " " };
        println!(
            "{} {:<20} {:?} at {:?}",
            marker,
            object.name,
            object.motion,
            object.position()
        );
    }
    Ok(())
}

fn handle_curve(shape: &str, rest: &[String]) -> Result<()> {
    let mut settings = CurveSettings::default();
    settings.polygon.shape = match shape {
        "ellipse" => Shape::Ellipse { a: 2.0, b: 1.0 },
        "lemniscate" => Shape::Lemniscate { size: 2.0 },
        other => {
            eprintln!("Error: unknown shape '{}'\n", other);
            print_usage();
            process::exit(1);
        }
    };
    if let Some(points) = parse_flag(rest, "--points") {
        settings.polygon.point_count = points;
    }
    if let Some(samples) = parse_flag(rest, "--samples") {
        settings.path.samples_per_segment = samples;
    }

    let (_, path) = settings.build()?;
    println!("index,x,y,z");
    for (i, p) in path.points().iter().enumerate() {
        println!("{},{:.6},{:.6},{:.6}", i, p.x, p.y, p.z);
    }
    Ok(())
}
