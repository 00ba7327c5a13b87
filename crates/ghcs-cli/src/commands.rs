use std::path::Path;

use ghcs_geom::{ConvexPoly2D, Geometry, Vec2};
use ghcs_io::Endian;
use ghcs_query::Engine;
use rand::Rng;

use crate::error::CliError;

pub struct SaveArgs<'a> {
    pub scene_path: &'a Path,
    pub out_path: &'a Path,
    pub endian: Endian,
}

/// Re-saves an existing scene under a (possibly different) endian
/// mode — useful for producing the endian-conversion fixtures the
/// round-trip tests check against.
pub fn scene_save(args: SaveArgs) -> Result<(), CliError> {
    log::info!("loading {}", args.scene_path.display());
    let engine = Engine::load(args.scene_path)?;
    log::info!(
        "saving {} geometries to {} ({:?} endian)",
        engine.scene().geometries.len(),
        args.out_path.display(),
        args.endian
    );
    engine.save(args.out_path, args.endian)?;
    Ok(())
}

pub struct LoadArgs<'a> {
    pub path: &'a Path,
}

/// Loads a scene and prints a summary: geometry count and world
/// bounds. The load path itself is what exercises the format's error
/// handling (bad magic, version mismatch, truncation).
pub fn scene_load(args: LoadArgs) -> Result<(), CliError> {
    let engine = Engine::load(args.path)?;
    let scene = engine.scene();
    println!(
        "loaded {} geometries, world bounds [{:.1}, {:.1}] .. [{:.1}, {:.1}]",
        scene.geometries.len(),
        scene.world_min.x,
        scene.world_min.y,
        scene.world_max.x,
        scene.world_max.y
    );
    Ok(())
}

pub struct RandomizeArgs<'a> {
    pub count: usize,
    pub width: f32,
    pub height: f32,
    pub out_path: &'a Path,
    pub endian: Endian,
}

/// Generates `count` random convex polygons in a `width x height`
/// world and writes them as a fresh GHCS scene.
pub fn randomize(args: RandomizeArgs) -> Result<(), CliError> {
    if args.width <= 0.0 || args.height <= 0.0 {
        return Err(CliError::InvalidWorldDimensions {
            width: args.width,
            height: args.height,
        });
    }

    let world_min = Vec2::ZERO;
    let world_max = Vec2::new(args.width, args.height);
    let mut rng = rand::thread_rng();

    let mut geometries = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let poly = random_convex_poly(&mut rng, &world_min, &world_max)?;
        geometries.push(Geometry::from_polygon(poly));
    }

    let scene = ghcs_codec::Scene::new(world_min, world_max, geometries);
    let engine = Engine::new(scene)?;
    log::info!(
        "writing {} random geometries to {}",
        args.count,
        args.out_path.display()
    );
    engine.save(args.out_path, args.endian)?;
    Ok(())
}

fn random_convex_poly(rng: &mut impl Rng, world_min: &Vec2, world_max: &Vec2) -> Result<ConvexPoly2D, CliError> {
    let margin = 10.0f32.min((world_max.x - world_min.x).min(world_max.y - world_min.y) / 4.0);
    let center = Vec2::new(
        rng.gen_range((world_min.x + margin)..(world_max.x - margin)),
        rng.gen_range((world_min.y + margin)..(world_max.y - margin)),
    );
    let sides = rng.gen_range(3..=6);
    let radius = rng.gen_range(2.0..margin.max(3.0));

    let mut angles: Vec<f32> = (0..sides)
        .map(|_| rng.gen_range(0.0..std::f32::consts::TAU))
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    angles.dedup_by(|a, b| (*a - *b).abs() < 1e-3);
    if angles.len() < 3 {
        angles = (0..sides).map(|i| i as f32 / sides as f32 * std::f32::consts::TAU).collect();
    }

    let verts = angles.iter().map(|&a| center + Vec2::new(a.cos(), a.sin()) * radius).collect();
    ConvexPoly2D::new(verts).map_err(CliError::from)
}
