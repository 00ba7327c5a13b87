use ghcs_broadphase::BroadphaseGrid;
use ghcs_geom::raycast::ray_vs_convex_hull;
use ghcs_geom::{ConvexPoly2D, Geometry, Ray2D, Vec2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;

fn random_convex_poly(rng: &mut impl Rng, center: Vec2) -> ConvexPoly2D {
    let sides = rng.gen_range(3..=6);
    let radius = rng.gen_range(3.0..10.0);
    let mut angles: Vec<f32> = (0..sides)
        .map(|_| rng.gen_range(0.0..std::f32::consts::TAU))
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    angles.dedup_by(|a, b| (*a - *b).abs() < 1e-3);
    // Degenerate draws (near-duplicate angles) fall back to a regular
    // polygon so the test never wastes a sample.
    if angles.len() < 3 {
        angles = (0..sides).map(|i| i as f32 / sides as f32 * std::f32::consts::TAU).collect();
    }

    let verts = angles
        .iter()
        .map(|&a| center + Vec2::new(a.cos(), a.sin()) * radius)
        .collect();
    ConvexPoly2D::new(verts).expect("angles are sorted CCW by construction")
}

/// Exact pairwise (ray index, geometry index) hit set, independent of
/// the batched driver's last-writer-wins per-ray reporting.
fn exact_hit_pairs(rays: &[Ray2D], geometries: &[Geometry], grid: Option<&BroadphaseGrid>) -> HashSet<(usize, usize)> {
    let mut pairs = HashSet::new();
    for (i, ray) in rays.iter().enumerate() {
        for (j, geom) in geometries.iter().enumerate() {
            if let Some(g) = grid {
                let ray_mask = g.mask_for_ray(ray);
                if !ray_mask.overlaps(&geom.mask) {
                    continue;
                }
            }
            if ray_vs_convex_hull(ray, geom.hull(), 0.0).is_some() {
                pairs.insert((i, j));
            }
        }
    }
    pairs
}

#[test]
fn pruned_pass_finds_the_same_hit_pairs_as_exhaustive() {
    let mut rng = StdRng::seed_from_u64(42);
    let world_min = Vec2::ZERO;
    let world_max = Vec2::new(300.0, 150.0);

    let grid = BroadphaseGrid::new(world_min, world_max).unwrap();

    let mut geometries: Vec<Geometry> = (0..128)
        .map(|_| {
            let center = Vec2::new(rng.gen_range(10.0..290.0), rng.gen_range(10.0..140.0));
            Geometry::from_polygon(random_convex_poly(&mut rng, center))
        })
        .collect();
    for g in &mut geometries {
        g.mask = grid.mask_for_polygon(g.polygon());
    }

    let rays: Vec<Ray2D> = (0..1024)
        .map(|_| {
            let s = Vec2::new(rng.gen_range(0.0..300.0), rng.gen_range(0.0..150.0));
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            Ray2D::new(s, Vec2::new(angle.cos(), angle.sin()))
        })
        .collect();

    let exhaustive_pairs = exact_hit_pairs(&rays, &geometries, None);
    let pruned_pairs = exact_hit_pairs(&rays, &geometries, Some(&grid));

    assert_eq!(exhaustive_pairs, pruned_pairs);
    assert!(!exhaustive_pairs.is_empty(), "sample scene produced no hits at all");

    for &(i, j) in &exhaustive_pairs {
        let ray_mask = grid.mask_for_ray(&rays[i]);
        assert!(ray_mask.overlaps(&geometries[j].mask));
    }
}
