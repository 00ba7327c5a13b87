//! Ray-vs-shape kernels.
//!
//! None of these can fail: a degenerate input (zero-length direction,
//! a ray parallel to every face) just produces zero hits. Results are
//! small stack-allocated values ([`Hits`], `Option<RayHit2D>`) rather
//! than out-parameters, so a caller accumulating many queries never
//! pays for a heap allocation per query.

use glam::Vec2;

use crate::{ConvexHull2D, Plane2D, Ray2D, RayHit2D, EPSILON};

/// Zero, one, or two hit parameters, ascending when there are two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hits<T> {
    None,
    One(T),
    Two(T, T),
}

impl<T: Copy> Hits<T> {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Hits::None)
    }
}

/// Single hit against an infinite plane. Impact normal faces the
/// incoming ray: `n` if the ray is entering the positive half-space
/// (`den < 0`), `-n` if it's leaving / hitting from behind.
#[must_use]
pub fn ray_vs_plane(ray: &Ray2D, plane: &Plane2D) -> Option<RayHit2D> {
    let den = ray.v.dot(plane.n);
    if den.abs() < EPSILON {
        return None;
    }
    let t = (plane.d - ray.s.dot(plane.n)) / den;
    if t < 0.0 {
        return None;
    }
    let point = ray.point_at(t);
    let normal = if den < 0.0 { plane.n } else { -plane.n };
    Some(RayHit2D { t, point, normal })
}

/// `(s + t*v - c).(s + t*v - c) = r^2`, negative roots discarded,
/// ascending order.
#[must_use]
pub fn ray_vs_disc(ray: &Ray2D, center: Vec2, radius: f32) -> Hits<f32> {
    let m = ray.s - center;
    let a = ray.v.dot(ray.v);
    if a < EPSILON {
        return Hits::None;
    }
    let b = m.dot(ray.v);
    let c = m.dot(m) - radius * radius;
    let disc = b * b - a * c;
    if disc < 0.0 {
        return Hits::None;
    }
    let sqrt_disc = disc.sqrt();
    let t0 = (-b - sqrt_disc) / a;
    let t1 = (-b + sqrt_disc) / a;
    collect_nonnegative_ascending(t0, t1)
}

fn collect_nonnegative_ascending(t0: f32, t1: f32) -> Hits<f32> {
    let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
    match (lo >= 0.0, hi >= 0.0) {
        (true, true) => Hits::Two(lo, hi),
        (false, true) => Hits::One(hi),
        _ => Hits::None,
    }
}

/// Union of two end-cap discs and one oriented side slab; up to two
/// valid crossing parameters.
#[must_use]
pub fn ray_vs_capsule(ray: &Ray2D, a: Vec2, b: Vec2, radius: f32) -> Hits<f32> {
    let axis = b - a;
    let len = axis.length();
    if len < EPSILON {
        return ray_vs_disc(ray, a, radius);
    }
    let dir = axis / len;
    let normal = Vec2::new(-dir.y, dir.x);

    let mut ts: Vec<f32> = Vec::with_capacity(4);

    for sign in [1.0f32, -1.0] {
        let plane_n = normal * sign;
        let plane_point = a + plane_n * radius;
        let plane = Plane2D::new(plane_n, plane_n.dot(plane_point));
        if let Some(hit) = ray_vs_plane(ray, &plane) {
            let proj = (hit.point - a).dot(dir);
            if (0.0..=len).contains(&proj) {
                ts.push(hit.t);
            }
        }
    }

    // End caps only contribute hits outside the straight section,
    // where the capsule boundary actually is circular.
    if let Hits::One(t) | Hits::Two(t, _) = ray_vs_disc(ray, a, radius) {
        push_if_cap_region(&mut ts, ray, t, a, dir, false);
    }
    if let Hits::Two(_, t) = ray_vs_disc(ray, a, radius) {
        push_if_cap_region(&mut ts, ray, t, a, dir, false);
    }
    if let Hits::One(t) | Hits::Two(t, _) = ray_vs_disc(ray, b, radius) {
        push_if_cap_region(&mut ts, ray, t, b, dir, true);
    }
    if let Hits::Two(_, t) = ray_vs_disc(ray, b, radius) {
        push_if_cap_region(&mut ts, ray, t, b, dir, true);
    }

    ts.sort_by(|x, y| x.partial_cmp(y).unwrap());
    ts.dedup_by(|x, y| (*x - *y).abs() < 1e-5);

    match ts.len() {
        0 => Hits::None,
        1 => Hits::One(ts[0]),
        _ => Hits::Two(ts[0], ts[1]),
    }
}

fn push_if_cap_region(ts: &mut Vec<f32>, ray: &Ray2D, t: f32, center: Vec2, dir: Vec2, far_end: bool) {
    let point = ray.point_at(t);
    let proj = (point - center).dot(dir);
    let in_cap = if far_end { proj >= -1e-4 } else { proj <= 1e-4 };
    if in_cap {
        ts.push(t);
    }
}

/// The central kernel: parametric slab intersection against a convex
/// hull's half-plane set.
///
/// `t_min` lets the caller ignore near-origin hits (default `0.0`).
/// When the ray starts outside the hull, the impact is the entering
/// face. When it starts inside, the single reported hit is the exit
/// point, with the exit face's normal negated (so the returned normal
/// always faces back toward the incoming ray, same convention as
/// [`ray_vs_plane`]).
#[must_use]
pub fn ray_vs_convex_hull(ray: &Ray2D, hull: &ConvexHull2D, t_min: f32) -> Option<RayHit2D> {
    let mut t_enter = 0.0f32;
    let mut t_exit = f32::INFINITY;
    let mut enter_normal: Option<Vec2> = None;
    let mut exit_normal: Option<Vec2> = None;

    for plane in hull.planes() {
        let den = ray.v.dot(plane.n);
        let num = plane.d - ray.s.dot(plane.n);

        if den.abs() < EPSILON {
            if num < 0.0 {
                return None;
            }
            continue;
        }

        let t = num / den;
        if den > 0.0 {
            if t < t_exit {
                t_exit = t;
                exit_normal = Some(plane.n);
            }
        } else if t > t_enter {
            t_enter = t;
            enter_normal = Some(plane.n);
        }

        if t_enter > t_exit {
            return None;
        }
    }

    if t_enter > t_exit || t_exit < 0.0 {
        return None;
    }

    let (t_star, normal) = match enter_normal {
        Some(n) => (t_enter.max(0.0), n),
        None => (t_exit, exit_normal.map(|n| -n).unwrap_or(Vec2::ZERO)),
    };

    if t_star < t_min {
        return None;
    }

    Some(RayHit2D {
        t: t_star,
        point: ray.point_at(t_star),
        normal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvexPoly2D;
    use approx::assert_relative_eq;

    #[test]
    fn plane_hit_axis_aligned() {
        let ray = Ray2D::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let plane = Plane2D::new(Vec2::new(1.0, 0.0), 10.0);
        let hit = ray_vs_plane(&ray, &plane).unwrap();
        assert_relative_eq!(hit.t, 10.0, epsilon = 1e-5);
    }

    #[test]
    fn plane_parallel_outside_misses() {
        let ray = Ray2D::new(Vec2::new(0.0, 5.0), Vec2::new(1.0, 0.0));
        let plane = Plane2D::new(Vec2::new(0.0, 1.0), 1.0);
        assert!(ray_vs_plane(&ray, &plane).is_none());
    }

    #[test]
    fn disc_two_hits_ascending() {
        let ray = Ray2D::new(Vec2::new(-10.0, 0.0), Vec2::new(1.0, 0.0));
        match ray_vs_disc(&ray, Vec2::ZERO, 2.0) {
            Hits::Two(t0, t1) => {
                assert_relative_eq!(t0, 8.0, epsilon = 1e-4);
                assert_relative_eq!(t1, 12.0, epsilon = 1e-4);
            }
            other => panic!("expected two hits, got {other:?}"),
        }
    }

    #[test]
    fn disc_origin_inside_one_hit() {
        let ray = Ray2D::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        match ray_vs_disc(&ray, Vec2::ZERO, 2.0) {
            Hits::One(t) => assert_relative_eq!(t, 2.0, epsilon = 1e-4),
            other => panic!("expected one hit, got {other:?}"),
        }
    }

    fn diamond() -> ConvexPoly2D {
        ConvexPoly2D::new(vec![
            Vec2::new(60.0, 40.0),
            Vec2::new(40.0, 60.0),
            Vec2::new(20.0, 40.0),
            Vec2::new(40.0, 20.0),
        ])
        .unwrap()
    }

    #[test]
    fn hull_hit_from_outside_diamond() {
        let poly = diamond();
        let hull = ConvexHull2D::from_polygon(&poly);
        let dir = Vec2::new(1.0, 1.0).normalize();
        let ray = Ray2D::new(Vec2::ZERO, dir);
        let hit = ray_vs_convex_hull(&ray, &hull, 0.0).unwrap();

        // Edge from (60,40) to (40,60): x + y = 100.
        assert_relative_eq!(hit.point.x + hit.point.y, 100.0, epsilon = 1e-3);
        assert_relative_eq!(hit.normal.length(), 1.0, epsilon = 1e-5);
        assert!(hit.t > 0.0);
    }

    #[test]
    fn hull_hit_from_inside_is_exit_point() {
        let poly = diamond();
        let hull = ConvexHull2D::from_polygon(&poly);
        let ray = Ray2D::new(Vec2::new(40.0, 40.0), Vec2::new(1.0, 0.0));
        let hit = ray_vs_convex_hull(&ray, &hull, 0.0).unwrap();
        assert!(hit.t > 0.0);
        assert_relative_eq!(hit.point.x, 60.0, epsilon = 1e-3);
    }

    #[test]
    fn hull_miss_entirely() {
        let poly = diamond();
        let hull = ConvexHull2D::from_polygon(&poly);
        let ray = Ray2D::new(Vec2::new(-100.0, -100.0), Vec2::new(0.0, 1.0));
        assert!(ray_vs_convex_hull(&ray, &hull, 0.0).is_none());
    }

    #[test]
    fn capsule_reports_both_ends() {
        let a = Vec2::new(-5.0, 0.0);
        let b = Vec2::new(5.0, 0.0);
        let ray = Ray2D::new(Vec2::new(-20.0, 0.0), Vec2::new(1.0, 0.0));
        match ray_vs_capsule(&ray, a, b, 1.0) {
            Hits::Two(t0, t1) => {
                assert_relative_eq!(t0, 14.0, epsilon = 1e-3);
                assert_relative_eq!(t1, 26.0, epsilon = 1e-3);
            }
            other => panic!("expected two hits, got {other:?}"),
        }
    }
}
