use crate::config::{BoundaryPolicy, FieldConfig, SpatialBound};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Fixed-size set of drifting points kept inside a bound.
pub struct ParticleField {
    points: Vec<Point>,
    bound: SpatialBound,
    boundary: BoundaryPolicy,
}

impl ParticleField {
    /// Sample `config.point_count` points inside the configured bound.
    pub fn generate(config: &FieldConfig, rng: &mut impl Rng) -> Self {
        let max_v = config.max_speed_component();
        let points = (0..config.point_count)
            .map(|_| Point {
                position: sample_position(config.bound, rng),
                velocity: sample_velocity(max_v, rng),
            })
            .collect();
        Self::from_points(points, config.bound, config.boundary)
    }

    /// Build a field from explicit points.
    pub fn from_points(points: Vec<Point>, bound: SpatialBound, boundary: BoundaryPolicy) -> Self {
        Self {
            points,
            bound,
            boundary,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bound(&self) -> SpatialBound {
        self.bound
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Advance every point by its velocity, then apply the boundary policy.
    pub fn step(&mut self) {
        let extent = self.bound.extent();
        for p in &mut self.points {
            p.position += p.velocity;
            match self.boundary {
                BoundaryPolicy::Bounce => bounce(p, extent),
                BoundaryPolicy::Wrap => wrap(p, extent),
            }
        }
    }
}

fn sample_position(bound: SpatialBound, rng: &mut impl Rng) -> Vec3 {
    match bound {
        SpatialBound::Sphere { radius } => {
            // cbrt keeps the density uniform in volume rather than in radius
            let r = radius * rng.gen::<f32>().cbrt();
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
            Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            )
        }
        SpatialBound::Cube { half_extent } => {
            if !(half_extent > 0.0) {
                return Vec3::ZERO;
            }
            Vec3::new(
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(-half_extent..half_extent),
            )
        }
    }
}

fn sample_velocity(max_component: f32, rng: &mut impl Rng) -> Vec3 {
    let mut component = || (rng.gen::<f32>() - 0.5) * 2.0 * max_component;
    Vec3::new(component(), component(), component())
}

#[inline]
fn bounce(p: &mut Point, extent: f32) {
    for axis in 0..3 {
        if p.position[axis].abs() > extent {
            p.velocity[axis] = -p.velocity[axis];
        }
    }
}

#[inline]
fn wrap(p: &mut Point, extent: f32) {
    let span = 2.0 * extent;
    if !(span > 0.0) {
        p.position = Vec3::ZERO;
        return;
    }
    for axis in 0..3 {
        let c = p.position[axis];
        if c < -extent || c >= extent {
            let mut w = (c + extent).rem_euclid(span) - extent;
            // rem_euclid can round up to exactly `span` for tiny negatives
            if w >= extent {
                w = -extent;
            }
            p.position[axis] = w;
        }
    }
}
