use crate::composer::SceneDescription;
use glam::Vec3;
use pulselattice_common::GridIndex;

/// A world-space ray, usually built from a camera and a cursor position.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    /// Direction, expected to be normalized.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }
}

/// The sphere a ray hit, with its current world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub index: GridIndex,
    pub position: Vec3,
    pub distance: f32,
}

/// Nearest sphere intersected by `ray`, if any.
///
/// Standard quadratic ray/sphere test against every sphere in the scene;
/// lattice sizes top out at 11^3 so brute force is fine.
pub fn pick_sphere(scene: &SceneDescription, ray: &Ray) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for sphere in &scene.spheres {
        let Some(distance) = ray_sphere(ray, sphere.position, sphere.radius) else {
            continue;
        };
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(PickHit {
                index: sphere.index,
                position: sphere.position,
                distance,
            });
        }
    }
    best
}

/// Distance along the ray to the first intersection with a sphere, or None.
fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t = -b - sqrt_disc;
    if t >= 0.0 {
        return Some(t);
    }
    let t = -b + sqrt_disc;
    (t >= 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SceneComposer, SceneParams};

    fn still_scene() -> SceneDescription {
        let params = SceneParams {
            rotate_cube: false,
            pulse_spheres: false,
            ..SceneParams::default()
        };
        SceneComposer::new(7).advance(params, 0.0, 0.0)
    }

    #[test]
    fn ray_through_center_hits_center_sphere() {
        let scene = still_scene();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 25.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = pick_sphere(&scene, &ray).unwrap();
        // Front face of the lattice along +Z: the (1,1,2) cell for boxes=3.
        assert_eq!(hit.index, GridIndex::new(1, 1, 2));
        assert!(hit.distance > 0.0);
    }

    #[test]
    fn nearest_sphere_wins() {
        let scene = still_scene();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 25.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = pick_sphere(&scene, &ray).unwrap();
        // The hit must be the sphere closest to the origin of the ray.
        for sphere in &scene.spheres {
            if sphere.index == hit.index {
                assert!((sphere.position - hit.position).length() < 1e-6);
            }
        }
        assert!(hit.position.z > 0.0);
    }

    #[test]
    fn miss_returns_none() {
        let scene = still_scene();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 25.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(pick_sphere(&scene, &ray).is_none());
    }

    #[test]
    fn ray_from_inside_sphere_still_hits() {
        let scene = still_scene();
        // Origin inside the center sphere of the 3x3x3 lattice.
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let hit = pick_sphere(&scene, &ray).unwrap();
        assert_eq!(hit.index, GridIndex::new(1, 1, 1));
    }

    #[test]
    fn ray_behind_lattice_misses() {
        let scene = still_scene();
        // Pointing away from every sphere.
        let ray = Ray::new(Vec3::new(0.0, 0.0, 25.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(pick_sphere(&scene, &ray).is_none());
    }
}
