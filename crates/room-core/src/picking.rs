use crate::geometry::{Bounds, MeshData};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance: f32,
}

/// Entry distance of a ray into a sphere, `0.0` when the origin is inside.
/// `None` on a miss or when the sphere lies behind the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    if -b + root < 0.0 {
        return None;
    }
    Some((-b - root).max(0.0))
}

#[inline]
pub fn ray_touches_sphere(ray: &Ray, center: Vec3, radius: f32) -> bool {
    ray_sphere(ray.origin, ray.dir, center, radius).is_some()
}

/// Möller–Trumbore, two-sided. Returns the ray parameter of the hit.
#[inline]
pub fn ray_triangle(origin: Vec3, dir: Vec3, tri: [Vec3; 3]) -> Option<f32> {
    const EPS: f32 = 1e-7;
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let p = dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPS {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = origin - tri[0];
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}

/// Nearest hit distance of a world-space ray against a mesh placed by `model`.
///
/// The ray is taken into mesh space with the inverse transform; because the
/// transform is affine the triangle parameter is also the world distance for
/// a unit-length `ray.dir`.
pub fn ray_mesh(ray: &Ray, mesh: &MeshData, bounds: &Bounds, model: &Mat4) -> Option<f32> {
    let (scale, _, _) = model.to_scale_rotation_translation();
    let world_center = model.transform_point3(bounds.center);
    let world_radius = bounds.radius * scale.abs().max_element();
    if !ray_touches_sphere(ray, world_center, world_radius) {
        return None;
    }
    let inv = model.inverse();
    let local_origin = inv.transform_point3(ray.origin);
    let local_dir = inv.transform_vector3(ray.dir);
    mesh.triangles()
        .filter_map(|tri| ray_triangle(local_origin, local_dir, tri))
        .min_by(|a, b| a.total_cmp(b))
}

/// Pick the closest of several candidates. Equal distances keep candidate
/// order, so the earliest registered object wins a tie.
pub fn nearest_hit<I>(candidates: I) -> Option<Hit>
where
    I: IntoIterator<Item = Hit>,
{
    let mut hits: SmallVec<[Hit; 4]> = candidates.into_iter().collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits.first().copied()
}
