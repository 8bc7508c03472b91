use crate::math::{Point3, Ray};

mod sphere;

pub use sphere::Sphere;

/// Where a ray first becomes visible on a primitive, `distance` units along it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    pub distance: f32,
    pub point: Point3,
}

impl Intersection {
    pub fn new(distance: f32, point: Point3) -> Self {
        Intersection { distance, point }
    }
}

pub trait Primitive {
    /// `None` means the ray misses; that is an ordinary outcome, not an error.
    fn intersect(&self, r: Ray) -> Option<Intersection>;
}
