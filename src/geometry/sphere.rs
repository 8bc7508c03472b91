use super::{Intersection, Primitive};
use crate::math::{Point3, Ray};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Sphere {
        debug_assert!(radius > 0.0, "sphere radius must be positive: {}", radius);
        Sphere { center, radius }
    }
}

impl Primitive for Sphere {
    // projected-center method. assumes r.direction is unit length, otherwise
    // the returned distance is scaled by its norm.
    fn intersect(&self, r: Ray) -> Option<Intersection> {
        let s = self.center - r.origin;
        let sd = s * r.direction;
        let ss = s * s;

        let discriminant = sd * sd - ss + self.radius * self.radius;

        // the line the ray lies on misses the sphere entirely
        if discriminant < 0.0 {
            return None;
        }

        let q = discriminant.sqrt();
        let p1 = sd - q;
        let p2 = sd + q;

        // p1 <= p2. if p1 is behind the origin we are inside the sphere (or past it),
        // and the only visible surface point left is p2.
        let distance = if p1 >= 0.0 { p1 } else { p2 };

        if distance >= 0.0 {
            Some(Intersection::new(distance, r.point_at_parameter(distance)))
        } else {
            None
        }
    }
}
