use crate::camera::Camera;
use crate::geometry::{Intersection, Primitive, Sphere};
use crate::math::{Point3, Ray};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Subject {
    A,
    B,
}

/// Two spheres, tested in a fixed order.
#[derive(Copy, Clone, Debug)]
pub struct Scene {
    pub a: Sphere,
    pub b: Sphere,
}

impl Scene {
    pub fn new(a: Sphere, b: Sphere) -> Self {
        Scene { a, b }
    }

    pub fn two_spheres() -> Self {
        Scene::new(
            Sphere::new(Point3::new(-1.0, 1.0, 10.0), 2.0),
            Sphere::new(Point3::new(1.0, -1.0, 4.0), 1.0),
        )
    }

    pub fn camera() -> Camera {
        Camera::new(Point3::ORIGIN, 0.0, 0.0, 75.0f32.to_radians())
    }

    /// Closest of the two hits. Sphere A wins ties.
    pub fn nearest(&self, ray: Ray) -> Option<(Subject, Intersection)> {
        match (self.a.intersect(ray), self.b.intersect(ray)) {
            (None, None) => None,
            (Some(a), None) => Some((Subject::A, a)),
            (None, Some(b)) => Some((Subject::B, b)),
            (Some(a), Some(b)) => {
                if a.distance <= b.distance {
                    Some((Subject::A, a))
                } else {
                    Some((Subject::B, b))
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn test_center_ray_regression() {
        let scene = Scene::two_spheres();
        let ray = Scene::camera().trace_ray(0.0, 0.0);

        let a = scene.a.intersect(ray).expect("center ray should hit A");
        // 10 - sqrt(2)
        assert!((a.distance - 8.585_786).abs() < 1e-4, "{:?}", a);
        assert!(scene.b.intersect(ray).is_none());

        let (subject, isect) = scene.nearest(ray).expect("center ray should hit");
        assert!(subject == Subject::A);
        assert!(isect == a);
    }

    #[test]
    fn test_ray_at_b_hits_only_b() {
        let scene = Scene::two_spheres();
        let direction = (scene.b.center - Point3::ORIGIN).normalized();
        let ray = Ray::new(Point3::ORIGIN, direction);

        // sqrt(18) - 1
        let (subject, isect) = scene.nearest(ray).expect("ray should hit B");
        assert!(subject == Subject::B);
        assert!((isect.distance - 3.242_640_7).abs() < 1e-4, "{:?}", isect);
        assert!(scene.a.intersect(ray).is_none());
    }

    #[test]
    fn test_closer_sphere_wins_when_both_hit() {
        let near = Sphere::new(Point3::new(0.0, 0.0, 5.0), 1.0);
        let far = Sphere::new(Point3::new(0.0, 0.0, 20.0), 4.0);
        let ray = Ray::new(Point3::ORIGIN, Vec3::Z);

        let (subject, isect) = Scene::new(near, far).nearest(ray).unwrap();
        assert!(subject == Subject::A);
        assert!(isect.distance == 4.0, "{:?}", isect);

        let (subject, isect) = Scene::new(far, near).nearest(ray).unwrap();
        assert!(subject == Subject::B);
        assert!(isect.distance == 4.0, "{:?}", isect);
    }

    #[test]
    fn test_ties_go_to_a() {
        let a = Sphere::new(Point3::new(0.0, 0.0, 5.0), 1.0);
        let b = Sphere::new(Point3::new(0.0, 0.0, 6.0), 2.0);
        let ray = Ray::new(Point3::ORIGIN, Vec3::Z);
        // both surfaces start at z = 4
        let (subject, isect) = Scene::new(a, b).nearest(ray).unwrap();
        assert!(subject == Subject::A);
        assert!(isect.distance == 4.0, "{:?}", isect);
    }

    #[test]
    fn test_miss_everything() {
        let scene = Scene::two_spheres();
        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        assert!(scene.nearest(ray).is_none());
    }
}
