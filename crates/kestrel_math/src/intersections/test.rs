use crate::*;

fn unit_circle() -> Circle2D {
    Circle2D::new(Vec2::ZERO, 1.0)
}

fn unit_sphere() -> Sphere {
    Sphere::new(Vec3::ZERO, 1.0)
}

//-- circle --------------------------------------------------------------------------------------------------------------------

#[test]
fn circle_line() {
    let line = Line2D::new(Vec2::new(0.0, 0.5), Vec2::I);
    let chord = unit_circle().intersect(line).expect("line crosses the circle");
    let x = 0.75f32.sqrt();
    assert!(chord.is_close_to(Segment2D::new(Vec2::new(-x, 0.5), Vec2::new(x, 0.5)), 1e-6));

    // Argument order doesn't matter
    assert_eq!(line.intersect(unit_circle()), Some(chord));

    let above = Line2D::new(Vec2::new(0.0, 1.5), Vec2::I);
    assert_eq!(unit_circle().intersect(above), None);
}

#[test]
fn circle_ray_segment() {
    let circle = unit_circle();
    assert!(circle.intersect(Ray2D::new(Vec2::new(2.0, 0.0), -Vec2::I)));
    assert!(!circle.intersect(Ray2D::new(Vec2::new(2.0, 0.0), Vec2::I)));
    // Starting inside
    assert!(circle.intersect(Ray2D::new(Vec2::ZERO, Vec2::J)));

    assert!(circle.intersect(Segment2D::new(Vec2::new(-2.0, 0.0), Vec2::new(2.0, 0.0))));
    assert!(!circle.intersect(Segment2D::new(Vec2::new(2.0, 0.0), Vec2::new(3.0, 0.0))));
    assert!(Segment2D::new(Vec2::new(0.5, 0.0), Vec2::new(3.0, 0.0)).intersect(circle));
}

#[test]
fn circle_rect() {
    let rect = Rect::new(Vec2::ZERO, Vec2::new(2.0, 1.0));
    assert!(Circle2D::new(Vec2::new(3.0, 0.5), 1.0).intersect(rect));
    assert!(!Circle2D::new(Vec2::new(3.0, 0.5), 0.9).intersect(rect));
    assert!(rect.intersect(Circle2D::new(Vec2::new(1.0, 0.5), 0.1)));

    let rotated = OrientedRect::from_center_size(Vec2::ZERO, Vec2::new(2.0, 2.0), Complex::from_polar(QUARTER_PI));
    assert!(!Circle2D::new(Vec2::new(2.0, 0.0), 0.5).intersect(rotated));
    assert!(Circle2D::new(Vec2::new(2.0, 0.0), 0.6).intersect(rotated));
}

#[test]
fn circle_classify_line() {
    let line = Line2D::new(Vec2::ZERO, Vec2::I);
    assert_eq!(Circle2D::new(Vec2::new(0.0, 3.0), 1.0).classify_line(line), PlaneClassification::Right);
    assert_eq!(Circle2D::new(Vec2::new(0.0, -3.0), 1.0).classify_line(line), PlaneClassification::Left);
    assert_eq!(Circle2D::new(Vec2::new(4.0, 0.5), 1.0).classify_line(line), PlaneClassification::Intersects);
}

#[test]
fn circle_ray_hit() {
    let circle = unit_circle();
    let hit = circle.intersect_ray(&Ray2D::new(Vec2::new(-3.0, 0.0), Vec2::I));
    assert!(hit.is_some_and(|t| t.is_close_to(2.0, 1e-6)));
    assert_eq!(circle.intersect_ray(&Ray2D::new(Vec2::ZERO, Vec2::I)), Some(0.0));
    assert_eq!(circle.intersect_ray(&Ray2D::new(Vec2::new(-3.0, 0.0), -Vec2::I)), None);
}

//-- sphere --------------------------------------------------------------------------------------------------------------------

#[test]
fn sphere_line_ray_segment() {
    let sphere = unit_sphere();
    let chord = sphere.intersect(Line3D::new(Vec3::new(0.0, 0.0, -5.0), Vec3::K)).expect("line goes through the center");
    assert!(chord.is_close_to(Segment3D::new(-Vec3::K, Vec3::K), 1e-6));
    assert_eq!(sphere.intersect(Line3D::new(Vec3::new(2.0, 0.0, 0.0), Vec3::K)), None);

    let ray = Ray3D::new(Vec3::new(2.0, 0.0, 0.0), -Vec3::I);
    assert!(sphere.intersect(ray));
    assert!(sphere.intersect_ray(&ray).is_some_and(|t| t.is_close_to(1.0, 1e-6)));
    assert!(!sphere.intersect(Ray3D::new(Vec3::new(2.0, 0.0, 0.0), Vec3::I)));

    assert!(sphere.intersect(Segment3D::new(Vec3::new(0.0, -0.5, 0.0), Vec3::new(0.0, 0.5, 0.0))));
    assert!(!Segment3D::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 3.0, 0.0)).intersect(sphere));
}

#[test]
fn sphere_plane() {
    let sphere = Sphere::new(Vec3::ZERO, 2.0);
    let plane = Plane::new(Vec3::K, Vec3::K);
    let circle = sphere.intersect(plane).expect("plane cuts the sphere");
    assert!(circle.is_close_to(Circle3D::new(Vec3::K, 3.0f32.sqrt(), Vec3::K), 1e-6));
    assert_eq!(sphere.classify_plane(plane), PlaneClassification::Intersects);

    let far = Plane::new(Vec3::new(0.0, 0.0, 5.0), Vec3::K);
    assert_eq!(sphere.intersect(far), None);
    assert_eq!(sphere.classify_plane(far), PlaneClassification::Left);
    assert_eq!(sphere.classify_plane(Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::K)), PlaneClassification::Right);

    // Touching
    let touching = sphere.intersect(Plane::new(Vec3::new(0.0, 0.0, 2.0), Vec3::K)).expect("plane touches the sphere");
    assert_eq!(touching.radius, 0.0);
}

#[test]
fn sphere_cone() {
    let cone = Cone::new(Vec3::ZERO, Vec3::K, 1.0, 0.0, 10.0);
    // On the axis
    assert!(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0).intersect(cone));
    // Center inside the cone
    assert!(Sphere::new(Vec3::new(4.5, 0.0, 5.0), 1.0).intersect(cone));
    // Outside, but close to the surface
    assert!(Sphere::new(Vec3::new(6.2, 0.0, 5.0), 1.0).intersect(cone));
    assert!(!Sphere::new(Vec3::new(7.0, 0.0, 5.0), 1.0).intersect(cone));
    assert!(!Sphere::new(Vec3::new(10.0, 0.0, 5.0), 1.0).intersect(cone));
    // Past the end
    assert!(!cone.intersect(Sphere::new(Vec3::new(0.0, 0.0, 12.0), 1.0)));
}

#[test]
fn sphere_cylinder() {
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, 2.0), 1.0);
    for radius in [1.0, 1.5, 3.0] {
        assert!(sphere.intersect(Cylinder::new(Vec3::ZERO, Vec3::K, radius, 4.0)));
    }

    let cylinder = Cylinder::new(Vec3::ZERO, Vec3::K, 1.0, 4.0);
    assert!(Sphere::new(Vec3::new(1.5, 0.0, 2.0), 1.0).intersect(cylinder));
    assert!(!Sphere::new(Vec3::new(3.0, 0.0, 2.0), 1.0).intersect(cylinder));
    assert!(!cylinder.intersect(Sphere::new(Vec3::new(0.0, 0.0, 6.0), 1.0)));
    assert!(!cylinder.intersect(Sphere::new(Vec3::new(0.0, 0.0, -2.5), 1.0)));
}

#[test]
fn sphere_box() {
    let aabb = BoundingBox::new(Vec3::ZERO, Vec3::set(1.0));
    assert!(!Sphere::new(Vec3::new(5.0, 0.0, 0.0), 1.0).intersect(aabb));
    assert!(Sphere::new(Vec3::new(1.5, 0.5, 0.5), 1.0).intersect(aabb));
    assert!(aabb.intersect(Sphere::new(Vec3::set(0.5), 0.1)));

    let rotated = OrientedBox::from_center_size(Vec3::ZERO, Vec3::set(2.0), Quat::from_axis_angle(Vec3::K, QUARTER_PI));
    assert!(!Sphere::new(Vec3::new(2.0, 0.0, 0.0), 0.5).intersect(rotated));
    assert!(Sphere::new(Vec3::new(2.0, 0.0, 0.0), 0.6).intersect(rotated));
}

//-- lines ---------------------------------------------------------------------------------------------------------------------

#[test]
fn line_line_2d() {
    let first = Line2D::new(Vec2::ZERO, Vec2::I);
    let second = Line2D::new(Vec2::new(2.0, -1.0), Vec2::J);
    assert!(first.intersect(second).is_close_to(Vec2::new(2.0, 0.0), 1e-6));
    assert!(lines_intersection_point(second, first).is_close_to(Vec2::new(2.0, 0.0), 1e-6));

    assert_eq!(try_lines_intersection_point(first, second).map(|p| p.is_close_to(Vec2::new(2.0, 0.0), 1e-6)), Ok(true));
    let parallel = Line2D::new(Vec2::J, Vec2::I);
    assert_eq!(try_lines_intersection_point(first, parallel), Err(Error::DegenerateInput("parallel lines")));
}

#[test]
fn ray_segment_line_2d() {
    let line = Line2D::new(Vec2::ZERO, Vec2::I);
    assert!(Ray2D::new(Vec2::new(0.0, -1.0), Vec2::J).intersect(line));
    assert!(!Ray2D::new(Vec2::new(0.0, -1.0), -Vec2::J).intersect(line));
    assert!(!line.intersect(Ray2D::new(Vec2::new(0.0, -1.0), Vec2::I)));

    assert!(Segment2D::new(Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0)).intersect(line));
    assert!(!line.intersect(Segment2D::new(Vec2::new(0.0, 1.0), Vec2::new(0.0, 3.0))));

    let hit = line.intersect_ray(&Ray2D::new(Vec2::new(0.0, -1.0), Vec2::new(1.0, 1.0).normalize()));
    assert!(hit.is_some_and(|t| t.is_close_to(2.0f32.sqrt(), 1e-5)));
    assert_eq!(line.intersect_ray(&Ray2D::new(Vec2::new(0.0, -1.0), Vec2::I)), None);
}

#[test]
fn line_plane_3d() {
    let plane = Plane::new(Vec3::new(0.0, 0.0, 3.0), Vec3::K);
    let line = Line3D::new(Vec3::new(1.0, 1.0, 0.0), Vec3::K);
    assert!(line.intersect(plane).is_close_to(Vec3::new(1.0, 1.0, 3.0), 1e-6));
    assert_eq!(try_line_plane_intersection_point(line, plane), Ok(Vec3::new(1.0, 1.0, 3.0)));

    let parallel = Line3D::new(Vec3::ZERO, Vec3::I);
    assert_eq!(try_line_plane_intersection_point(parallel, plane), Err(Error::DegenerateInput("line parallel to plane")));

    assert!(Ray3D::new(Vec3::ZERO, Vec3::K).intersect(plane));
    assert!(!plane.intersect(Ray3D::new(Vec3::ZERO, -Vec3::K)));
    assert!(Segment3D::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0)).intersect(plane));
    assert!(!Segment3D::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)).intersect(plane));

    assert_eq!(plane.intersect_ray(&Ray3D::new(Vec3::ZERO, Vec3::K)), Some(3.0));
    assert_eq!(plane.intersect_ray(&Ray3D::new(Vec3::ZERO, Vec3::I)), None);
}
