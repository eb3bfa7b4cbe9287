#![allow(clippy::unwrap_used)]

use std::sync::Once;

use approx::assert_relative_eq;
use polyform::geometry::{Primitive, Ray};
use polyform::math::{Matrix4, Point2, Point3, Vector3};
use polyform::operations::query::ValidateTopology;
use polyform::scene::{Object, Scene, TextureParams};
use polyform::tessellation::{TessellatePrimitive, TessellationParams};
use tracing_subscriber::EnvFilter;

const VIEWPORT: (f64, f64) = (800.0, 600.0);

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn camera() -> (Matrix4, Matrix4) {
    let view = Matrix4::look_at_rh(&Point3::new(0.0, 0.0, 5.0), &Point3::origin(), &Vector3::y());
    let projection = Matrix4::new_perspective(VIEWPORT.0 / VIEWPORT.1, 1.0, 0.1, 100.0);
    (view, projection)
}

/// Window pixel at which `point` appears.
fn project(point: &Point3, view: &Matrix4, projection: &Matrix4) -> Point2 {
    let clip = projection * view * point.to_homogeneous();
    let (x, y) = (clip.x / clip.w, clip.y / clip.w);
    Point2::new((x + 1.0) * 0.5 * VIEWPORT.0, (1.0 - y) * 0.5 * VIEWPORT.1)
}

fn placed(primitive: Primitive, at: Vector3) -> Object {
    let mut object = Object::with_primitive(primitive, TextureParams { size: 8 }).unwrap();
    object.set_transform(Matrix4::new_translation(&at));
    object
}

#[test]
fn cursor_picks_the_object_under_it() {
    init_tracing();
    let (view, projection) = camera();

    let mut scene = Scene::new();
    let cube = scene.insert(Object::default());
    let sphere = scene.insert(placed(Primitive::Sphere, Vector3::new(-1.5, 0.0, 0.0)));
    let mut solid = Object::new(TextureParams { size: 8 }).unwrap();
    solid.create_dodecahedron();
    solid.set_transform(Matrix4::new_translation(&Vector3::new(1.5, 0.0, 0.0)));
    let dodecahedron = scene.insert(solid);

    // Screen center looks straight down -Z onto the cube's +Z face.
    let ray = Ray::from_screen(Point2::new(400.0, 300.0), VIEWPORT, &view, &projection).unwrap();
    let hit = scene.pick(&ray).unwrap();
    assert_eq!(hit.object, cube);
    assert_eq!(hit.face, 4);
    assert_relative_eq!(hit.t, 4.4, epsilon = 1e-6);
    assert_relative_eq!(hit.uv, Point2::new(0.5, 0.5), epsilon = 1e-6);

    for (target, center) in [
        (sphere, Point3::new(-1.5, 0.0, 0.0)),
        (dodecahedron, Point3::new(1.5, 0.0, 0.0)),
    ] {
        let cursor = project(&center, &view, &projection);
        let ray = Ray::from_screen(cursor, VIEWPORT, &view, &projection).unwrap();
        let hit = scene.pick(&ray).unwrap();
        assert_eq!(hit.object, target);
        assert!((0.0..=1.0).contains(&hit.uv.x) && (0.0..=1.0).contains(&hit.uv.y));

        let object = scene.object(target).unwrap();
        assert!(hit.face < object.primitive().face_count());
    }
}

#[test]
fn painting_the_picked_texel() {
    init_tracing();
    let mut scene = Scene::new();
    let id = scene.insert(Object::default());

    let ray = Ray::new(Point3::new(0.25, -0.25, -3.0), Vector3::z()).unwrap();
    let hit = scene.pick(&ray).unwrap();
    assert_eq!(hit.face, 5);

    let texture = scene.object_mut(id).unwrap().texture_mut(hit.face).unwrap();
    let (x, y) = texture.texel(&hit.uv);
    assert!(x < 8 && y < 8);
}

#[test]
fn moving_objects_updates_picking_and_containment() {
    init_tracing();
    let mut scene = Scene::new();
    let id = scene.insert(placed(Primitive::Cylinder, Vector3::zeros()));
    let probe = Point3::new(0.0, 0.0, 0.5);
    assert_eq!(scene.objects_containing(&probe), vec![id]);

    scene
        .object_mut(id)
        .unwrap()
        .set_transform(Matrix4::new_translation(&Vector3::new(0.0, 10.0, 0.0)));
    assert!(scene.objects_containing(&probe).is_empty());

    let ray = Ray::new(Point3::new(0.0, 5.0, 0.5), Vector3::y()).unwrap();
    let hit = scene.pick(&ray).unwrap();
    assert_eq!(hit.object, id);
    assert_eq!(hit.face, 0);
    assert_relative_eq!(hit.t, 4.5, epsilon = 1e-9);
}

#[test]
fn regular_solids_survive_the_whole_pipeline() {
    init_tracing();
    let tessellator = TessellatePrimitive::new(TessellationParams::default());

    for create in [
        Object::create_tetrahedron,
        Object::create_octahedron,
        Object::create_dodecahedron,
        Object::create_icosahedron,
    ] {
        let mut object = Object::default();
        create(&mut object);
        let mesh = object.primitive().as_polyhedron().unwrap();
        assert!(ValidateTopology::new().execute(mesh));
        assert!(mesh.is_convex());

        let triangles = tessellator.execute(object.primitive()).unwrap();
        let faces = mesh.face_count();
        assert!(triangles.face_ids.iter().all(|&face| face < faces));
        assert_eq!(triangles.triangle_count(), triangles.face_ids.len());

        // A ray through the center from outside always lands on a face.
        let hit = object
            .raycast_face(&Point3::new(0.1, 0.05, -3.0), &Vector3::z())
            .unwrap();
        assert!(hit.face < faces);
        assert_eq!(object.textures().len(), faces);
    }
}
