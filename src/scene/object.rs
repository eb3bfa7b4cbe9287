use tracing::debug;

use super::collision_zone::CollisionZone;
use super::texture::{FaceTexture, TextureParams};
use crate::error::{OperationError, Result};
use crate::geometry::{Primitive, Ray};
use crate::math::{transform_point, Matrix4, Point3, Vector3};
use crate::operations::creation::{MakeCustomPolyhedron, MakeRegularPolyhedron};
use crate::operations::query::{FaceHit, RaycastPrimitive};
use crate::topology::{MeshLimits, Polyhedron};

/// Circumradius of the regular solids created through an object.
const SOLID_RADIUS: f64 = 0.5;

/// A placeable shape: one primitive, its world transform, a collision zone
/// and one texture per face.
///
/// The texture list always has one entry per face of the current primitive.
#[derive(Debug, Clone)]
pub struct Object {
    primitive: Primitive,
    transform: Matrix4,
    collision_zone: CollisionZone,
    textures: Vec<FaceTexture>,
    texture_params: TextureParams,
}

impl Default for Object {
    fn default() -> Self {
        Self::build(Primitive::Cube, TextureParams::default())
    }
}

impl Object {
    /// Creates an untransformed cube.
    ///
    /// # Errors
    ///
    /// Returns an error if `texture_params` exceeds the texture size limit.
    pub fn new(texture_params: TextureParams) -> Result<Self> {
        Self::with_primitive(Primitive::Cube, texture_params)
    }

    /// Creates an untransformed object of the given primitive.
    ///
    /// # Errors
    ///
    /// Returns an error if `texture_params` exceeds the texture size limit.
    pub fn with_primitive(primitive: Primitive, texture_params: TextureParams) -> Result<Self> {
        texture_params.check()?;
        Ok(Self::build(primitive, texture_params))
    }

    fn build(primitive: Primitive, texture_params: TextureParams) -> Self {
        let transform = Matrix4::identity();
        let mut object = Self {
            collision_zone: CollisionZone::new(&primitive, &transform),
            primitive,
            transform,
            textures: Vec::new(),
            texture_params,
        };
        object.regenerate_textures();
        object
    }

    #[must_use]
    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    /// Local-to-world transform.
    #[must_use]
    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    #[must_use]
    pub fn collision_zone(&self) -> &CollisionZone {
        &self.collision_zone
    }

    /// Face textures, indexed like the primitive's faces.
    #[must_use]
    pub fn textures(&self) -> &[FaceTexture] {
        &self.textures
    }

    /// Texture of face `face`, if the face exists.
    #[must_use]
    pub fn texture_mut(&mut self, face: usize) -> Option<&mut FaceTexture> {
        self.textures.get_mut(face)
    }

    /// Sets the world transform and refreshes the collision zone.
    pub fn set_transform(&mut self, transform: Matrix4) {
        self.transform = transform;
        self.collision_zone.update(&self.primitive, &self.transform);
    }

    /// Replaces the geometry wholesale. Face textures are reset to defaults.
    pub fn set_primitive(&mut self, primitive: Primitive) {
        debug!(
            from = self.primitive.name(),
            to = primitive.name(),
            faces = primitive.face_count(),
            "replacing object geometry"
        );
        self.primitive = primitive;
        self.collision_zone.update(&self.primitive, &self.transform);
        self.regenerate_textures();
    }

    /// Replaces the geometry with a polyhedron.
    pub fn set_polyhedron(&mut self, mesh: Polyhedron) {
        self.set_primitive(Primitive::Polyhedron(mesh));
    }

    pub fn create_tetrahedron(&mut self) {
        self.set_polyhedron(MakeRegularPolyhedron::new(4, SOLID_RADIUS).execute());
    }

    pub fn create_octahedron(&mut self) {
        self.set_polyhedron(MakeRegularPolyhedron::new(8, SOLID_RADIUS).execute());
    }

    pub fn create_dodecahedron(&mut self) {
        self.set_polyhedron(MakeRegularPolyhedron::new(12, SOLID_RADIUS).execute());
    }

    pub fn create_icosahedron(&mut self) {
        self.set_polyhedron(MakeRegularPolyhedron::new(20, SOLID_RADIUS).execute());
    }

    /// Replaces the geometry with a caller-built polyhedron.
    ///
    /// # Errors
    ///
    /// Returns an error if the faces exceed `limits` or reference missing
    /// vertices. The object is unchanged in that case.
    pub fn create_custom_polyhedron(
        &mut self,
        vertices: Vec<Point3>,
        faces: Vec<Vec<usize>>,
        limits: &MeshLimits,
    ) -> Result<()> {
        let mesh = MakeCustomPolyhedron::new(vertices, faces).execute(limits)?;
        self.set_polyhedron(mesh);
        Ok(())
    }

    /// Appends a face to a polyhedron object and gives it a default texture.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not a polyhedron or the face is
    /// rejected by [`Polyhedron::add_face`].
    pub fn add_face(&mut self, indices: Vec<usize>, limits: &MeshLimits) -> Result<usize> {
        let kind = self.primitive.name();
        let Primitive::Polyhedron(mesh) = &mut self.primitive else {
            let reason = format!("cannot add a face to a {kind}");
            return Err(OperationError::InvalidInput(reason).into());
        };
        let face = mesh.add_face(indices, limits)?;
        self.textures
            .push(FaceTexture::for_face(face, &self.texture_params));
        Ok(face)
    }

    /// Casts a world-space ray at the object.
    ///
    /// The ray is mapped into local space, cast against the primitive, and the
    /// hit is reported back in world space: `t` is the world distance from
    /// `origin` and `point` the world hit position. Returns `None` on a miss,
    /// a zero direction, or a singular transform.
    #[must_use]
    pub fn raycast_face(&self, origin: &Point3, direction: &Vector3) -> Option<FaceHit> {
        let ray = Ray::new(*origin, *direction).ok()?;
        self.raycast(&ray)
    }

    /// [`raycast_face`](Self::raycast_face) for an existing ray.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> Option<FaceHit> {
        let local = ray.to_local(&self.transform)?;
        let hit = RaycastPrimitive::new(&self.primitive).execute(&local)?;
        let point = transform_point(&self.transform, &hit.point);
        Some(FaceHit {
            t: (point - ray.origin()).dot(ray.direction()),
            point,
            ..hit
        })
    }

    /// Coarse containment test against the collision zone.
    #[must_use]
    pub fn is_point_inside(&self, point: &Point3) -> bool {
        self.collision_zone.is_point_inside(point)
    }

    fn regenerate_textures(&mut self) {
        self.textures = (0..self.primitive.face_count())
            .map(|face| FaceTexture::for_face(face, &self.texture_params))
            .collect();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{PolyformError, TopologyError};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn starts_as_cube_with_six_textures() {
        let object = Object::default();
        assert_eq!(object.primitive(), &Primitive::Cube);
        assert_eq!(object.textures().len(), 6);
        assert_eq!(object.textures()[0].size(), 64);
    }

    #[test]
    fn texture_size_is_checked_before_building() {
        let object = Object::new(TextureParams { size: 16 }).unwrap();
        assert_eq!(object.textures()[0].size(), 16);

        let err = Object::with_primitive(Primitive::Sphere, TextureParams { size: 1 << 33 })
            .unwrap_err();
        assert!(matches!(
            err,
            PolyformError::Operation(OperationError::LimitExceeded { .. })
        ));
    }

    #[test]
    fn creating_a_solid_regenerates_textures() {
        let mut object = Object::default();
        object.create_dodecahedron();
        assert_eq!(object.textures().len(), 12);
        object.create_icosahedron();
        assert_eq!(object.textures().len(), 20);
        object.create_tetrahedron();
        assert_eq!(object.textures().len(), 4);
        object.create_octahedron();
        assert_eq!(object.textures().len(), 8);
        object.set_primitive(Primitive::Cylinder);
        assert_eq!(object.textures().len(), 2);
    }

    #[test]
    fn replacing_geometry_resets_painted_faces() {
        let mut object = Object::default();
        object.texture_mut(0).unwrap().fill([9, 9, 9, 255]);
        object.set_primitive(Primitive::Cube);
        assert_eq!(object.textures()[0].pixel(0, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn unit_cube_ray_from_below() {
        let object = Object::default();
        let hit = object
            .raycast_face(&p(0.0, 0.0, -2.0), &Vector3::new(0.0, 0.0, 1.0))
            .unwrap();
        assert_relative_eq!(hit.t, 1.5, epsilon = 1e-12);
        assert_eq!(hit.face, 5);
        assert_relative_eq!(hit.uv.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(hit.uv.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn hit_distance_is_in_world_units() {
        let mut object = Object::default();
        object.set_transform(
            Matrix4::new_translation(&Vector3::new(0.0, 0.0, 5.0)) * Matrix4::new_scaling(4.0),
        );
        let hit = object
            .raycast_face(&Point3::origin(), &Vector3::z())
            .unwrap();
        // Scaled cube spans z in [3, 7].
        assert_relative_eq!(hit.t, 3.0, epsilon = 1e-9);
        assert_relative_eq!(hit.point, p(0.0, 0.0, 3.0), epsilon = 1e-9);
        assert_eq!(hit.face, 5);
    }

    #[test]
    fn singular_transform_never_hits() {
        let mut object = Object::default();
        object.set_transform(Matrix4::zeros());
        assert!(object.raycast_face(&p(0.0, 0.0, -2.0), &Vector3::z()).is_none());
    }

    #[test]
    fn set_transform_moves_collision_zone() {
        let mut object = Object::default();
        assert!(object.is_point_inside(&Point3::origin()));
        object.set_transform(Matrix4::new_translation(&Vector3::new(3.0, 0.0, 0.0)));
        assert!(!object.is_point_inside(&Point3::origin()));
        assert!(object.is_point_inside(&p(3.2, 0.1, -0.4)));
    }

    #[test]
    fn custom_polyhedron_errors_leave_object_untouched() {
        let mut object = Object::default();
        let err = object
            .create_custom_polyhedron(
                vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
                vec![vec![0, 1, 5]],
                &MeshLimits::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            PolyformError::Topology(TopologyError::IndexOutOfRange { .. })
        ));
        assert_eq!(object.primitive(), &Primitive::Cube);
    }

    #[test]
    fn add_face_grows_texture_list() {
        let mut object = Object::default();
        object
            .create_custom_polyhedron(
                vec![
                    p(0.0, 0.0, 0.0),
                    p(1.0, 0.0, 0.0),
                    p(0.0, 1.0, 0.0),
                    p(0.0, 0.0, 1.0),
                ],
                vec![vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]],
                &MeshLimits::default(),
            )
            .unwrap();
        assert_eq!(object.textures().len(), 3);

        let face = object.add_face(vec![0, 2, 1], &MeshLimits::default()).unwrap();
        assert_eq!(face, 3);
        assert_eq!(object.textures().len(), 4);
        assert_eq!(object.primitive().face_count(), 4);
    }

    #[test]
    fn add_face_needs_a_polyhedron() {
        let mut object = Object::default();
        assert!(object.add_face(vec![0, 1, 2], &MeshLimits::default()).is_err());
    }
}
