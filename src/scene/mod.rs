mod collision_zone;
mod object;
mod texture;

pub use collision_zone::CollisionZone;
pub use object::Object;
pub use texture::{rgba_from_unit, FaceTexture, Rgba, TextureParams, MAX_TEXTURE_SIZE};

use slotmap::SlotMap;
use tracing::trace;

use crate::error::OperationError;
use crate::geometry::Ray;
use crate::math::{Point2, Point3};

slotmap::new_key_type! {
    /// Unique identifier for an object in a [`Scene`].
    pub struct ObjectId;
}

/// The nearest object under a picking ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Object that was hit.
    pub object: ObjectId,
    /// World distance along the ray.
    pub t: f64,
    /// Face index on that object.
    pub face: usize,
    /// Texture coordinate on that face.
    pub uv: Point2,
}

/// Arena owning every placed object.
///
/// Objects are addressed by generational [`ObjectId`]s, so an id of a
/// removed object never aliases a later one.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectId, Object>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object and returns its ID.
    pub fn insert(&mut self, object: Object) -> ObjectId {
        self.objects.insert(object)
    }

    /// Returns a reference to the object, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::ObjectNotFound`] for an unknown or removed id.
    pub fn object(&self, id: ObjectId) -> Result<&Object, OperationError> {
        self.objects.get(id).ok_or(OperationError::ObjectNotFound)
    }

    /// Returns a mutable reference to the object, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::ObjectNotFound`] for an unknown or removed id.
    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut Object, OperationError> {
        self.objects.get_mut(id).ok_or(OperationError::ObjectNotFound)
    }

    /// Removes an object, returning it if it was present.
    pub fn remove(&mut self, id: ObjectId) -> Option<Object> {
        self.objects.remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects.iter()
    }

    /// Finds the nearest face hit across all objects.
    ///
    /// Distances are compared in world units. On an exact tie the object
    /// visited first wins.
    #[must_use]
    pub fn pick(&self, ray: &Ray) -> Option<PickHit> {
        let hit = self
            .objects
            .iter()
            .filter_map(|(id, object)| {
                object.raycast(ray).map(|hit| PickHit {
                    object: id,
                    t: hit.t,
                    face: hit.face,
                    uv: hit.uv,
                })
            })
            .min_by(|a, b| a.t.total_cmp(&b.t));
        trace!(?hit, "pick");
        hit
    }

    /// Ids of every object whose collision zone contains `point`.
    #[must_use]
    pub fn objects_containing(&self, point: &Point3) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|(_, object)| object.is_point_inside(point))
            .map(|(id, _)| id)
            .collect()
    }
}
