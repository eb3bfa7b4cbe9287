use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::math::polygon_3d::FaceFrame;
use crate::topology::Polyhedron;

use super::TriangleMesh;

/// Triangulates one polyhedron face.
///
/// The face is flattened into its tangent frame and triangulated with a
/// constrained Delaunay triangulation of its boundary, so concave faces come
/// out right. Corners keep their original 3D positions; every vertex carries
/// the face's Newell normal and its planar UV.
pub struct TessellateFace<'a> {
    mesh: &'a Polyhedron,
    face: usize,
}

impl<'a> TessellateFace<'a> {
    /// Creates a new `TessellateFace` operation.
    #[must_use]
    pub fn new(mesh: &'a Polyhedron, face: usize) -> Self {
        Self { mesh, face }
    }

    /// Executes the tessellation, returning a triangle mesh tagged with the
    /// face index.
    ///
    /// # Errors
    ///
    /// Returns an error if the face does not exist, has fewer than three
    /// corners, or its boundary crosses itself.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let face = self.mesh.face(self.face).ok_or_else(|| {
            TessellationError::Failed(format!("face {} does not exist", self.face))
        })?;
        let points = self.mesh.face_points(face);
        let frame = FaceFrame::new(&points).ok_or_else(|| {
            TessellationError::Failed(format!("face {} has fewer than 3 corners", self.face))
        })?;

        let outline: Vec<_> = frame
            .polygon
            .iter()
            .map(|p| SpadePoint2::new(p.x, p.y))
            .collect();

        let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint2<f64>>::new();
        let corner_of = insert_constraint_loop(&mut cdt, &outline)?;
        let interior_faces = classify_interior_faces(&cdt);

        let mut mesh = TriangleMesh::default();
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();

        for face_handle in cdt.inner_faces() {
            if !interior_faces.contains(&face_handle.fix().index()) {
                continue;
            }

            let mut tri_indices = [0u32; 3];
            for (i, vh) in face_handle.vertices().iter().enumerate() {
                let idx = vh.fix().index();
                let mesh_idx = if let Some(&existing) = vertex_map.get(&idx) {
                    existing
                } else {
                    let corner = corner_of.get(&idx).copied().ok_or_else(|| {
                        TessellationError::Failed("triangulation added a vertex".into())
                    })?;
                    let new_idx = mesh.vertices.len() as u32;
                    mesh.vertices.push(points[corner]);
                    mesh.normals.push(frame.normal);
                    mesh.uvs.push(frame.uv(&frame.polygon[corner]));
                    vertex_map.insert(idx, new_idx);
                    new_idx
                };
                tri_indices[i] = mesh_idx;
            }

            mesh.indices.push(tri_indices);
            mesh.face_ids.push(self.face);
        }

        Ok(mesh)
    }
}

/// Inserts a closed polygon as constraint edges.
///
/// Returns the map from triangulation vertex index to polygon corner. A
/// repeated position keeps its first corner.
fn insert_constraint_loop(
    cdt: &mut ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
    points: &[SpadePoint2<f64>],
) -> Result<HashMap<usize, usize>> {
    if points.len() < 3 {
        return Err(
            TessellationError::Failed("constraint loop needs at least 3 points".into()).into(),
        );
    }

    let mut handles = Vec::with_capacity(points.len());
    let mut corner_of = HashMap::with_capacity(points.len());
    for (corner, &pt) in points.iter().enumerate() {
        let h = cdt
            .insert(pt)
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        corner_of.entry(h.index()).or_insert(corner);
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed("face boundary crosses itself".into()).into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(corner_of)
}

/// Classifies which inner faces of the CDT are inside the polygon using flood-fill.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each time
/// a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(
    cdt: &ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        let Some(inner) = edge.rev().face().as_inner() else {
            continue;
        };
        let idx = inner.fix().index();
        if depth_map.contains_key(&idx) {
            continue;
        }
        let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
        depth_map.insert(idx, depth);
        if depth % 2 == 1 {
            interior.insert(idx);
        }
        queue.push_back((inner.fix(), depth));
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        let face = cdt.face(face_fix);
        for edge in face.adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let new_depth = if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                depth + 1
            } else {
                depth
            };
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}
