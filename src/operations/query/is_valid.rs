use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::error::TopologyError;
use crate::topology::{face_edges, EdgeKey, Polyhedron};

/// Checks that a mesh is a closed, connected 2-manifold.
///
/// The mesh must be non-empty, every face must have at least three in-range
/// corners, every undirected edge must be shared by exactly two faces, and
/// every face must be reachable from face 0 across shared edges. This is a
/// sufficient check, not an exhaustive one: non-orientable surfaces and
/// duplicate faces pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateTopology;

impl ValidateTopology {
    /// Creates a new `ValidateTopology` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the validation, returning `true` if the mesh is valid.
    #[must_use]
    pub fn execute(&self, mesh: &Polyhedron) -> bool {
        match self.check(mesh) {
            Ok(()) => true,
            Err(reason) => {
                debug!(%reason, "topology validation failed");
                false
            }
        }
    }

    /// Runs the same checks as [`execute`](Self::execute) but reports the
    /// first failure.
    ///
    /// # Errors
    ///
    /// Returns the [`TopologyError`] describing the first violated rule.
    pub fn check(&self, mesh: &Polyhedron) -> Result<(), TopologyError> {
        if mesh.vertex_count() == 0 || mesh.face_count() == 0 {
            return Err(TopologyError::Empty);
        }

        for (i, face) in mesh.faces().iter().enumerate() {
            if face.len() < 3 {
                return Err(TopologyError::FaceTooSmall {
                    face: i,
                    len: face.len(),
                });
            }
            if let Some(&index) = face.indices().iter().find(|&&v| v >= mesh.vertex_count()) {
                return Err(TopologyError::IndexOutOfRange {
                    face: i,
                    index,
                    vertex_count: mesh.vertex_count(),
                });
            }
        }

        let edge_faces = edge_face_map(mesh);

        // Scan in face order so the reported edge does not depend on hashing.
        for face in mesh.faces() {
            for key in face_edges(face.indices()) {
                let uses = edge_faces.get(&key).map_or(0, Vec::len);
                if uses != 2 {
                    return Err(TopologyError::NonManifoldEdge {
                        a: key.a,
                        b: key.b,
                        uses,
                    });
                }
            }
        }

        let reached = reachable_from_first(mesh, &edge_faces);
        if let Some(face) = reached.iter().position(|&r| !r) {
            return Err(TopologyError::Disconnected { face });
        }
        Ok(())
    }
}

/// Maps every undirected edge to the faces that use it, once per use.
fn edge_face_map(mesh: &Polyhedron) -> HashMap<EdgeKey, Vec<usize>> {
    let mut map: HashMap<EdgeKey, Vec<usize>> = HashMap::new();
    for (i, face) in mesh.faces().iter().enumerate() {
        for key in face_edges(face.indices()) {
            map.entry(key).or_default().push(i);
        }
    }
    map
}

/// Breadth-first search over shared edges starting at face 0.
fn reachable_from_first(mesh: &Polyhedron, edge_faces: &HashMap<EdgeKey, Vec<usize>>) -> Vec<bool> {
    let mut visited = vec![false; mesh.face_count()];
    let mut queue = VecDeque::from([0]);
    visited[0] = true;

    while let Some(current) = queue.pop_front() {
        for key in face_edges(mesh.faces()[current].indices()) {
            let Some(neighbors) = edge_faces.get(&key) else {
                continue;
            };
            for &neighbor in neighbors {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }
    visited
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeRegularPolyhedron;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn tetra_vertices() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
        ]
    }

    fn closed_tetra_faces() -> Vec<Vec<usize>> {
        vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]]
    }

    #[test]
    fn closed_tetrahedron_is_valid() {
        let mesh = Polyhedron::from_parts(tetra_vertices(), closed_tetra_faces());
        assert!(ValidateTopology::new().execute(&mesh));
        assert_eq!(ValidateTopology::new().check(&mesh), Ok(()));
    }

    #[test]
    fn every_edge_of_a_regular_solid_has_two_faces() {
        for count in [4, 6, 8, 12, 20] {
            let mesh = MakeRegularPolyhedron::new(count, 1.0).execute();
            let map = edge_face_map(&mesh);
            assert_eq!(map.len(), mesh.edge_count());
            assert!(map.values().all(|faces| faces.len() == 2));
        }
    }

    #[test]
    fn empty_mesh_is_invalid() {
        let mesh = Polyhedron::default();
        assert_eq!(ValidateTopology::new().check(&mesh), Err(TopologyError::Empty));
        assert!(!ValidateTopology::new().execute(&mesh));
    }

    #[test]
    fn open_mesh_reports_boundary_edge() {
        let mut faces = closed_tetra_faces();
        faces.pop();
        let mesh = Polyhedron::from_parts(tetra_vertices(), faces);
        let err = ValidateTopology::new().check(&mesh).unwrap_err();
        assert!(matches!(err, TopologyError::NonManifoldEdge { uses: 1, .. }));
    }

    #[test]
    fn edge_shared_by_three_faces_is_invalid() {
        let mut faces = closed_tetra_faces();
        faces.push(vec![0, 1, 2]);
        let mesh = Polyhedron::from_parts(tetra_vertices(), faces);
        let err = ValidateTopology::new().check(&mesh).unwrap_err();
        assert!(matches!(err, TopologyError::NonManifoldEdge { uses: 3, .. }));
    }

    #[test]
    fn out_of_range_index_is_invalid() {
        let mut faces = closed_tetra_faces();
        faces[2] = vec![1, 2, 7];
        let mesh = Polyhedron::from_parts(tetra_vertices(), faces);
        assert_eq!(
            ValidateTopology::new().check(&mesh),
            Err(TopologyError::IndexOutOfRange {
                face: 2,
                index: 7,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn short_face_is_invalid() {
        let mut faces = closed_tetra_faces();
        faces.push(vec![0, 1]);
        let mesh = Polyhedron::from_parts(tetra_vertices(), faces);
        assert_eq!(
            ValidateTopology::new().check(&mesh),
            Err(TopologyError::FaceTooSmall { face: 4, len: 2 })
        );
    }

    #[test]
    fn two_separate_tetrahedra_are_disconnected() {
        let mut vertices = tetra_vertices();
        vertices.extend(tetra_vertices().iter().map(|v| v + crate::math::Vector3::x() * 5.0));
        let mut faces = closed_tetra_faces();
        faces.extend(
            closed_tetra_faces()
                .into_iter()
                .map(|f| f.into_iter().map(|i| i + 4).collect::<Vec<_>>()),
        );
        let mesh = Polyhedron::from_parts(vertices, faces);
        assert_eq!(
            ValidateTopology::new().check(&mesh),
            Err(TopologyError::Disconnected { face: 4 })
        );
    }
}
