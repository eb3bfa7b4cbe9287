//! Hand-authored vertex and face tables for the regular solids.
//!
//! Tables are at base scale 0.5 (the icosahedron on the unit sphere) and are
//! rescaled by the builder. Winding is not guaranteed; the builder corrects it.

use std::cmp::Ordering;

use crate::math::polygon_3d::tangent_frame;
use crate::math::{centroid, Point3};

/// A vertex list plus faces as index loops.
pub(super) type Seed = (Vec<Point3>, Vec<Vec<usize>>);

const S: f64 = 0.5;

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

pub(super) fn tetrahedron() -> Seed {
    (
        vec![p(0.0, S, 0.0), p(-S, -S, S), p(S, -S, S), p(0.0, -S, -S)],
        vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 1], vec![1, 3, 2]],
    )
}

pub(super) fn cube() -> Seed {
    (
        vec![
            p(-S, -S, -S),
            p(S, -S, -S),
            p(S, S, -S),
            p(-S, S, -S),
            p(-S, -S, S),
            p(S, -S, S),
            p(S, S, S),
            p(-S, S, S),
        ],
        vec![
            vec![0, 1, 2, 3],
            vec![5, 4, 7, 6],
            vec![4, 0, 3, 7],
            vec![1, 5, 6, 2],
            vec![3, 2, 6, 7],
            vec![4, 5, 1, 0],
        ],
    )
}

pub(super) fn octahedron() -> Seed {
    (
        vec![
            p(0.0, S, 0.0),
            p(0.0, -S, 0.0),
            p(S, 0.0, 0.0),
            p(-S, 0.0, 0.0),
            p(0.0, 0.0, S),
            p(0.0, 0.0, -S),
        ],
        vec![
            vec![0, 2, 4],
            vec![0, 4, 3],
            vec![0, 3, 5],
            vec![0, 5, 2],
            vec![1, 4, 2],
            vec![1, 3, 4],
            vec![1, 5, 3],
            vec![1, 2, 5],
        ],
    )
}

/// Icosahedron from the three golden rectangles, projected onto the unit sphere.
pub(super) fn icosahedron() -> Seed {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let vertices = [
        p(-1.0, phi, 0.0),
        p(1.0, phi, 0.0),
        p(-1.0, -phi, 0.0),
        p(1.0, -phi, 0.0),
        p(0.0, -1.0, phi),
        p(0.0, 1.0, phi),
        p(0.0, -1.0, -phi),
        p(0.0, 1.0, -phi),
        p(phi, 0.0, -1.0),
        p(phi, 0.0, 1.0),
        p(-phi, 0.0, -1.0),
        p(-phi, 0.0, 1.0),
    ]
    .iter()
    .map(|v| Point3::from(v.coords.normalize()))
    .collect();

    let faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ]
    .iter()
    .map(|f| f.to_vec())
    .collect();

    (vertices, faces)
}

/// Dodecahedron as the dual of [`icosahedron`].
///
/// One vertex per icosahedron face (its centroid) and one face per
/// icosahedron vertex. A face's corners are the centroids of the five
/// incident triangles, sorted by angle in the tangent frame erected on the
/// vertex direction so the pentagon does not self-intersect.
pub(super) fn dodecahedron() -> Seed {
    let (ico_vertices, ico_faces) = icosahedron();

    let vertices: Vec<Point3> = ico_faces
        .iter()
        .map(|f| centroid(f.iter().map(|&i| &ico_vertices[i])))
        .collect();

    let faces = ico_vertices
        .iter()
        .enumerate()
        .map(|(vi, v)| {
            let normal = v.coords.normalize();
            let (tangent, bitangent) = tangent_frame(&normal);

            let mut ring: Vec<(f64, usize)> = ico_faces
                .iter()
                .enumerate()
                .filter(|(_, f)| f.contains(&vi))
                .map(|(fi, _)| {
                    let u = vertices[fi] - v;
                    (u.dot(&bitangent).atan2(u.dot(&tangent)), fi)
                })
                .collect();
            ring.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
            ring.into_iter().map(|(_, fi)| fi).collect()
        })
        .collect();

    (vertices, faces)
}

/// Square pyramid used for unsupported face counts.
pub(super) fn pyramid() -> Seed {
    (
        vec![
            p(0.0, 0.5, 0.0),
            p(-0.5, -0.5, -0.5),
            p(0.5, -0.5, -0.5),
            p(0.5, -0.5, 0.5),
            p(-0.5, -0.5, 0.5),
        ],
        vec![
            vec![0, 1, 2],
            vec![0, 2, 3],
            vec![0, 3, 4],
            vec![0, 4, 1],
            vec![1, 4, 3, 2],
        ],
    )
}
