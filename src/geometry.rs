//! Triangle meshes for the catalog primitives.
//!
//! Every builder produces a closed mesh centred on the origin with
//! outward-facing winding. Curved surfaces (cylinder sides, torus) carry
//! smooth per-vertex normals; flat faces repeat the face normal.

use crate::math::{calculate_normal, cross, dot, length, normalize, subtract};
use std::f64::consts::TAU;

/// Triangles with less area than this are dropped when building a mesh
const DEGENERATE_AREA: f64 = 1e-12;

/// A single triangle with per-vertex normals
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub positions: [[f64; 3]; 3],
    pub normals: [[f64; 3]; 3],
}

impl Triangle {
    pub fn face_normal(&self) -> [f64; 3] {
        let [a, b, c] = &self.positions;
        calculate_normal(a, b, c)
    }
}

/// A triangle list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Largest distance of any vertex from the origin
    pub fn bounding_radius(&self) -> f64 {
        self.triangles
            .iter()
            .flat_map(|t| t.positions.iter())
            .map(length)
            .fold(0.0, f64::max)
    }

    /// Adds a triangle, flipping its winding if needed so the face normal
    /// agrees with the supplied vertex normals. Degenerate triangles are
    /// skipped.
    fn push(&mut self, positions: [[f64; 3]; 3], normals: [[f64; 3]; 3]) {
        let [a, b, c] = &positions;
        let area_vector = cross(&subtract(b, a), &subtract(c, a));
        if length(&area_vector) < DEGENERATE_AREA {
            return;
        }
        let hint = [
            normals[0][0] + normals[1][0] + normals[2][0],
            normals[0][1] + normals[1][1] + normals[2][1],
            normals[0][2] + normals[1][2] + normals[2][2],
        ];
        if dot(&area_vector, &hint) < 0.0 {
            self.triangles.push(Triangle {
                positions: [positions[0], positions[2], positions[1]],
                normals: [normals[0], normals[2], normals[1]],
            });
        } else {
            self.triangles.push(Triangle { positions, normals });
        }
    }

    /// Adds a flat triangle whose outward side faces away from the origin
    fn push_flat(&mut self, positions: [[f64; 3]; 3]) {
        let [a, b, c] = &positions;
        let centroid = [
            (a[0] + b[0] + c[0]) / 3.0,
            (a[1] + b[1] + c[1]) / 3.0,
            (a[2] + b[2] + c[2]) / 3.0,
        ];
        let mut normal = calculate_normal(a, b, c);
        if dot(&normal, &centroid) < 0.0 {
            normal = [-normal[0], -normal[1], -normal[2]];
        }
        self.push(positions, [normal; 3]);
    }
}

/// A capped frustum along the Y axis.
///
/// `radius_top` of zero gives a cone. Theta starts on +Z and sweeps
/// towards +X.
pub fn cylinder(
    radius_top: f64,
    radius_bottom: f64,
    height: f64,
    radial_segments: usize,
    height_segments: usize,
) -> Mesh {
    let radial_segments = radial_segments.max(3);
    let height_segments = height_segments.max(1);
    let half_height = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;

    // rows run top to bottom, columns around the axis (last column repeats the first)
    let mut rows = Vec::with_capacity(height_segments + 1);
    for y in 0..=height_segments {
        let v = y as f64 / height_segments as f64;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        let row: Vec<([f64; 3], [f64; 3])> = (0..=radial_segments)
            .map(|x| {
                let theta = x as f64 / radial_segments as f64 * TAU;
                let (sin_t, cos_t) = theta.sin_cos();
                let position = [radius * sin_t, -v * height + half_height, radius * cos_t];
                let normal = normalize(&[sin_t, slope, cos_t]);
                (position, normal)
            })
            .collect();
        rows.push(row);
    }

    let mut mesh = Mesh::new();
    for y in 0..height_segments {
        for x in 0..radial_segments {
            let a = rows[y][x];
            let b = rows[y + 1][x];
            let c = rows[y + 1][x + 1];
            let d = rows[y][x + 1];
            mesh.push([a.0, b.0, d.0], [a.1, b.1, d.1]);
            mesh.push([b.0, c.0, d.0], [b.1, c.1, d.1]);
        }
    }

    for (radius, y, sign) in [
        (radius_top, half_height, 1.0),
        (radius_bottom, -half_height, -1.0),
    ] {
        if radius <= 0.0 {
            continue;
        }
        let center = [0.0, y, 0.0];
        let normal = [0.0, sign, 0.0];
        for x in 0..radial_segments {
            let point = |i: usize| {
                let theta = i as f64 / radial_segments as f64 * TAU;
                let (sin_t, cos_t) = theta.sin_cos();
                [radius * sin_t, y, radius * cos_t]
            };
            mesh.push([center, point(x), point(x + 1)], [normal; 3]);
        }
    }

    mesh
}

/// A cone with its apex at +Y and a capped base at -Y
pub fn cone(radius: f64, height: f64, radial_segments: usize, height_segments: usize) -> Mesh {
    cylinder(0.0, radius, height, radial_segments, height_segments)
}

/// An axis-aligned box centred on the origin
pub fn cuboid(width: f64, height: f64, depth: f64) -> Mesh {
    let (w, h, d) = (width / 2.0, height / 2.0, depth / 2.0);
    // (face centre, u, v) with u x v pointing outwards
    let faces = [
        ([w, 0.0, 0.0], [0.0, h, 0.0], [0.0, 0.0, d]),
        ([-w, 0.0, 0.0], [0.0, 0.0, d], [0.0, h, 0.0]),
        ([0.0, h, 0.0], [0.0, 0.0, d], [w, 0.0, 0.0]),
        ([0.0, -h, 0.0], [w, 0.0, 0.0], [0.0, 0.0, d]),
        ([0.0, 0.0, d], [w, 0.0, 0.0], [0.0, h, 0.0]),
        ([0.0, 0.0, -d], [0.0, h, 0.0], [w, 0.0, 0.0]),
    ];

    let mut mesh = Mesh::new();
    for (c, u, v) in faces {
        let corner = |su: f64, sv: f64| {
            [
                c[0] + su * u[0] + sv * v[0],
                c[1] + su * u[1] + sv * v[1],
                c[2] + su * u[2] + sv * v[2],
            ]
        };
        let (p0, p1, p2, p3) = (
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        );
        mesh.push_flat([p0, p1, p2]);
        mesh.push_flat([p0, p2, p3]);
    }
    mesh
}

/// Projects `vertices` onto the sphere of `radius` and emits the indexed
/// triangles as flat faces.
fn polyhedron(vertices: &[[f64; 3]], indices: &[[usize; 3]], radius: f64) -> Mesh {
    let projected: Vec<[f64; 3]> = vertices
        .iter()
        .map(|v| {
            let n = normalize(v);
            [n[0] * radius, n[1] * radius, n[2] * radius]
        })
        .collect();

    let mut mesh = Mesh::new();
    for &[a, b, c] in indices {
        mesh.push_flat([projected[a], projected[b], projected[c]]);
    }
    mesh
}

pub fn tetrahedron(radius: f64) -> Mesh {
    let vertices = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];
    let indices = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    polyhedron(&vertices, &indices, radius)
}

pub fn octahedron(radius: f64) -> Mesh {
    let vertices = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    let indices = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    polyhedron(&vertices, &indices, radius)
}

pub fn icosahedron(radius: f64) -> Mesh {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let vertices = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let indices = [
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
    ];
    polyhedron(&vertices, &indices, radius)
}

/// Twelve pentagons, each fanned into three triangles
pub fn dodecahedron(radius: f64) -> Mesh {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let r = 1.0 / t;
    let vertices = [
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        [0.0, -r, -t],
        [0.0, -r, t],
        [0.0, r, -t],
        [0.0, r, t],
        [-r, -t, 0.0],
        [-r, t, 0.0],
        [r, -t, 0.0],
        [r, t, 0.0],
        [-t, 0.0, -r],
        [t, 0.0, -r],
        [-t, 0.0, r],
        [t, 0.0, r],
    ];
    let indices = [
        [3, 11, 7],
        [3, 7, 15],
        [3, 15, 13],
        [7, 19, 17],
        [7, 17, 6],
        [7, 6, 15],
        [17, 4, 8],
        [17, 8, 10],
        [17, 10, 6],
        [8, 0, 16],
        [8, 16, 2],
        [8, 2, 10],
        [0, 12, 1],
        [0, 1, 18],
        [0, 18, 16],
        [6, 10, 2],
        [6, 2, 13],
        [6, 13, 15],
        [2, 16, 18],
        [2, 18, 3],
        [2, 3, 13],
        [18, 1, 9],
        [18, 9, 11],
        [18, 11, 3],
        [4, 14, 12],
        [4, 12, 0],
        [4, 0, 8],
        [11, 9, 5],
        [11, 5, 19],
        [11, 19, 7],
        [19, 5, 14],
        [19, 14, 4],
        [19, 4, 17],
        [1, 12, 14],
        [1, 14, 5],
        [1, 5, 9],
    ];
    polyhedron(&vertices, &indices, radius)
}

/// A ring in the XY plane. `radius` is from the centre to the middle of the
/// tube.
pub fn torus(radius: f64, tube: f64, radial_segments: usize, tubular_segments: usize) -> Mesh {
    let radial_segments = radial_segments.max(3);
    let tubular_segments = tubular_segments.max(3);

    let mut grid = Vec::with_capacity(radial_segments + 1);
    for j in 0..=radial_segments {
        let v = j as f64 / radial_segments as f64 * TAU;
        let row: Vec<([f64; 3], [f64; 3])> = (0..=tubular_segments)
            .map(|i| {
                let u = i as f64 / tubular_segments as f64 * TAU;
                let ring = radius + tube * v.cos();
                let position = [ring * u.cos(), ring * u.sin(), tube * v.sin()];
                let center = [radius * u.cos(), radius * u.sin(), 0.0];
                (position, normalize(&subtract(&position, &center)))
            })
            .collect();
        grid.push(row);
    }

    let mut mesh = Mesh::new();
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = grid[j][i - 1];
            let b = grid[j - 1][i - 1];
            let c = grid[j - 1][i];
            let d = grid[j][i];
            mesh.push([a.0, b.0, d.0], [a.1, b.1, d.1]);
            mesh.push([b.0, c.0, d.0], [b.1, c.1, d.1]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward(mesh: &Mesh) {
        for triangle in &mesh.triangles {
            let n = triangle.face_normal();
            let [a, b, c] = &triangle.positions;
            let centroid = [
                (a[0] + b[0] + c[0]) / 3.0,
                (a[1] + b[1] + c[1]) / 3.0,
                (a[2] + b[2] + c[2]) / 3.0,
            ];
            assert!(dot(&n, &centroid) > -1e-9, "inward face {triangle:?}");
        }
    }

    #[test]
    fn cube_has_twelve_outward_triangles() {
        let mesh = cuboid(2.0, 2.0, 2.0);
        assert_eq!(mesh.len(), 12);
        assert_outward(&mesh);
        assert!((mesh.bounding_radius() - 3.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn prism_triangle_count() {
        // 5 sides x 64 rows x 2, plus two caps of 5
        let mesh = cylinder(1.0, 1.0, 2.0, 5, 64);
        assert_eq!(mesh.len(), 5 * 64 * 2 + 10);
        assert_outward(&mesh);
    }

    #[test]
    fn cone_drops_collapsed_apex_triangles() {
        let mesh = cone(1.0, 2.0, 8, 1);
        // one side triangle per segment survives, plus the base cap
        assert_eq!(mesh.len(), 8 + 8);
        assert_outward(&mesh);
    }

    #[test]
    fn platonic_solids_sit_on_their_sphere() {
        for (mesh, faces) in [
            (tetrahedron(1.5), 4),
            (octahedron(1.5), 8),
            (icosahedron(1.5), 20),
            (dodecahedron(1.5), 36),
        ] {
            assert_eq!(mesh.len(), faces);
            assert_outward(&mesh);
            for p in mesh.triangles.iter().flat_map(|t| t.positions.iter()) {
                assert!((length(p) - 1.5).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn torus_normals_point_away_from_tube_centre() {
        let mesh = torus(1.0, 0.4, 16, 64);
        assert_eq!(mesh.len(), 16 * 64 * 2);
        assert!((mesh.bounding_radius() - 1.4).abs() < 1e-9);
        for triangle in &mesh.triangles {
            let vertex_normal = triangle.normals[0];
            assert!(dot(&triangle.face_normal(), &vertex_normal) > 0.0);
        }
    }
}
