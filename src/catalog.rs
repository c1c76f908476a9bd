//! The fixed catalog of displayable shapes.
//!
//! Each entry is a static row: the geometry builder to call, its literal
//! parameters, the material colour, and the text shown on the detail
//! screen. Lookups by an unknown key simply find nothing.

use crate::color::Rgb;
use crate::geometry::{self, Mesh};
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKey {
    Cylinder,
    Cone,
    Cube,
    PentagonalPrism,
    HexagonalPrism,
    PentagrammicPrism,
    TriangularPrism,
    SquarePyramid,
    Dodecahedron,
    Torus,
    Icosahedron,
    Tetrahedron,
    Octahedron,
}

impl ShapeKey {
    /// Every key, in catalog order
    pub const ALL: [ShapeKey; 13] = [
        ShapeKey::Cylinder,
        ShapeKey::Cone,
        ShapeKey::Cube,
        ShapeKey::PentagonalPrism,
        ShapeKey::HexagonalPrism,
        ShapeKey::PentagrammicPrism,
        ShapeKey::TriangularPrism,
        ShapeKey::SquarePyramid,
        ShapeKey::Dodecahedron,
        ShapeKey::Torus,
        ShapeKey::Icosahedron,
        ShapeKey::Tetrahedron,
        ShapeKey::Octahedron,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeKey::Cylinder => "cylinder",
            ShapeKey::Cone => "cone",
            ShapeKey::Cube => "cube",
            ShapeKey::PentagonalPrism => "pentagonalPrism",
            ShapeKey::HexagonalPrism => "hexagonalPrism",
            ShapeKey::PentagrammicPrism => "pentagrammicPrism",
            ShapeKey::TriangularPrism => "triangularPrism",
            ShapeKey::SquarePyramid => "squarePyramid",
            ShapeKey::Dodecahedron => "dodecahedron",
            ShapeKey::Torus => "torus",
            ShapeKey::Icosahedron => "icosahedron",
            ShapeKey::Tetrahedron => "tetrahedron",
            ShapeKey::Octahedron => "octahedron",
        }
    }

    /// Position of this key in the catalog table
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static ShapeSpec {
        &CATALOG[self.index()]
    }
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown shape key `{0}`")]
pub struct UnknownShapeKey(pub String);

impl FromStr for ShapeKey {
    type Err = UnknownShapeKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownShapeKey(s.to_owned()))
    }
}

/// Which geometry builder an entry uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    /// `radius_top, radius_bottom, height, radial_segments, height_segments`
    Cylinder,
    /// `radius, height, radial_segments, height_segments`
    Cone,
    /// `width, height, depth`
    Box,
    /// `radius`
    Tetrahedron,
    /// `radius`
    Octahedron,
    /// `radius`
    Icosahedron,
    /// `radius`
    Dodecahedron,
    /// `radius, tube, radial_segments, tubular_segments`
    Torus,
}

/// Immutable geometry, material and label definition for one entry
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    pub key: ShapeKey,
    pub geometry_kind: GeometryKind,
    pub geometry_params: &'static [f64],
    pub color: Rgb,
    pub title: &'static str,
    pub description: &'static str,
}

impl ShapeSpec {
    fn param(&self, index: usize, default: f64) -> f64 {
        self.geometry_params.get(index).copied().unwrap_or(default)
    }

    fn segments(&self, index: usize, default: usize) -> usize {
        self.geometry_params
            .get(index)
            .map(|&n| n as usize)
            .unwrap_or(default)
    }

    /// Builds the triangle mesh from the literal parameters
    pub fn build_mesh(&self) -> Mesh {
        match self.geometry_kind {
            GeometryKind::Cylinder => geometry::cylinder(
                self.param(0, 1.0),
                self.param(1, 1.0),
                self.param(2, 1.0),
                self.segments(3, 8),
                self.segments(4, 1),
            ),
            GeometryKind::Cone => geometry::cone(
                self.param(0, 1.0),
                self.param(1, 1.0),
                self.segments(2, 8),
                self.segments(3, 1),
            ),
            GeometryKind::Box => {
                geometry::cuboid(self.param(0, 1.0), self.param(1, 1.0), self.param(2, 1.0))
            }
            GeometryKind::Tetrahedron => geometry::tetrahedron(self.param(0, 1.0)),
            GeometryKind::Octahedron => geometry::octahedron(self.param(0, 1.0)),
            GeometryKind::Icosahedron => geometry::icosahedron(self.param(0, 1.0)),
            GeometryKind::Dodecahedron => geometry::dodecahedron(self.param(0, 1.0)),
            GeometryKind::Torus => geometry::torus(
                self.param(0, 1.0),
                self.param(1, 0.4),
                self.segments(2, 12),
                self.segments(3, 48),
            ),
        }
    }
}

/// Indexed by `ShapeKey::index`
static CATALOG: [ShapeSpec; 13] = [
    ShapeSpec {
        key: ShapeKey::Cylinder,
        geometry_kind: GeometryKind::Cylinder,
        geometry_params: &[1.0, 1.0, 2.0, 64.0],
        color: Rgb::from_hex(0x87cefa),
        title: "Cylinder",
        description: "A cylindrical shape with circular bases.",
    },
    ShapeSpec {
        key: ShapeKey::Cone,
        geometry_kind: GeometryKind::Cone,
        geometry_params: &[1.0, 2.0, 64.0],
        color: Rgb::from_hex(0xffd700),
        title: "Cone",
        description: "A conical shape with a circular base tapering to a point.",
    },
    ShapeSpec {
        key: ShapeKey::Cube,
        geometry_kind: GeometryKind::Box,
        geometry_params: &[2.0, 2.0, 2.0],
        color: Rgb::from_hex(0x90ee90),
        title: "Cube",
        description: "A 3D shape with six equal square faces.",
    },
    ShapeSpec {
        key: ShapeKey::PentagonalPrism,
        geometry_kind: GeometryKind::Cylinder,
        geometry_params: &[1.0, 1.0, 2.0, 5.0, 64.0],
        color: Rgb::from_hex(0x9370db),
        title: "Pentagonal Prism",
        description: "A prism with pentagonal bases.",
    },
    ShapeSpec {
        key: ShapeKey::HexagonalPrism,
        geometry_kind: GeometryKind::Cylinder,
        geometry_params: &[1.0, 1.0, 2.0, 6.0, 64.0],
        color: Rgb::from_hex(0x8b008b),
        title: "Hexagonal Prism",
        description: "A prism with hexagonal bases.",
    },
    // Same frustum as the pentagonal prism; only the material and text differ.
    ShapeSpec {
        key: ShapeKey::PentagrammicPrism,
        geometry_kind: GeometryKind::Cylinder,
        geometry_params: &[1.0, 1.0, 2.0, 5.0, 64.0],
        color: Rgb::from_hex(0xdc143c),
        title: "Pentagrammic Prism",
        description: "A prism with pentagram bases.",
    },
    ShapeSpec {
        key: ShapeKey::TriangularPrism,
        geometry_kind: GeometryKind::Cylinder,
        geometry_params: &[1.0, 1.0, 2.0, 3.0, 64.0],
        color: Rgb::from_hex(0x4682b4),
        title: "Triangular Prism",
        description: "A prism with triangular bases.",
    },
    ShapeSpec {
        key: ShapeKey::SquarePyramid,
        geometry_kind: GeometryKind::Cone,
        geometry_params: &[1.5, 2.0, 4.0, 64.0],
        color: Rgb::from_hex(0xffd700),
        title: "Square Pyramid",
        description: "A pyramid with a square base.",
    },
    ShapeSpec {
        key: ShapeKey::Dodecahedron,
        geometry_kind: GeometryKind::Dodecahedron,
        geometry_params: &[1.5],
        color: Rgb::from_hex(0x8a2be2),
        title: "Dodecahedron",
        description: "A polyhedron with twelve pentagonal faces.",
    },
    ShapeSpec {
        key: ShapeKey::Torus,
        geometry_kind: GeometryKind::Torus,
        geometry_params: &[1.0, 0.4, 16.0, 64.0],
        color: Rgb::from_hex(0xff4500),
        title: "Torus",
        description: "A ring-shaped surface.",
    },
    ShapeSpec {
        key: ShapeKey::Icosahedron,
        geometry_kind: GeometryKind::Icosahedron,
        geometry_params: &[1.5],
        color: Rgb::from_hex(0x00ffff),
        title: "Icosahedron",
        description: "A polyhedron with twenty triangular faces.",
    },
    ShapeSpec {
        key: ShapeKey::Tetrahedron,
        geometry_kind: GeometryKind::Tetrahedron,
        geometry_params: &[1.5],
        color: Rgb::from_hex(0xff69b4),
        title: "Tetrahedron",
        description: "A polyhedron with four triangular faces.",
    },
    ShapeSpec {
        key: ShapeKey::Octahedron,
        geometry_kind: GeometryKind::Octahedron,
        geometry_params: &[1.5],
        color: Rgb::from_hex(0x40e0d0),
        title: "Octahedron",
        description: "A polyhedron with eight triangular faces.",
    },
];

/// Finds the entry for a string key. Unknown keys yield `None`.
pub fn lookup(key: &str) -> Option<&'static ShapeSpec> {
    key.parse::<ShapeKey>().ok().map(ShapeKey::spec)
}

/// All entries in catalog order
pub fn entries() -> impl Iterator<Item = &'static ShapeSpec> {
    CATALOG.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_key() {
        for key in ShapeKey::ALL {
            assert_eq!(key.spec().key, key);
        }
        assert_eq!(entries().count(), ShapeKey::ALL.len());
    }

    #[test]
    fn keys_round_trip_through_strings() {
        for key in ShapeKey::ALL {
            assert_eq!(key.as_str().parse::<ShapeKey>(), Ok(key));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("pentagonalPrism").is_some());
        assert!(lookup("PentagonalPrism").is_none());
        assert!(lookup("pentagonal-prism").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn every_entry_builds_a_bounded_mesh() {
        for spec in entries() {
            let mesh = spec.build_mesh();
            assert!(!mesh.is_empty(), "{} is empty", spec.key);
            let radius = mesh.bounding_radius();
            assert!(radius.is_finite() && radius > 0.5 && radius < 2.5, "{}: {radius}", spec.key);
            for triangle in &mesh.triangles {
                for normal in &triangle.normals {
                    let len = crate::math::length(normal);
                    assert!((len - 1.0).abs() < 1e-9, "{}: normal {normal:?}", spec.key);
                }
            }
        }
    }

    #[test]
    fn prisms_use_their_segment_counts() {
        // each side contributes 64 rows x 2 triangles plus one triangle per cap
        let sides = |key: ShapeKey| key.spec().build_mesh().len() / (2 * 64 + 2);
        assert_eq!(sides(ShapeKey::TriangularPrism), 3);
        assert_eq!(sides(ShapeKey::PentagonalPrism), 5);
        assert_eq!(sides(ShapeKey::HexagonalPrism), 6);
    }
}
