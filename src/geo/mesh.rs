// src/geo/mesh.rs
use ::geo::{Polygon, TriangulateEarcut};

/// Fill triangles for one polygon (indices into `points`).
#[derive(Debug, Clone, PartialEq)]
pub struct FillMesh {
    pub points: Vec<[f64; 2]>,
    pub triangles: Vec<[u32; 3]>,
}

impl FillMesh {
    /// Earcut triangulation with holes cut out. `None` when nothing is left to fill.
    pub fn from_polygon(polygon: &Polygon<f64>) -> Option<Self> {
        let raw = polygon.earcut_triangles_raw();

        let points: Vec<[f64; 2]> = raw.vertices
            .chunks_exact(2)
            .map(|xy| [xy[0], xy[1]])
            .collect();
        let triangles: Vec<[u32; 3]> = raw.triangle_indices
            .chunks_exact(3)
            .map(|t| [t[0] as u32, t[1] as u32, t[2] as u32])
            .collect();

        (!triangles.is_empty()).then_some(Self { points, triangles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::geo::{polygon, Area, Coord, Triangle};

    fn area(mesh: &FillMesh) -> f64 {
        let coord = |i: u32| {
            let [x, y] = mesh.points[i as usize];
            Coord { x, y }
        };
        mesh.triangles.iter()
            .map(|&[a, b, c]| Triangle::new(coord(a), coord(b), coord(c)).unsigned_area())
            .sum()
    }

    #[test]
    fn test_square() {
        let square = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)];
        let mesh = FillMesh::from_polygon(&square).unwrap();
        assert_eq!(mesh.triangles.len(), 2);
        assert!((area(&mesh) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_concave_clockwise_outline() {
        // An L shape, wound clockwise.
        let l_shape = polygon![
            (x: 0.0, y: 0.0), (x: 0.0, y: 3.0), (x: 1.0, y: 3.0),
            (x: 1.0, y: 1.0), (x: 3.0, y: 1.0), (x: 3.0, y: 0.0),
        ];
        let mesh = FillMesh::from_polygon(&l_shape).unwrap();
        assert!((area(&mesh) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_hole_is_not_filled() {
        let donut = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 3.0, y: 1.0), (x: 3.0, y: 3.0), (x: 1.0, y: 3.0)]],
        );
        let mesh = FillMesh::from_polygon(&donut).unwrap();
        assert!((area(&mesh) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_outline_fills_nothing() {
        let flat = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 2.0, y: 0.0)];
        assert!(FillMesh::from_polygon(&flat).map_or(true, |mesh| area(&mesh) < 1e-9));
    }
}
