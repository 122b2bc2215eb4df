use gemlab::mesh::{Cell, Mesh, Point};
use gemlab::shapes::GeoKind;

/// Holds sample meshes
pub struct SampleMeshes {}

impl SampleMeshes {
    /// Returns a rectangular strip with two Qua4 cells
    ///
    /// ```text
    /// 3------4------5
    /// |      |      |
    /// | [0]  | [1]  |   L = 2.0, H = 1.0
    /// | (1)  | (1)  |
    /// 0------1------2
    /// ```
    #[rustfmt::skip]
    pub fn strip_two_qua4() -> Mesh {
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, marker: 0, coords: vec![0.0, 0.0] },
                Point { id: 1, marker: 0, coords: vec![1.0, 0.0] },
                Point { id: 2, marker: 0, coords: vec![2.0, 0.0] },
                Point { id: 3, marker: 0, coords: vec![0.0, 1.0] },
                Point { id: 4, marker: 0, coords: vec![1.0, 1.0] },
                Point { id: 5, marker: 0, coords: vec![2.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Qua4, points: vec![0, 1, 4, 3] },
                Cell { id: 1, attribute: 1, kind: GeoKind::Qua4, points: vec![1, 2, 5, 4] },
            ],
        }
    }

    /// Returns a 2x2 square grid of Qua4 cells with one interior point
    ///
    /// ```text
    /// 6------7------8
    /// |      |      |
    /// | [2]  | [3]  |
    /// |      |      |
    /// 3------4------5   (point 4 is interior)
    /// |      |      |
    /// | [0]  | [1]  |
    /// |      |      |
    /// 0------1------2
    /// ```
    #[rustfmt::skip]
    pub fn square_four_qua4() -> Mesh {
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, marker: 0, coords: vec![0.0, 0.0] },
                Point { id: 1, marker: 0, coords: vec![1.0, 0.0] },
                Point { id: 2, marker: 0, coords: vec![2.0, 0.0] },
                Point { id: 3, marker: 0, coords: vec![0.0, 1.0] },
                Point { id: 4, marker: 0, coords: vec![1.0, 1.0] },
                Point { id: 5, marker: 0, coords: vec![2.0, 1.0] },
                Point { id: 6, marker: 0, coords: vec![0.0, 2.0] },
                Point { id: 7, marker: 0, coords: vec![1.0, 2.0] },
                Point { id: 8, marker: 0, coords: vec![2.0, 2.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Qua4, points: vec![0, 1, 4, 3] },
                Cell { id: 1, attribute: 1, kind: GeoKind::Qua4, points: vec![1, 2, 5, 4] },
                Cell { id: 2, attribute: 1, kind: GeoKind::Qua4, points: vec![3, 4, 7, 6] },
                Cell { id: 3, attribute: 1, kind: GeoKind::Qua4, points: vec![4, 5, 8, 7] },
            ],
        }
    }

    /// Returns a coarse quarter ring with two Qua4 cells
    ///
    /// ```text
    /// 5 ___
    /// |    '*._        rin = 1.0
    /// 4--__    *.      rout = 2.0
    /// |    '.  [1]\
    /// | [0]  2-----3
    /// |      |     |
    /// 0------1 - - # --> x
    /// ```
    #[rustfmt::skip]
    pub fn quarter_ring_two_qua4() -> Mesh {
        let (c, s) = (f64::sqrt(2.0) / 2.0, f64::sqrt(2.0) / 2.0);
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, marker: 0, coords: vec![1.0, 0.0] },
                Point { id: 1, marker: 0, coords: vec![2.0, 0.0] },
                Point { id: 2, marker: 0, coords: vec![c, s] },
                Point { id: 3, marker: 0, coords: vec![2.0 * c, 2.0 * s] },
                Point { id: 4, marker: 0, coords: vec![0.0, 1.0] },
                Point { id: 5, marker: 0, coords: vec![0.0, 2.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Qua4, points: vec![0, 1, 3, 2] },
                Cell { id: 1, attribute: 1, kind: GeoKind::Qua4, points: vec![2, 3, 5, 4] },
            ],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SampleMeshes;

    #[test]
    fn sample_meshes_are_consistent() {
        let mesh = SampleMeshes::strip_two_qua4();
        assert_eq!(mesh.points.len(), 6);
        assert_eq!(mesh.cells.len(), 2);
        assert_eq!(mesh.points[5].coords, &[2.0, 1.0]);

        let mesh = SampleMeshes::square_four_qua4();
        assert_eq!(mesh.points.len(), 9);
        assert_eq!(mesh.cells.len(), 4);
        assert_eq!(mesh.points[4].coords, &[1.0, 1.0]);

        let mesh = SampleMeshes::quarter_ring_two_qua4();
        assert_eq!(mesh.points.len(), 6);
        assert_eq!(mesh.cells.len(), 2);
        let sq2 = f64::sqrt(2.0);
        assert_eq!(mesh.points[3].coords, &[sq2, sq2]);
    }
}
