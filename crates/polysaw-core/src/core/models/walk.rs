use super::lattice::LatticePoint;
use nalgebra::Point3;
use std::collections::HashSet;

/// A self-avoiding walk on the simple cubic lattice, rooted at the origin.
///
/// A `Walk` is only constructed by the growth engine once every site has been placed, so
/// callers receive it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    positions: Vec<LatticePoint>,
}

impl Walk {
    pub(crate) fn from_positions(positions: Vec<LatticePoint>) -> Self {
        debug_assert!(!positions.is_empty(), "a walk always contains its origin");
        Self { positions }
    }

    /// Number of sites (monomers), not bonds.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[LatticePoint] {
        &self.positions
    }

    pub fn start(&self) -> LatticePoint {
        self.positions.first().copied().unwrap_or(LatticePoint::ORIGIN)
    }

    pub fn end(&self) -> LatticePoint {
        self.positions.last().copied().unwrap_or(LatticePoint::ORIGIN)
    }

    pub fn points(&self) -> Vec<Point3<f64>> {
        self.positions.iter().map(LatticePoint::to_point).collect()
    }

    /// Checks the structural invariants: at least one site, rooted at the origin, every
    /// bond is a single lattice step, and no site is visited twice.
    pub fn is_valid_saw(&self) -> bool {
        if self.positions.first() != Some(&LatticePoint::ORIGIN) {
            return false;
        }
        let connected = self
            .positions
            .windows(2)
            .all(|pair| pair[0].step_to(&pair[1]).is_some());
        let distinct: HashSet<_> = self.positions.iter().collect();
        connected && distinct.len() == self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_of(coords: &[(i32, i32, i32)]) -> Walk {
        Walk::from_positions(
            coords
                .iter()
                .map(|&(x, y, z)| LatticePoint::new(x, y, z))
                .collect(),
        )
    }

    #[test]
    fn single_site_walk_is_valid() {
        let walk = walk_of(&[(0, 0, 0)]);
        assert_eq!(walk.len(), 1);
        assert!(walk.is_valid_saw());
        assert_eq!(walk.start(), walk.end());
    }

    #[test]
    fn connected_distinct_walk_is_valid() {
        let walk = walk_of(&[(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, -1)]);
        assert!(walk.is_valid_saw());
        assert_eq!(walk.end(), LatticePoint::new(1, 1, -1));
    }

    #[test]
    fn empty_walk_is_invalid() {
        let walk = Walk { positions: Vec::new() };
        assert!(walk.is_empty());
        assert!(!walk.is_valid_saw());
    }

    #[test]
    fn walk_not_rooted_at_origin_is_invalid() {
        assert!(!walk_of(&[(1, 0, 0), (2, 0, 0)]).is_valid_saw());
    }

    #[test]
    fn walk_with_a_jump_is_invalid() {
        assert!(!walk_of(&[(0, 0, 0), (1, 0, 0), (3, 0, 0)]).is_valid_saw());
    }

    #[test]
    fn walk_revisiting_a_site_is_invalid() {
        let walk = walk_of(&[(0, 0, 0), (1, 0, 0), (1, 1, 0), (0, 1, 0), (0, 0, 0)]);
        assert!(!walk.is_valid_saw());
    }

    #[test]
    fn points_convert_every_site() {
        let walk = walk_of(&[(0, 0, 0), (0, 0, 1)]);
        assert_eq!(
            walk.points(),
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0)]
        );
    }
}
