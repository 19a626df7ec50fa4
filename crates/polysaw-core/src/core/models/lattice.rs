use nalgebra::Point3;
use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl LatticePoint {
    pub const ORIGIN: LatticePoint = LatticePoint { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the lattice direction leading from `self` to `other`, if the two points
    /// are nearest neighbours on the cubic lattice.
    pub fn step_to(&self, other: &LatticePoint) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| *self + direction == *other)
    }

    pub fn to_point(&self) -> Point3<f64> {
        Point3::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

impl Add<Direction> for LatticePoint {
    type Output = LatticePoint;

    fn add(self, direction: Direction) -> LatticePoint {
        let (dx, dy, dz) = direction.offset();
        LatticePoint::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six unit steps of the simple cubic lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    PlusX,
    MinusX,
    PlusY,
    MinusY,
    PlusZ,
    MinusZ,
}

impl Direction {
    /// Canonical ordering. Shuffles always start from this order so a given random
    /// stream maps to the same permutation on every step.
    pub const ALL: [Direction; 6] = [
        Direction::PlusX,
        Direction::MinusX,
        Direction::PlusY,
        Direction::MinusY,
        Direction::PlusZ,
        Direction::MinusZ,
    ];

    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::PlusX => (1, 0, 0),
            Direction::MinusX => (-1, 0, 0),
            Direction::PlusY => (0, 1, 0),
            Direction::MinusY => (0, -1, 0),
            Direction::PlusZ => (0, 0, 1),
            Direction::MinusZ => (0, 0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::PlusX => "+x",
                Direction::MinusX => "-x",
                Direction::PlusY => "+y",
                Direction::MinusY => "-y",
                Direction::PlusZ => "+z",
                Direction::MinusZ => "-z",
            }
        )
    }
}
