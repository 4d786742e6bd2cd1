//! Per-cell predecessor flags.
//!
//! Each DP cell records *every* predecessor achieving its optimum as a 3-bit
//! set over LEFT (1), DIAGONAL (2) and UP (4). Several bits mean tied optima;
//! the empty set marks a local-alignment stop cell.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionMask(u8);

/// One traceback step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (i, j) -> (i, j-1): B symbol against a gap.
    Left,
    /// (i, j) -> (i-1, j-1): A symbol against B symbol.
    Diagonal,
    /// (i, j) -> (i-1, j): A symbol against a gap.
    Up,
}

impl Direction {
    /// Fixed expansion order used by traceback.
    pub const ORDER: [Direction; 3] = [Direction::Left, Direction::Diagonal, Direction::Up];

    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Direction::Left => DirectionMask::LEFT.0,
            Direction::Diagonal => DirectionMask::DIAGONAL.0,
            Direction::Up => DirectionMask::UP.0,
        }
    }
}

impl DirectionMask {
    pub const NONE: DirectionMask = DirectionMask(0);
    pub const LEFT: DirectionMask = DirectionMask(1);
    pub const DIAGONAL: DirectionMask = DirectionMask(2);
    pub const UP: DirectionMask = DirectionMask(4);

    /// Build from raw bits; anything above bit 2 is dropped.
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        DirectionMask(bits & 0b111)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    /// Number of tied predecessors.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Set directions in LEFT, DIAGONAL, UP order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ORDER
            .into_iter()
            .filter(move |dir| self.contains(*dir))
    }
}

impl From<Direction> for DirectionMask {
    fn from(dir: Direction) -> Self {
        DirectionMask(dir.bit())
    }
}

impl fmt::Display for DirectionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_match_documented_values() {
        assert_eq!(DirectionMask::LEFT.bits(), 1);
        assert_eq!(DirectionMask::DIAGONAL.bits(), 2);
        assert_eq!(DirectionMask::UP.bits(), 4);
        assert_eq!(DirectionMask::from_bits(0xFF).bits(), 7);
    }

    #[test]
    fn iteration_order_is_left_diagonal_up() {
        let all = DirectionMask::from_bits(7);
        let dirs: Vec<_> = all.iter().collect();
        assert_eq!(dirs, Direction::ORDER.to_vec());

        let up_left = DirectionMask::from_bits(5);
        let dirs: Vec<_> = up_left.iter().collect();
        assert_eq!(dirs, vec![Direction::Left, Direction::Up]);
        assert_eq!(up_left.len(), 2);
    }

    #[test]
    fn insert_accumulates() {
        let mut mask = DirectionMask::NONE;
        assert!(mask.is_empty());
        mask.insert(Direction::Up);
        mask.insert(Direction::Diagonal);
        assert_eq!(mask.bits(), 6);
        assert!(!mask.contains(Direction::Left));
        assert_eq!(mask.to_string(), "6");
    }
}
