use crate::Point;
use crate::error::GameError;

/// Placed stones on a lattice of `(divisions + 1)²` intersections.
///
/// Stones keep their placement order; occupancy is mirrored in a flat array
/// for constant-time lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    stones: Vec<Point>,
    occupied: Vec<bool>,
    divisions: u8,
}

impl Board {
    pub fn new(divisions: u8) -> Self {
        let side = divisions as usize + 1;
        Board {
            stones: Vec::with_capacity(side * side),
            occupied: vec![false; side * side],
            divisions,
        }
    }

    // -- Accessors --

    /// Intersections per side.
    pub fn side(&self) -> usize {
        self.divisions as usize + 1
    }

    pub fn capacity(&self) -> usize {
        self.side() * self.side()
    }

    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    pub fn count(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.count() == self.capacity()
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        let max = self.divisions as i32;
        (0..=max).contains(&x) && (0..=max).contains(&y)
    }

    pub fn is_occupied(&self, point: Point) -> bool {
        self.idx(point).is_some_and(|i| self.occupied[i])
    }

    /// Every stone except `point`, in placement order.
    pub fn others(&self, point: Point) -> Vec<Point> {
        self.stones.iter().copied().filter(|&s| s != point).collect()
    }

    // -- Mutation --

    pub fn place(&mut self, point: Point) -> Result<(), GameError> {
        let i = self.idx(point).ok_or(GameError::NotOnBoard)?;
        if self.occupied[i] {
            return Err(GameError::Occupied);
        }
        self.occupied[i] = true;
        self.stones.push(point);
        Ok(())
    }

    #[inline]
    fn idx(&self, point: Point) -> Option<usize> {
        if self.on_board(point) {
            Some(point.1 as usize * self.side() + point.0 as usize)
        } else {
            None
        }
    }
}
