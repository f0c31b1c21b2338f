//! A square cell mask packed into an unsigned integer.
//!
//! The side length is chosen at runtime (board size is a match parameter),
//! so capacity is validated when a mask is created rather than at the type
//! level. The type is `no_std` friendly and avoids heap allocations.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitOr, BitOrAssign};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Requested side*side cells exceed the capacity of the backing integer.
    SideTooLarge { side: u8, capacity: usize },
    /// Row or column index is outside [0..side).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::SideTooLarge { side, capacity } => {
                write!(
                    f,
                    "SideTooLarge: {}x{} cells exceed capacity {}",
                    side, side, capacity
                )
            }
            MaskError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A side×side cell mask stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Mask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    side: u8,
}

impl<T> Mask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty mask, checking that side*side fits in `T`.
    pub fn new(side: u8) -> Result<Self, MaskError> {
        let capacity = mem::size_of::<T>() * 8;
        if side as usize * side as usize > capacity {
            Err(MaskError::SideTooLarge { side, capacity })
        } else {
            Ok(Mask {
                bits: T::zero(),
                side,
            })
        }
    }

    /// Side length of the mask.
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, MaskError> {
        self.check_bounds(row, col)?;
        let idx = row * self.side as usize + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        self.check_bounds(row, col)?;
        let idx = row * self.side as usize + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the cell at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        self.check_bounds(row, col)?;
        let idx = row * self.side as usize + col;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Clears every cell.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MaskError> {
        if row >= self.side as usize || col >= self.side as usize {
            Err(MaskError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T> BitAnd for Mask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.side, rhs.side);
        Mask {
            bits: self.bits & rhs.bits,
            side: self.side,
        }
    }
}

impl<T> BitOr for Mask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.side, rhs.side);
        Mask {
            bits: self.bits | rhs.bits,
            side: self.side,
        }
    }
}

impl<T> BitOrAssign for Mask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        debug_assert_eq!(self.side, rhs.side);
        self.bits = self.bits | rhs.bits;
    }
}

impl<T> fmt::Debug for Mask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mask ({}x{}):", self.side, self.side)?;
        for r in 0..self.side as usize {
            for c in 0..self.side as usize {
                let idx = r * self.side as usize + c;
                let cell = if ((self.bits >> idx) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
