use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use num_traits::Zero;

/// A trait representing a quantity or unit cost in a transportation problem.
///
/// Amounts are exact integers: allocations must reach *exactly* zero for a row or column to count
/// as exhausted. Implementors must be signed, since Russell's `u + v - c` can go below zero.
pub trait Amount:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + Debug
    + Display
    + Default
{
}

impl Amount for i32 {}

impl Amount for i64 {}
