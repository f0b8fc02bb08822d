use alloc::vec::Vec;
use core::cmp::min;

use crate::algo::InitialSolution;
use crate::amount::Amount;
use crate::matrix::Matrix;

/// The North-West Corner rule. Ignores unit costs entirely.
#[derive(Copy, Clone, Debug, Default)]
pub struct NorthWestCorner;

impl<A: Amount> InitialSolution<A> for NorthWestCorner {
    fn solve(&mut self, supply: Vec<A>, demand: Vec<A>, _costs: &Matrix<A>) -> Matrix<A> {
        north_west_corner(supply, demand)
    }
}

/// Sweep from the top-left cell, shipping as much as possible through the current cell and
/// moving down when the source is drained and right when the sink is satisfied.
pub fn north_west_corner<A: Amount>(mut supply: Vec<A>, mut demand: Vec<A>) -> Matrix<A> {
    let (m, n) = (supply.len(), demand.len());
    let mut x = Matrix::zeros(m, n);

    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        let amount = min(supply[i], demand[j]);
        x[(i, j)] = amount;
        supply[i] -= amount;
        demand[j] -= amount;
        log::trace!("({i}, {j}) <- {amount}");

        // both may advance at once (degenerate step)
        if supply[i].is_zero() {
            i += 1;
        }
        if demand[j].is_zero() {
            j += 1;
        }
    }
    x
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn sweeps_the_staircase() {
        let x = north_west_corner(vec![15, 25, 10], vec![5, 15, 15, 15]);
        let expected = Matrix::from_rows(vec![
            vec![5, 10, 0, 0],
            vec![0, 5, 15, 5],
            vec![0, 0, 0, 10],
        ])
        .unwrap();
        assert_eq!(x, expected);
    }

    #[test]
    fn degenerate_step_advances_both_cursors() {
        let x = north_west_corner(vec![10, 10], vec![10, 10]);
        assert_eq!(x, Matrix::from_rows(vec![vec![10, 0], vec![0, 10]]).unwrap());
    }

    #[test]
    fn zero_supply_rows_are_skipped() {
        let x = north_west_corner(vec![0, 7], vec![3, 4]);
        assert_eq!(x, Matrix::from_rows(vec![vec![0, 0], vec![3, 4]]).unwrap());
    }
}
