use alloc::vec;
use alloc::vec::Vec;
use core::cmp::{min, Reverse};

use itertools::iproduct;

use crate::algo::InitialSolution;
use crate::amount::Amount;
use crate::matrix::Matrix;

/// The per-line reference costs `u[i]` / `v[j]` that opportunity costs are measured against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OpportunityBasis {
    /// Row and column minima over the whole cost matrix, fixed once before allocating.
    #[default]
    Minima,
    /// Row and column maxima over the lines still open, refreshed before every allocation.
    Maxima,
}

/// Russell's Approximation Method.
#[derive(Copy, Clone, Debug, Default)]
pub struct RussellApproximation {
    pub basis: OpportunityBasis,
}

impl RussellApproximation {
    pub fn new(basis: OpportunityBasis) -> Self {
        Self { basis }
    }
}

impl<A: Amount> InitialSolution<A> for RussellApproximation {
    fn solve(&mut self, supply: Vec<A>, demand: Vec<A>, costs: &Matrix<A>) -> Matrix<A> {
        russell_approximation_by(supply, demand, costs, self.basis)
    }
}

/// Russell's method measured against row and column minima.
pub fn russell_approximation<A: Amount>(
    supply: Vec<A>,
    demand: Vec<A>,
    costs: &Matrix<A>,
) -> Matrix<A> {
    russell_approximation_by(supply, demand, costs, OpportunityBasis::Minima)
}

pub fn russell_approximation_by<A: Amount>(
    mut supply: Vec<A>,
    mut demand: Vec<A>,
    costs: &Matrix<A>,
    basis: OpportunityBasis,
) -> Matrix<A> {
    let (m, n) = (supply.len(), demand.len());
    let mut x = Matrix::zeros(m, n);

    // a line closes for good once its supply / demand hits zero
    let mut open_rows = vec![true; m];
    let mut open_cols = vec![true; n];
    let (mut u, mut v) = line_costs(costs, &open_rows, &open_cols, basis);

    while supply.iter().copied().sum::<A>() > A::zero() {
        if basis == OpportunityBasis::Maxima {
            (u, v) = line_costs(costs, &open_rows, &open_cols, basis);
        }

        // first maximum of u[i] + v[j] - c[i][j] in row-major order
        let Some((i, j)) = iproduct!(0..m, 0..n)
            .filter(|&(i, j)| open_rows[i] && open_cols[j])
            .min_by_key(|&(i, j)| Reverse(u[i] + v[j] - costs[(i, j)]))
        else {
            break;
        };

        let amount = min(supply[i], demand[j]);
        x[(i, j)] = amount;
        supply[i] -= amount;
        demand[j] -= amount;
        log::trace!(
            "({i}, {j}) <- {amount}, opportunity = {}",
            u[i] + v[j] - costs[(i, j)]
        );

        if supply[i].is_zero() {
            open_rows[i] = false;
        }
        if demand[j].is_zero() {
            open_cols[j] = false;
        }
    }
    x
}

/// Row references `u` and column references `v` under the given basis.
fn line_costs<A: Amount>(
    costs: &Matrix<A>,
    open_rows: &[bool],
    open_cols: &[bool],
    basis: OpportunityBasis,
) -> (Vec<A>, Vec<A>) {
    match basis {
        OpportunityBasis::Minima => (
            (0..costs.rows())
                .map(|i| costs.row(i).iter().copied().min().unwrap_or_default())
                .collect(),
            (0..costs.cols())
                .map(|j| costs.column(j).copied().min().unwrap_or_default())
                .collect(),
        ),
        OpportunityBasis::Maxima => (
            (0..costs.rows())
                .map(|i| {
                    (0..costs.cols())
                        .filter(|&j| open_cols[j])
                        .map(|j| costs[(i, j)])
                        .max()
                        .unwrap_or_default()
                })
                .collect(),
            (0..costs.cols())
                .map(|j| {
                    (0..costs.rows())
                        .filter(|&i| open_rows[i])
                        .map(|i| costs[(i, j)])
                        .max()
                        .unwrap_or_default()
                })
                .collect(),
        ),
    }
}
