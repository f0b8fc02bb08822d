use alloc::vec::Vec;
use core::cmp::{min, Reverse};

use crate::algo::InitialSolution;
use crate::amount::Amount;
use crate::matrix::Matrix;

/// Which line Vogel's method picks from the combined row/column penalty list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PenaltySelection {
    /// Smallest penalty first.
    #[default]
    Smallest,
    /// Largest penalty first, the textbook rule.
    Largest,
}

/// Vogel's Approximation Method.
#[derive(Copy, Clone, Debug, Default)]
pub struct VogelApproximation {
    pub selection: PenaltySelection,
}

impl VogelApproximation {
    pub fn new(selection: PenaltySelection) -> Self {
        Self { selection }
    }
}

impl<A: Amount> InitialSolution<A> for VogelApproximation {
    fn solve(&mut self, supply: Vec<A>, demand: Vec<A>, costs: &Matrix<A>) -> Matrix<A> {
        vogel_approximation_by(supply, demand, costs, self.selection)
    }
}

/// A line of the cost matrix chosen by its penalty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Line {
    Row(usize),
    Column(usize),
}

/// Vogel's method with the [`PenaltySelection::Smallest`] rule.
pub fn vogel_approximation<A: Amount>(
    supply: Vec<A>,
    demand: Vec<A>,
    costs: &Matrix<A>,
) -> Matrix<A> {
    vogel_approximation_by(supply, demand, costs, PenaltySelection::Smallest)
}

pub fn vogel_approximation_by<A: Amount>(
    mut supply: Vec<A>,
    mut demand: Vec<A>,
    costs: &Matrix<A>,
    selection: PenaltySelection,
) -> Matrix<A> {
    let (m, n) = (supply.len(), demand.len());
    let mut x = Matrix::zeros(m, n);

    while supply.iter().copied().sum::<A>() > A::zero() {
        // exhausted lines get no penalty and are never selected
        let row_penalties = (0..m).filter(|&i| supply[i] > A::zero()).filter_map(|i| {
            penalty((0..n).filter(|&j| demand[j] > A::zero()).map(|j| costs[(i, j)]))
                .map(|p| (Line::Row(i), p))
        });
        let col_penalties = (0..n).filter(|&j| demand[j] > A::zero()).filter_map(|j| {
            penalty((0..m).filter(|&i| supply[i] > A::zero()).map(|i| costs[(i, j)]))
                .map(|p| (Line::Column(j), p))
        });
        let penalties: Vec<_> = row_penalties.chain(col_penalties).collect();

        let Some(line) = select(&penalties, selection) else {
            break;
        };

        let (i, j) = match line {
            Line::Row(i) => {
                let j = (0..n)
                    .filter(|&j| demand[j] > A::zero())
                    .min_by_key(|&j| costs[(i, j)]);
                (Some(i), j)
            }
            Line::Column(j) => {
                let i = (0..m)
                    .filter(|&i| supply[i] > A::zero())
                    .min_by_key(|&i| costs[(i, j)]);
                (i, Some(j))
            }
        };
        let (Some(i), Some(j)) = (i, j) else {
            break;
        };

        let amount = min(supply[i], demand[j]);
        x[(i, j)] = amount;
        supply[i] -= amount;
        demand[j] -= amount;
        log::trace!("{line:?}: ({i}, {j}) <- {amount}");
    }
    x
}

/// Difference between the two cheapest candidates, or the only candidate's cost.
fn penalty<A: Amount>(candidates: impl Iterator<Item = A>) -> Option<A> {
    let mut candidates: Vec<_> = candidates.collect();
    candidates.sort_unstable();
    match candidates[..] {
        [] => None,
        [only] => Some(only),
        [first, second, ..] => Some(second - first),
    }
}

/// Rows precede columns in `penalties`; ties go to the earliest entry.
fn select<A: Amount>(penalties: &[(Line, A)], selection: PenaltySelection) -> Option<Line> {
    let chosen = match selection {
        PenaltySelection::Smallest => penalties.iter().min_by_key(|(_, p)| *p),
        PenaltySelection::Largest => penalties.iter().min_by_key(|(_, p)| Reverse(*p)),
    };
    chosen.map(|(line, _)| *line)
}
