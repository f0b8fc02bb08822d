use alloc::vec::Vec;

use displaydoc::Display;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::matrix::Matrix;
use crate::problem::TransportProblem;

pub mod north_west_corner;
pub mod russell;
pub mod vogel;

pub use north_west_corner::{north_west_corner, NorthWestCorner};
pub use russell::{
    russell_approximation, russell_approximation_by, OpportunityBasis, RussellApproximation,
};
pub use vogel::{vogel_approximation, vogel_approximation_by, PenaltySelection, VogelApproximation};

/// An algorithm producing an initial basic feasible solution.
///
/// Implementations take ownership of the supply and demand vectors and use them as working
/// copies; callers that still need the originals must pass clones. The input is expected to be
/// balanced and non-negative (see [`TransportProblem`]); nothing is checked here.
pub trait InitialSolution<A> {
    /// Returns the `m x n` allocation matrix.
    fn solve(&mut self, supply: Vec<A>, demand: Vec<A>, costs: &Matrix<A>) -> Matrix<A>;

    /// Solve a validated problem on fresh copies of its supply and demand.
    fn solve_problem(&mut self, problem: &TransportProblem<A>) -> Matrix<A>
    where
        A: Amount,
    {
        let (supply, demand) = problem.working_copies();
        self.solve(supply, demand, problem.costs())
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// North-West Corner
    NorthWestCorner,
    /// Vogel's Approximation
    Vogel,
    /// Russell's Approximation
    Russell,
}

impl Method {
    /// All methods in reporting order.
    pub const ALL: [Method; 3] = [Method::NorthWestCorner, Method::Vogel, Method::Russell];

    pub fn solve<A: Amount>(self, problem: &TransportProblem<A>, options: Options) -> Matrix<A> {
        match self {
            Method::NorthWestCorner => NorthWestCorner.solve_problem(problem),
            Method::Vogel => VogelApproximation::new(options.selection).solve_problem(problem),
            Method::Russell => RussellApproximation::new(options.basis).solve_problem(problem),
        }
    }
}

/// Tunables for the cost-aware methods.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub selection: PenaltySelection,
    pub basis: OpportunityBasis,
}
