//! Initial basic feasible solutions for the balanced transportation problem.
//!
//! Three independent heuristics turn supply capacities, demand requirements and a unit-cost
//! matrix into an allocation matrix that satisfies every supply and demand constraint:
//!
//! * [`north_west_corner`]: a cost-blind staircase sweep,
//! * [`vogel_approximation`]: penalty-driven greedy allocation,
//! * [`russell_approximation`]: opportunity-cost-driven greedy allocation.
//!
//! Solvers expect a validated, balanced [`TransportProblem`] (or equivalent raw vectors) and
//! perform no checks of their own.

#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
pub mod amount;
pub mod comparison;
pub mod error;
pub mod matrix;
pub mod problem;
pub mod report;

pub use algo::{
    north_west_corner, russell_approximation, russell_approximation_by, vogel_approximation,
    vogel_approximation_by, InitialSolution, Method, NorthWestCorner, OpportunityBasis, Options,
    PenaltySelection, RussellApproximation, VogelApproximation,
};
pub use amount::Amount;
pub use comparison::{compare, total_cost, Comparison, Solution, Violation};
pub use error::{Error, ErrorKind};
pub use matrix::Matrix;
pub use problem::{RawTransportProblem, TransportProblem};
