use alloc::string::ToString;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::Error;
use crate::matrix::Matrix;

/// A validated, balanced transportation problem.
///
/// The only way to obtain one is through [`TransportProblem::new`] (or deserializing a
/// [`RawTransportProblem`]), so every solver can rely on non-negative values, consistent shapes
/// and `sum(supply) == sum(demand)`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(
    try_from = "RawTransportProblem<A>",
    bound(deserialize = "A: Amount + Deserialize<'de>")
)]
pub struct TransportProblem<A> {
    supply: Vec<A>,
    demand: Vec<A>,
    costs: Matrix<A>,
}

impl<A: Amount> TransportProblem<A> {
    pub fn new(supply: Vec<A>, demand: Vec<A>, costs: Matrix<A>) -> Result<Self, Error> {
        check_applicability(&supply, &demand, &costs)?;
        check_balanced(&supply, &demand)?;
        Ok(Self {
            supply,
            demand,
            costs,
        })
    }

    pub fn supply(&self) -> &[A] {
        &self.supply
    }

    pub fn demand(&self) -> &[A] {
        &self.demand
    }

    pub fn costs(&self) -> &Matrix<A> {
        &self.costs
    }

    /// Fresh working copies of supply and demand for one solver run.
    pub fn working_copies(&self) -> (Vec<A>, Vec<A>) {
        (self.supply.clone(), self.demand.clone())
    }

    pub fn total_supply(&self) -> A {
        self.supply.iter().copied().sum()
    }
}

fn check_applicability<A: Amount>(
    supply: &[A],
    demand: &[A],
    costs: &Matrix<A>,
) -> Result<(), Error> {
    if supply.is_empty() {
        return Err(Error::EmptySupply);
    }
    if demand.is_empty() {
        return Err(Error::EmptyDemand);
    }
    if costs.shape() != (supply.len(), demand.len()) {
        return Err(Error::ShapeMismatch {
            rows: costs.rows(),
            cols: costs.cols(),
            expected_rows: supply.len(),
            expected_cols: demand.len(),
        });
    }
    if let Some(i) = supply.iter().position(|s| *s < A::zero()) {
        return Err(Error::NegativeSupply(i));
    }
    if let Some(j) = demand.iter().position(|d| *d < A::zero()) {
        return Err(Error::NegativeDemand(j));
    }
    if let Some(((i, j), _)) = costs.indexed().find(|(_, c)| **c < A::zero()) {
        return Err(Error::NegativeCost(i, j));
    }
    Ok(())
}

fn check_balanced<A: Amount>(supply: &[A], demand: &[A]) -> Result<(), Error> {
    let total_supply: A = supply.iter().copied().sum();
    let total_demand: A = demand.iter().copied().sum();
    if total_supply != total_demand {
        log::debug!("unbalanced problem: supply {total_supply} v/s demand {total_demand}");
        return Err(Error::Unbalanced {
            supply: total_supply.to_string(),
            demand: total_demand.to_string(),
        });
    }
    Ok(())
}

/// The unchecked shape of a problem as it arrives from the outside world.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawTransportProblem<A> {
    pub supply: Vec<A>,
    pub demand: Vec<A>,
    pub costs: Vec<Vec<A>>,
}

impl<A: Amount> TryFrom<RawTransportProblem<A>> for TransportProblem<A> {
    type Error = Error;

    fn try_from(p: RawTransportProblem<A>) -> Result<Self, Self::Error> {
        let rows = p.costs.len();
        let costs = Matrix::from_rows(p.costs).ok_or(Error::ShapeMismatch {
            rows,
            cols: 0,
            expected_rows: p.supply.len(),
            expected_cols: p.demand.len(),
        })?;
        Self::new(p.supply, p.demand, costs)
    }
}

impl<A: Amount> From<TransportProblem<A>> for RawTransportProblem<A> {
    fn from(p: TransportProblem<A>) -> Self {
        Self {
            costs: p.costs.iter_rows().map(<[A]>::to_vec).collect(),
            supply: p.supply,
            demand: p.demand,
        }
    }
}
