use alloc::vec::Vec;

use displaydoc::Display;
use serde::Serialize;

use crate::algo::{Method, Options};
use crate::amount::Amount;
use crate::matrix::Matrix;
use crate::problem::TransportProblem;

/// One method's initial basic feasible solution along with its total shipping cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Solution<A> {
    pub method: Method,
    pub allocation: Matrix<A>,
    pub cost: A,
}

/// An allocation that does not satisfy the constraints of its problem.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Violation {
    /// {0}: allocation shape differs from the cost matrix
    Shape(Method),
    /// {0}: negative allocation at ({1}, {2})
    NegativeAllocation(Method, usize, usize),
    /// {0}: shipments from source {1} do not match its supply
    RowSum(Method, usize),
    /// {0}: shipments to sink {1} do not match its demand
    ColumnSum(Method, usize),
}

/// Side-by-side results of several methods on the same problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Comparison<A> {
    solutions: Vec<Solution<A>>,
}

/// Sum of `allocation[i][j] * costs[i][j]` over all cells.
pub fn total_cost<A: Amount>(allocation: &Matrix<A>, costs: &Matrix<A>) -> A {
    debug_assert_eq!(allocation.shape(), costs.shape());
    allocation
        .indexed()
        .map(|(pos, x)| *x * costs[pos])
        .sum()
}

/// Run every method in `methods` on its own copy of the problem, in the given order.
pub fn compare<A: Amount>(
    problem: &TransportProblem<A>,
    methods: &[Method],
    options: Options,
) -> Comparison<A> {
    let solutions: Vec<_> = methods
        .iter()
        .map(|&method| {
            let allocation = method.solve(problem, options);
            let cost = total_cost(&allocation, problem.costs());
            log::debug!("{method}: total cost = {cost}");
            Solution {
                method,
                allocation,
                cost,
            }
        })
        .collect();

    log::info!("----------------------------------");
    log::info!("   Sources = {}", problem.supply().len());
    log::info!("     Sinks = {}", problem.demand().len());
    log::info!("  Shipment = {}", problem.total_supply());
    for s in &solutions {
        log::info!("{} = {}", s.method, s.cost);
    }

    Comparison { solutions }
}

impl<A: Amount> Comparison<A> {
    pub fn solutions(&self) -> &[Solution<A>] {
        &self.solutions
    }

    pub fn get(&self, method: Method) -> Option<&Solution<A>> {
        self.solutions.iter().find(|s| s.method == method)
    }

    /// The lowest-cost solution, the earliest one on ties.
    pub fn cheapest(&self) -> Option<&Solution<A>> {
        self.solutions.iter().min_by_key(|s| s.cost)
    }

    /// Verify that every allocation ships exactly the supply and demand of `problem`.
    pub fn check(&self, problem: &TransportProblem<A>) -> Result<(), Violation> {
        self.solutions
            .iter()
            .try_for_each(|s| check_allocation(s.method, &s.allocation, problem))
    }
}

impl<A> IntoIterator for Comparison<A> {
    type Item = Solution<A>;
    type IntoIter = alloc::vec::IntoIter<Solution<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

pub fn check_allocation<A: Amount>(
    method: Method,
    allocation: &Matrix<A>,
    problem: &TransportProblem<A>,
) -> Result<(), Violation> {
    if allocation.shape() != problem.costs().shape() {
        return Err(Violation::Shape(method));
    }
    if let Some(((i, j), _)) = allocation.indexed().find(|(_, x)| **x < A::zero()) {
        return Err(Violation::NegativeAllocation(method, i, j));
    }
    if let Some(i) = allocation
        .row_sums()
        .into_iter()
        .zip(problem.supply())
        .position(|(shipped, supply)| shipped != *supply)
    {
        return Err(Violation::RowSum(method, i));
    }
    if let Some(j) = allocation
        .column_sums()
        .into_iter()
        .zip(problem.demand())
        .position(|(received, demand)| received != *demand)
    {
        return Err(Violation::ColumnSum(method, j));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn problem() -> TransportProblem<i32> {
        TransportProblem::new(
            vec![20, 30, 25],
            vec![10, 20, 15, 30],
            Matrix::from_rows(vec![
                vec![8, 6, 10, 9],
                vec![9, 12, 13, 7],
                vec![14, 9, 16, 5],
            ])
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn total_cost_is_the_elementwise_product_sum() {
        let x = Matrix::from_rows(vec![vec![1, 2], vec![0, 3]]).unwrap();
        let c = Matrix::from_rows(vec![vec![5, 1], vec![7, 2]]).unwrap();
        assert_eq!(total_cost(&x, &c), 5 + 2 + 6);
    }

    #[test]
    fn compares_in_requested_order() {
        let p = problem();
        let cmp = compare(
            &p,
            &[Method::Russell, Method::NorthWestCorner],
            Options::default(),
        );
        let methods: Vec<_> = cmp.solutions().iter().map(|s| s.method).collect();
        assert_eq!(methods, vec![Method::Russell, Method::NorthWestCorner]);
        assert_eq!(cmp.get(Method::NorthWestCorner).map(|s| s.cost), Some(615));
        assert!(cmp.get(Method::Vogel).is_none());
        assert_eq!(cmp.check(&p), Ok(()));
    }

    #[test]
    fn cheapest_of_all_methods() {
        let p = problem();
        let cmp = compare(&p, &Method::ALL, Options::default());
        assert_eq!(
            cmp.cheapest().map(|s| (s.method, s.cost)),
            Some((Method::NorthWestCorner, 615))
        );

        let textbook = Options {
            selection: crate::algo::PenaltySelection::Largest,
            basis: crate::algo::OpportunityBasis::Maxima,
        };
        let cmp = compare(&p, &Method::ALL, textbook);
        assert_eq!(
            cmp.cheapest().map(|s| (s.method, s.cost)),
            Some((Method::Vogel, 565))
        );
    }

    #[test]
    fn check_reports_the_first_broken_line() {
        let p = problem();
        let mut x = Method::NorthWestCorner.solve(&p, Options::default());
        x[(0, 0)] -= 1;
        x[(0, 1)] += 1;
        assert_eq!(
            check_allocation(Method::NorthWestCorner, &x, &p),
            Err(Violation::ColumnSum(Method::NorthWestCorner, 0))
        );

        x[(0, 0)] = -1;
        assert_eq!(
            check_allocation(Method::NorthWestCorner, &x, &p),
            Err(Violation::NegativeAllocation(Method::NorthWestCorner, 0, 0))
        );
    }
}
