//! Plain-text and LaTeX rendering of problems and their solutions.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write;

use itertools::Itertools;

use crate::amount::Amount;
use crate::comparison::Comparison;
use crate::matrix::Matrix;
use crate::problem::TransportProblem;

/// Right-align every column of `rows` (header first) to its widest cell.
fn aligned(rows: &[Vec<String>]) -> String {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..cols)
        .map(|k| {
            rows.iter()
                .filter_map(|r| r.get(k))
                .map(String::len)
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .zip(widths.iter().copied())
            .enumerate()
            .map(|(k, (cell, w))| {
                if k == 0 {
                    format!("{cell:<w$}")
                } else {
                    format!("{cell:>w$}")
                }
            })
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

fn sink_header(n: usize) -> impl Iterator<Item = String> {
    (1..=n).map(|j| format!("D{j}"))
}

/// The cost matrix with a `Supply` column and a trailing `Demand` row.
pub fn input_table<A: Amount>(problem: &TransportProblem<A>) -> String {
    let n = problem.demand().len();

    let mut rows = Vec::with_capacity(problem.supply().len() + 2);
    rows.push(
        core::iter::once(String::new())
            .chain(sink_header(n))
            .chain(core::iter::once("Supply".to_string()))
            .collect::<Vec<_>>(),
    );
    rows.extend(
        problem
            .costs()
            .iter_rows()
            .zip(problem.supply())
            .enumerate()
            .map(|(i, (costs, supply))| {
                core::iter::once(format!("S{}", i + 1))
                    .chain(costs.iter().map(ToString::to_string))
                    .chain(core::iter::once(supply.to_string()))
                    .collect()
            }),
    );
    rows.push(
        core::iter::once("Demand".to_string())
            .chain(problem.demand().iter().map(ToString::to_string))
            .collect(),
    );

    format!("Input Parameter Table:\n{}", aligned(&rows))
}

/// An allocation with `S<i>` / `D<j>` labels.
pub fn allocation_table<A: Amount>(allocation: &Matrix<A>) -> String {
    let header: Vec<String> = core::iter::once(String::new())
        .chain(sink_header(allocation.cols()))
        .collect();
    let rows: Vec<Vec<String>> = core::iter::once(header)
        .chain(allocation.iter_rows().enumerate().map(|(i, row)| {
            core::iter::once(format!("S{}", i + 1))
                .chain(row.iter().map(ToString::to_string))
                .collect()
        }))
        .collect();
    aligned(&rows)
}

/// Every method's allocation and total cost, one block per method.
pub fn plain_report<A: Amount>(comparison: &Comparison<A>) -> String {
    comparison
        .solutions()
        .iter()
        .map(|s| {
            format!(
                "Initial Basic Feasible Solution using {} Method:\n{}Total cost: {}\n",
                s.method,
                allocation_table(&s.allocation),
                s.cost
            )
        })
        .join("\n")
}

/// Inline LaTeX `pmatrix` for `matrix`.
pub fn latex_matrix<A: Amount>(matrix: &Matrix<A>) -> String {
    format!(
        "$\\begin{{pmatrix}}{}\\end{{pmatrix}}$",
        matrix.iter_rows().map(|row| row.iter().join(" & ")).join(" \\\\ ")
    )
}

/// A `\section*` holding a table of every method's solution and cost.
pub fn latex_section<A: Amount>(title: &str, comparison: &Comparison<A>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\\section*{{{title}}}");
    out.push_str("\\begin{table}[h!]\n");
    out.push_str("\\centering\n");
    out.push_str("\\begin{tabular}{|c|c|c|}\n");
    out.push_str("\\hline\n");
    out.push_str("Method & Initial Basic Feasible Solution & Cost \\\\ \\hline\n");
    for s in comparison.solutions() {
        let _ = writeln!(
            out,
            "{} & {} & ${}$ \\\\ \\hline",
            s.method,
            latex_matrix(&s.allocation),
            s.cost
        );
    }
    out.push_str("\\end{tabular}\n");
    out.push_str("\\end{table}\n");
    out.push_str("\\vspace{1em}\n\n");
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::algo::{Method, Options};
    use crate::comparison::compare;

    fn problem() -> TransportProblem<i32> {
        TransportProblem::new(
            vec![15, 25, 10],
            vec![5, 15, 15, 15],
            Matrix::from_rows(vec![vec![4, 8, 8, 6], vec![6, 4, 3, 5], vec![5, 7, 6, 4]])
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn input_table_lists_supply_and_demand() {
        let expected = "\
Input Parameter Table:
        D1  D2  D3  D4  Supply
S1       4   8   8   6      15
S2       6   4   3   5      25
S3       5   7   6   4      10
Demand   5  15  15  15
";
        assert_eq!(input_table(&problem()), expected);
    }

    #[test]
    fn allocation_table_is_right_aligned() {
        let x = Matrix::from_rows(vec![vec![5, 10], vec![0, 5]]).unwrap();
        assert_eq!(allocation_table(&x), "    D1  D2\nS1   5  10\nS2   0   5\n");
    }

    #[test]
    fn pmatrix_joins_cells_and_rows() {
        let x = Matrix::from_rows(vec![vec![5, 10], vec![0, 5]]).unwrap();
        assert_eq!(
            latex_matrix(&x),
            "$\\begin{pmatrix}5 & 10 \\\\ 0 & 5\\end{pmatrix}$"
        );
    }

    #[test]
    fn latex_section_has_one_row_per_method() {
        let cmp = compare(&problem(), &Method::ALL, Options::default());
        let tex = latex_section("Test Case 1: Simple balanced costs", &cmp);
        let lines: Vec<_> = tex.lines().collect();
        assert_eq!(lines[0], "\\section*{Test Case 1: Simple balanced costs}");
        assert_eq!(
            lines[5],
            "Method & Initial Basic Feasible Solution & Cost \\\\ \\hline"
        );
        assert_eq!(
            lines[6],
            "North-West Corner & $\\begin{pmatrix}5 & 10 & 0 & 0 \\\\ 0 & 5 & 15 & 5 \\\\ \
             0 & 0 & 0 & 10\\end{pmatrix}$ & $230$ \\\\ \\hline"
        );
        assert!(lines[7].starts_with("Vogel's Approximation & "));
        assert!(lines[7].ends_with("& $215$ \\\\ \\hline"));
        assert!(lines[8].starts_with("Russell's Approximation & "));
        assert!(lines[8].ends_with("& $220$ \\\\ \\hline"));
        assert_eq!(lines[11], "\\vspace{1em}");
        assert!(tex.ends_with("\\vspace{1em}\n\n"));
    }

    #[test]
    fn plain_report_names_each_method() {
        let cmp = compare(&problem(), &[Method::NorthWestCorner], Options::default());
        let report = plain_report(&cmp);
        assert!(report.starts_with(
            "Initial Basic Feasible Solution using North-West Corner Method:\n"
        ));
        assert!(report.ends_with("Total cost: 230\n"));
    }
}
