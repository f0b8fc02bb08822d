use std::error::Error;
use std::io;

use displaydoc::Display;
use ibfs::{Comparison, Matrix, Method, RawTransportProblem, TransportProblem};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum InputError {
    /// Expected a header row with at least one sink column followed by `Supply`
    MissingSinks,
    /// Expected at least one source row followed by a demand row
    MissingRows,
    /// Row {0}: expected {1} costs followed by a supply value
    SourceRow(usize, usize),
    /// Last row: expected {0} demand values and no supply value
    DemandRow(usize),
}

impl Error for InputError {}

/// Read a problem laid out like the input parameter table:
///
/// ```text
/// D1,D2,D3,D4,Supply
/// 4,8,8,6,15
/// 6,4,3,5,25
/// 5,7,6,4,10
/// 5,15,15,15,
/// ```
pub fn read_problem<R: io::Read>(rdr: R) -> Result<TransportProblem<i64>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let n = rdr.headers()?.len().saturating_sub(1);
    if n == 0 {
        return Err(InputError::MissingSinks.into());
    }

    let mut rows: Vec<Vec<Option<i64>>> = rdr.deserialize().collect::<Result<_, _>>()?;
    let demand = rows.pop().ok_or(InputError::MissingRows)?;
    if rows.is_empty() {
        return Err(InputError::MissingRows.into());
    }

    let demand = match demand.split_at(n.min(demand.len())) {
        (values, rest) if values.len() == n && rest.iter().all(Option::is_none) => values
            .iter()
            .copied()
            .collect::<Option<Vec<_>>>()
            .ok_or(InputError::DemandRow(n))?,
        _ => return Err(InputError::DemandRow(n).into()),
    };

    let rows: Vec<(Vec<i64>, i64)> = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| match row.into_iter().collect::<Option<Vec<_>>>() {
            Some(mut row) if row.len() == n + 1 => {
                let supply = row.pop().unwrap_or_default();
                Ok((row, supply))
            }
            _ => Err(InputError::SourceRow(i + 1, n)),
        })
        .collect::<Result<_, _>>()?;
    let (costs, supply): (Vec<_>, Vec<_>) = rows.into_iter().unzip();

    log::debug!("read {} sources and {} sinks", supply.len(), demand.len());

    Ok(TransportProblem::try_from(RawTransportProblem {
        supply,
        demand,
        costs,
    })?)
}

#[derive(Debug, Serialize)]
struct Shipment {
    method: Method,
    source: usize,
    sink: usize,
    amount: i64,
}

/// Write the non-zero cells of every allocation as `method,source,sink,amount` records.
pub fn write_shipments<W: io::Write>(
    wtr: W,
    comparison: &Comparison<i64>,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(wtr);
    for solution in comparison.solutions() {
        for shipment in shipments(solution.method, &solution.allocation) {
            wtr.serialize(shipment)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn shipments(method: Method, allocation: &Matrix<i64>) -> impl Iterator<Item = Shipment> + '_ {
    allocation
        .indexed()
        .filter(|(_, amount)| **amount != 0)
        .map(move |((i, j), amount)| Shipment {
            method,
            source: i + 1,
            sink: j + 1,
            amount: *amount,
        })
}

#[cfg(test)]
mod tests {
    use ibfs::{compare, Options};

    use super::*;

    const SAMPLE: &str = "\
D1,D2,D3,D4,Supply
4,8,8,6,15
6,4,3,5,25
5,7,6,4,10
5,15,15,15,
";

    #[test]
    fn reads_the_input_parameter_table() {
        let p = read_problem(SAMPLE.as_bytes()).unwrap();
        assert_eq!(p.supply(), &[15, 25, 10]);
        assert_eq!(p.demand(), &[5, 15, 15, 15]);
        assert_eq!(p.costs().row(1), &[6, 4, 3, 5]);
    }

    #[test]
    fn demand_row_may_omit_the_supply_cell() {
        let csv = "D1,D2,Supply\n1,2,10\n3,4,10\n10,10\n";
        let p = read_problem(csv.as_bytes()).unwrap();
        assert_eq!(p.demand(), &[10, 10]);
    }

    #[test]
    fn rejects_malformed_tables() {
        let short_row = "D1,D2,Supply\n1,10\n5,5,\n";
        let e = read_problem(short_row.as_bytes()).unwrap_err();
        assert_eq!(e.to_string(), "Row 1: expected 2 costs followed by a supply value");

        let only_demand = "D1,Supply\n10,\n";
        let e = read_problem(only_demand.as_bytes()).unwrap_err();
        assert_eq!(
            e.to_string(),
            "Expected at least one source row followed by a demand row"
        );

        let demand_with_supply = "D1,Supply\n1,10\n10,10\n";
        let e = read_problem(demand_with_supply.as_bytes()).unwrap_err();
        assert_eq!(
            e.to_string(),
            "Last row: expected 1 demand values and no supply value"
        );
    }

    #[test]
    fn decimal_quantities_are_rejected() {
        let decimal = "D1,Supply\n1,10.5\n10.5,\n";
        let e = read_problem(decimal.as_bytes()).unwrap_err();
        assert!(e.downcast_ref::<csv::Error>().is_some());
    }

    #[test]
    fn validation_errors_pass_through() {
        let unbalanced = "D1,Supply\n1,10\n12,\n";
        let e = read_problem(unbalanced.as_bytes()).unwrap_err();
        let e = e.downcast_ref::<ibfs::Error>().unwrap();
        assert_eq!(e.kind(), ibfs::ErrorKind::Unbalanced);
    }

    #[test]
    fn shipments_skip_empty_cells() {
        let p = read_problem(SAMPLE.as_bytes()).unwrap();
        let cmp = compare(&p, &[Method::NorthWestCorner], Options::default());
        let mut out = Vec::new();
        write_shipments(&mut out, &cmp).unwrap();
        let out = String::from_utf8(out).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("method,source,sink,amount"));
        assert_eq!(lines.next(), Some("north-west-corner,1,1,5"));
        assert_eq!(lines.next(), Some("north-west-corner,1,2,10"));
        assert_eq!(lines.count(), 4);
    }
}
