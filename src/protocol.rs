//! Text protocol for the `yens` binary.
//!
//! Requests are a single `|`-separated record whose first field is `k`:
//!
//! ```text
//! 3|0 4|2 2|7 1 9
//! ```
//!
//! Every following field is one query, node ids separated by whitespace. A
//! lone id asks for the trivial path; otherwise the first id is the source and
//! the last the target, anything in between is ignored.
//!
//! In lattice mode the fields after `k` are rows of a score matrix instead.
//!
//! Each result path is written as its vertices followed by `c=<cost>`, and every
//! query's block ends with an empty line:
//!
//! ```text
//! 0 1 4 c=2
//! 0 4 c=5
//!
//! 2 c=0
//!
//! ```

use std::fmt::Debug;
use std::io::Write;

use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::Path;
use crate::batch::{Query, QueryResult};
use crate::graph::ScoreLattice;
use crate::{Error, Result};

/// Field separator between `k` and each query
pub const FIELD_SEPARATOR: char = '|';

/// Parses `k|query|query...` into one [`Query`] per non-empty field
pub fn parse_request(input: &str) -> Result<Vec<Query>> {
    let (k, fields) = split_request(input)?;

    let mut queries = Vec::new();
    for (index, field) in fields {
        let ids = field
            .split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|e| Error::Parse {
                    line: index,
                    message: format!("invalid node id {:?}: {}", token, e),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let (Some(&source), Some(&target)) = (ids.first(), ids.last()) else {
            continue;
        };
        queries.push(Query::new(source, target, k));
    }

    Ok(queries)
}

/// A lattice request: `k` and `scores[row][column]`
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeRequest {
    pub k: usize,
    pub scores: Vec<Vec<f64>>,
}

/// Parses `k|row|row...` where each row holds whitespace-separated scores
pub fn parse_lattice_request(input: &str) -> Result<LatticeRequest> {
    let (k, fields) = split_request(input)?;

    let scores = fields
        .map(|(index, field)| {
            field
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|e| Error::Parse {
                        line: index,
                        message: format!("invalid score {:?}: {}", token, e),
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(LatticeRequest { k, scores })
}

/// Splits off and parses `k`, yielding the remaining non-blank fields with
/// their field index
fn split_request<'a>(input: &'a str) -> Result<(usize, impl Iterator<Item = (usize, &'a str)> + 'a)> {
    let mut fields = input.split(FIELD_SEPARATOR).enumerate();

    let k_field = fields.next().map(|(_, field)| field.trim()).unwrap_or("");
    let k = k_field.parse::<usize>().map_err(|e| Error::Parse {
        line: 0,
        message: format!("invalid k {:?}: {}", k_field, e),
    })?;

    Ok((k, fields.filter(|(_, field)| !field.trim().is_empty())))
}

/// Parses an edge list with one `from to weight` triple per line.
///
/// Blank lines and lines starting with `#` are skipped. Weights are not
/// validated here; the graph builder rejects negative ones.
pub fn parse_edge_list(input: &str) -> Result<Vec<(usize, usize, f64)>> {
    let mut edges = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = |message: String| Error::Parse {
            line: line_number,
            message,
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [from, to, weight] = tokens.as_slice() else {
            return Err(parse_error(format!(
                "expected `from to weight`, found {} fields",
                tokens.len()
            )));
        };

        let from = from
            .parse::<usize>()
            .map_err(|e| parse_error(format!("invalid source {:?}: {}", from, e)))?;
        let to = to
            .parse::<usize>()
            .map_err(|e| parse_error(format!("invalid target {:?}: {}", to, e)))?;
        let weight = weight
            .parse::<f64>()
            .map_err(|e| parse_error(format!("invalid weight {:?}: {}", weight, e)))?;

        edges.push((from, to, weight));
    }

    Ok(edges)
}

fn cost_to_f64<W: Float>(cost: W) -> f64 {
    cost.to_f64().unwrap_or(f64::NAN)
}

fn write_line<O: Write>(out: &mut O, ids: &[usize], cost: f64) -> Result<()> {
    for id in ids {
        write!(out, "{} ", id)?;
    }
    writeln!(out, "c={}", cost)?;
    Ok(())
}

/// Writes every query's paths followed by an empty line. A failed query is
/// written as an empty block, like a query without results.
pub fn write_text<W, O>(out: &mut O, results: &[QueryResult<W>]) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    O: Write,
{
    for result in results {
        if let Ok(paths) = result {
            for path in paths {
                write_line(out, &path.vertices, cost_to_f64(path.cost))?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes lattice paths as one row index per column, followed by the cost
pub fn write_lattice_text<W, O>(out: &mut O, lattice: &ScoreLattice<W>, paths: &[Path<W>]) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    O: Write,
{
    for path in paths {
        let rows = lattice
            .decode(&path.vertices)
            .ok_or_else(|| Error::InvalidPath(path.vertices.clone()))?;
        write_line(out, &rows, cost_to_f64(path.cost))?;
    }
    Ok(())
}

/// One ranked path in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct PathRecord {
    pub rank: usize,
    pub vertices: Vec<usize>,
    pub cost: f64,
}

/// One query's outcome in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct QueryRecord {
    pub query: usize,
    pub source: usize,
    pub target: usize,
    pub paths: Vec<PathRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pairs queries with their results in input order
pub fn query_records<W>(queries: &[Query], results: &[QueryResult<W>]) -> Vec<QueryRecord>
where
    W: Float + Zero + Debug + Copy,
{
    queries
        .iter()
        .zip(results)
        .enumerate()
        .map(|(index, (query, result))| {
            let (paths, error) = match result {
                Ok(paths) => (path_records(paths), None),
                Err(e) => (Vec::new(), Some(e.to_string())),
            };
            QueryRecord {
                query: index,
                source: query.source,
                target: query.target,
                paths,
                error,
            }
        })
        .collect()
}

fn path_records<W>(paths: &[Path<W>]) -> Vec<PathRecord>
where
    W: Float + Zero + Debug + Copy,
{
    paths
        .iter()
        .enumerate()
        .map(|(rank, path)| PathRecord {
            rank,
            vertices: path.vertices.clone(),
            cost: cost_to_f64(path.cost),
        })
        .collect()
}

/// Writes the batch as a pretty-printed JSON array
pub fn write_json<W, O>(out: &mut O, queries: &[Query], results: &[QueryResult<W>]) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    O: Write,
{
    let records = query_records(queries, results);
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

/// One decoded lattice path in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct LatticeRecord {
    pub rank: usize,
    pub rows: Vec<usize>,
    pub cost: f64,
}

/// Writes decoded lattice paths as a pretty-printed JSON array
pub fn write_lattice_json<W, O>(out: &mut O, lattice: &ScoreLattice<W>, paths: &[Path<W>]) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    O: Write,
{
    let records = paths
        .iter()
        .enumerate()
        .map(|(rank, path)| {
            let rows = lattice
                .decode(&path.vertices)
                .ok_or_else(|| Error::InvalidPath(path.vertices.clone()))?;
            Ok(LatticeRecord {
                rank,
                rows,
                cost: cost_to_f64(path.cost),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}
