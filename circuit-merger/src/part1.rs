use miette::*;

use crate::merger::{self, ConnectionLimit, Outcome, LARGEST_CIRCUITS};
use crate::point::parse_points;

/// Closest pairs wired before the circuits are measured.
pub const CONNECTIONS: usize = 1000;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    process_with_limit(input, CONNECTIONS)
}

/// Connects the `limit` closest pairs and multiplies the sizes of the three
/// largest circuits.
#[tracing::instrument(skip(input))]
pub fn process_with_limit(input: &str, limit: usize) -> Result<String> {
    let points = parse_points(input)?;

    if points.len() < 2 {
        return Err(miette!(
            help = "the input needs one junction box per line",
            "Need at least two junction boxes, found {}",
            points.len()
        ));
    }

    match merger::process(&points, ConnectionLimit::AtMost(limit)) {
        Outcome::Partitioned(partition) => {
            Ok(partition.product_of_largest(LARGEST_CIRCUITS).to_string())
        }
        Outcome::Unified(connection) => Err(miette!(
            "Bounded run unexpectedly stopped at pair ({}, {})",
            connection.first,
            connection.second
        )),
    }
}
