use miette::*;

use crate::merger::{self, ConnectionLimit, Outcome};
use crate::point::parse_points;

/// Connects pairs until every junction box shares one circuit and multiplies
/// the X coordinates of the two boxes joined last.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;

    if points.len() < 2 {
        return Err(miette!(
            help = "the input needs one junction box per line",
            "Need at least two junction boxes, found {}",
            points.len()
        ));
    }

    let connection = match merger::process(&points, ConnectionLimit::Unbounded) {
        Outcome::Unified(connection) => connection,
        Outcome::Partitioned(partition) => {
            return Err(miette!(
                "Never fully connected: {} circuits left after {} pairs",
                partition.sizes.len(),
                partition.processed
            ))
        }
    };

    let x = |id: usize| {
        points[id]
            .x()
            .map(i128::from)
            .ok_or_else(|| miette!("Junction box {} has no coordinates", id))
    };

    let result = x(connection.first)? * x(connection.second)?;
    Ok(result.to_string())
}
