use chumsky::prelude::*;
use miette::*;

/// A junction box: its position in the input plus integer coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    id: usize,
    coords: Vec<i64>,
}

impl Point {
    pub fn new(id: usize, coords: Vec<i64>) -> Self {
        Self { id, coords }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// First coordinate, if the point has any.
    pub fn x(&self) -> Option<i64> {
        self.coords.first().copied()
    }

    /// Exact squared Euclidean distance.
    ///
    /// Sorting by this value gives the same order as sorting by the L2 norm,
    /// without the rounding a square root would introduce. Coordinates beyond
    /// the shorter point's dimension are ignored.
    pub fn distance_squared(&self, other: &Point) -> SquaredDistance {
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(&a, &b)| {
                // At most (2^64 - 1)^2, which still fits in a u128.
                let delta = (i128::from(a) - i128::from(b)).unsigned_abs();
                delta * delta
            })
            .fold(SquaredDistance::default(), SquaredDistance::with_term)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// A sum of squared `i64` differences, kept exact.
///
/// One squared difference fits in a `u128` but a sum of them may not, so
/// carries out of the low word are counted in `high`. Field order makes the
/// derived `Ord` compare `high` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SquaredDistance {
    high: u64,
    low: u128,
}

impl SquaredDistance {
    pub const fn new(value: u128) -> Self {
        Self { high: 0, low: value }
    }

    fn with_term(self, term: u128) -> Self {
        let (low, carry) = self.low.overflowing_add(term);
        Self {
            high: self.high + u64::from(carry),
            low,
        }
    }

    /// The L2 norm, rounded to the nearest `f64`.
    pub fn sqrt(self) -> f64 {
        (self.high as f64 * 2f64.powi(128) + self.low as f64).sqrt()
    }
}

type Row = (Vec<i64>, SimpleSpan);

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Row>, extra::Err<Rich<'a, char>>> {
    let coord = just('-')
        .or_not()
        .then(any().filter(char::is_ascii_digit).repeated().at_least(1))
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<i64>()
                .map_err(|e| Rich::custom(span, format!("coordinate `{digits}`: {e}")))
        })
        .padded_by(text::inline_whitespace());

    let row = coord
        .separated_by(just(','))
        .at_least(1)
        .collect::<Vec<i64>>()
        .map_with(|coords, e| (coords, e.span()));

    row.separated_by(text::newline())
        .allow_trailing()
        .collect()
        .padded()
}

fn parse_failure(input: &str, errors: &[Rich<'_, char>]) -> Report {
    let labels = errors
        .iter()
        .map(|e| LabeledSpan::at(e.span().start..e.span().end, e.to_string()))
        .collect::<Vec<_>>();

    miette!(
        labels = labels,
        help = "every line must be a comma-separated list of integers",
        "Parse failed with {} error(s)",
        errors.len()
    )
    .with_source_code(input.to_string())
}

/// Parses one point per line, numbering points by their line order.
///
/// All rows must share the dimensionality of the first one. An empty input
/// yields no points.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let rows = parser()
        .parse(input)
        .into_result()
        .map_err(|errors| parse_failure(input, &errors))?;

    let Some(dimension) = rows.first().map(|(coords, _)| coords.len()) else {
        return Ok(Vec::new());
    };

    if let Some((coords, span)) = rows.iter().find(|(coords, _)| coords.len() != dimension) {
        return Err(miette!(
            labels = vec![LabeledSpan::at(
                span.start..span.end,
                format!("{} coordinates here", coords.len())
            )],
            "Inconsistent dimensionality: expected {} coordinates per point",
            dimension
        )
        .with_source_code(input.to_string()));
    }

    let points = rows
        .into_iter()
        .enumerate()
        .map(|(id, (coords, _))| Point::new(id, coords))
        .collect::<Vec<_>>();

    tracing::debug!(count = points.len(), dimension, "parsed points");
    Ok(points)
}
