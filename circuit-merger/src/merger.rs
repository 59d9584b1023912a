use tracing::{debug, info, trace};

use crate::circuits::{Circuits, Link};
use crate::pairs::{sorted_pairs, Pair};
use crate::point::{Point, SquaredDistance};

/// How many of the largest circuits make up the partition answer.
pub const LARGEST_CIRCUITS: usize = 3;

/// How many of the closest pairs to connect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionLimit {
    /// Keep connecting until every point is on one circuit.
    #[default]
    Unbounded,
    /// Connect exactly this many pairs (or all of them, if there are fewer).
    AtMost(usize),
}

impl ConnectionLimit {
    /// Non-positive limits connect nothing.
    pub fn from_signed(limit: i64) -> Self {
        if limit <= 0 {
            Self::AtMost(0)
        } else {
            Self::AtMost(usize::try_from(limit).unwrap_or(usize::MAX))
        }
    }
}

impl From<Option<usize>> for ConnectionLimit {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Self::Unbounded, Self::AtMost)
    }
}

/// The pair whose connection put every point on a single circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub first: usize,
    pub second: usize,
    /// Pairs processed up to and including this one.
    pub processed: usize,
    pub distance_squared: SquaredDistance,
}

impl Connection {
    pub fn distance(&self) -> f64 {
        self.distance_squared.sqrt()
    }
}

/// Circuits left once the pair list ran out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Circuit sizes, largest first.
    pub sizes: Vec<usize>,
    pub processed: usize,
}

impl Partition {
    /// Product of the `k` largest circuit sizes. With fewer than `k` circuits
    /// the existing ones are multiplied; with none the result is 1.
    pub fn product_of_largest(&self, k: usize) -> u64 {
        self.sizes.iter().take(k).map(|&size| size as u64).product()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unified(Connection),
    Partitioned(Partition),
}

impl Outcome {
    pub fn connection(&self) -> Option<&Connection> {
        match self {
            Outcome::Unified(connection) => Some(connection),
            Outcome::Partitioned(_) => None,
        }
    }

    pub fn partition(&self) -> Option<&Partition> {
        match self {
            Outcome::Unified(_) => None,
            Outcome::Partitioned(partition) => Some(partition),
        }
    }
}

/// Connects pairs of points closest first, one pair per [`Merger::step`].
pub struct Merger<'a> {
    points: &'a [Point],
    pairs: Vec<Pair>,
    cursor: usize,
    circuits: Circuits,
    limit: ConnectionLimit,
}

impl<'a> Merger<'a> {
    pub fn new(points: &'a [Point], limit: ConnectionLimit) -> Self {
        let mut pairs = sorted_pairs(points);
        if let ConnectionLimit::AtMost(max) = limit {
            pairs.truncate(max);
        }

        Self {
            points,
            pairs,
            cursor: 0,
            circuits: Circuits::new(points.len()),
            limit,
        }
    }

    /// Connects the next closest pair. `None` once the pair list is exhausted.
    pub fn step(&mut self) -> Option<(Pair, Link)> {
        let pair = *self.pairs.get(self.cursor)?;
        self.cursor += 1;

        let link = self.circuits.connect(pair.first, pair.second);
        trace!(first = pair.first, second = pair.second, ?link, "connected");
        Some((pair, link))
    }

    pub fn processed(&self) -> usize {
        self.cursor
    }

    pub fn circuits(&self) -> &Circuits {
        &self.circuits
    }

    /// Processes the remaining pairs.
    ///
    /// Without a limit the run stops on the first pair after which every point
    /// shares one circuit. Otherwise all allowed pairs are connected and the
    /// resulting circuits are returned.
    pub fn run(mut self) -> Outcome {
        let stop_when_unified = self.limit == ConnectionLimit::Unbounded;

        while let Some((pair, link)) = self.step() {
            if link == Link::Merged {
                debug!(
                    first = pair.first,
                    second = pair.second,
                    circuits = self.circuits.set_count(),
                    "merged circuits"
                );
            }

            if stop_when_unified && self.circuits.is_unified() {
                let connection = Connection {
                    first: pair.first,
                    second: pair.second,
                    processed: self.cursor,
                    distance_squared: pair.distance_squared,
                };
                info!(
                    first = ?self.points[pair.first].coords(),
                    second = ?self.points[pair.second].coords(),
                    processed = connection.processed,
                    distance = connection.distance(),
                    "all points on one circuit"
                );
                return Outcome::Unified(connection);
            }
        }

        let partition = Partition {
            sizes: self.circuits.circuit_sizes(),
            processed: self.cursor,
        };
        debug!(
            circuits = partition.sizes.len(),
            processed = partition.processed,
            "pairs exhausted"
        );
        Outcome::Partitioned(partition)
    }
}

/// Merges `points` into circuits, closest pairs first.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn process(points: &[Point], limit: ConnectionLimit) -> Outcome {
    Merger::new(points, limit).run()
}
