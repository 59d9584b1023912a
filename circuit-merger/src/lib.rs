pub mod circuits;
pub mod merger;
pub mod pairs;
pub mod part1;
pub mod part2;
pub mod point;
