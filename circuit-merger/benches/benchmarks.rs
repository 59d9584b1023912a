use circuit_merger::*;

fn main() {
    // Run registered benchmarks.
    divan::main();
}

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(include_str!("../input1.txt"))).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(include_str!("../input2.txt"))).unwrap();
}

#[divan::bench(args = [10, 100, 1000])]
fn sorted_pairs(n: usize) {
    let points = point::parse_points(include_str!("../input1.txt"))
        .unwrap()
        .into_iter()
        .take(n)
        .collect::<Vec<_>>();
    pairs::sorted_pairs(divan::black_box(&points));
}
