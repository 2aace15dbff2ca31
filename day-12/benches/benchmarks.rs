use day_12::*;

fn main() {
    divan::main();
}

/// Square garden of `size` rows with a few plant types in a jagged pattern.
fn generated_garden(size: usize) -> String {
    let plants = ['A', 'B', 'C', 'D', 'E'];
    let mut seed = 0x2024_1212_u32;
    let mut plant = plants[0];
    let mut input = String::with_capacity(size * (size + 1));
    for _ in 0..size {
        for _ in 0..size {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            // bias towards repeats so regions grow beyond single plots
            if seed % 4 == 0 {
                plant = plants[(seed as usize / 4) % plants.len()];
            }
            input.push(plant);
        }
        input.push('\n');
    }
    input
}

#[divan::bench(args = [10, 50, 140])]
fn part1(bencher: divan::Bencher, size: usize) {
    let input = generated_garden(size);
    bencher.bench(|| part1::process(divan::black_box(&input)).unwrap());
}

#[divan::bench(args = [10, 50, 140])]
fn part2(bencher: divan::Bencher, size: usize) {
    let input = generated_garden(size);
    bencher.bench(|| part2::process(divan::black_box(&input)).unwrap());
}

#[divan::bench]
fn parse_garden(bencher: divan::Bencher) {
    let input = generated_garden(140);
    bencher.bench(|| garden::Garden::parse(divan::black_box(&input)).unwrap());
}

#[divan::bench]
fn scan_regions(bencher: divan::Bencher) {
    let garden = garden::Garden::parse(&generated_garden(140)).unwrap();
    bencher.bench(|| region::RegionScanner::new(divan::black_box(&garden)).scan().unwrap());
}
