use clap::Parser;
use rand::Rng;

use sample_set::SampleSet;

#[derive(Parser)]
struct Args {
    /// initial number of members
    #[arg(short, long, default_value_t = 1000)]
    members: u32,
    /// random insert/remove operations to apply
    #[arg(short, long, default_value_t = 100_000)]
    operations: u32,
    /// samples to draw for the frequency report
    #[arg(short, long, default_value_t = 1_000_000)]
    samples: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        members,
        operations,
        samples,
    } = Args::parse();

    let mut rng = rand::rng();
    let mut set: SampleSet<u32> = (0..members).collect();

    let start = std::time::Instant::now();
    for _ in 0..operations {
        let value = rng.random_range(0..members * 2);
        if rng.random_bool(0.5) {
            set.insert(value);
        } else {
            set.remove(&value);
        }
    }
    eprintln!(
        "{operations} operations in {}s, {} members left",
        start.elapsed().as_secs_f32(),
        set.len()
    );

    let start = std::time::Instant::now();
    let mut counts = vec![0u32; (members * 2) as usize];
    for _ in 0..samples {
        counts[*set.sample()? as usize] += 1;
    }
    eprintln!("{samples} samples in {}s", start.elapsed().as_secs_f32());

    let hits = counts.iter().filter(|&&c| c > 0).count();
    let (min, max) = counts
        .iter()
        .filter(|&&c| c > 0)
        .fold((u32::MAX, 0), |(lo, hi), &c| (lo.min(c), hi.max(c)));
    println!("expected {} draws per member", samples / set.len() as u32);
    println!("observed {hits} distinct members, min {min}, max {max}");

    Ok(())
}
