use clap::Parser;

use hybridmap::throughput::{compare, SweepConfig, DEFAULT_SIZES};

#[derive(Parser, Debug)]
#[command(about = "Times repeated lookups in HybridMap against an FxHashMap baseline")]
struct Cli {
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES, help = "Map sizes to measure.")]
    sizes: Vec<usize>,

    #[arg(long, default_value_t = 100_000, help = "Full sweeps per map.")]
    iterations: usize,

    #[arg(long, help = "Look keys up in a random order.")]
    shuffled: bool,

    #[arg(long, help = "Run sweeps on the rayon thread pool.")]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SweepConfig {
        iterations: cli.iterations,
        shuffled: cli.shuffled,
        parallel: cli.parallel,
    };

    println!(
        "{:>8} {:>12} {:>14} {:>12} {:>10}",
        "size", "container", "lookups", "total", "ns/lookup"
    );
    for size in cli.sizes {
        for m in compare(size, config)? {
            println!(
                "{:>8} {:>12} {:>14} {:>12.3?} {:>10.2}",
                m.size,
                m.container,
                m.lookups,
                m.elapsed,
                m.nanos_per_lookup()
            );
        }
    }

    Ok(())
}
