use std::env;
use std::error::Error;
use std::thread;
use std::time::Duration;

use crossbeam_channel::bounded;
use log::{debug, LevelFilter};

use sortviz::{
    Algorithm, ChannelSink, Never, OwnedFrame, Paced, Runner, SortConfig, SortOutcome,
    DEFAULT_FRAME_DELAY_MS, MAX_ELEMENTS, MIN_ELEMENTS,
};

fn print_help(config: &SortConfig) {
    println!("\nUsage: sortviz [algorithm] [elements] [frame-delay-ms] [seed]\n");
    println!(" algorithm          sorting method, name or number (default: {})", config.algorithm);
    println!(" elements           number of elements to sort, {MIN_ELEMENTS}..={MAX_ELEMENTS} (default: {})", config.elements);
    println!(" frame-delay-ms     delay after each frame (default: {DEFAULT_FRAME_DELAY_MS})");
    println!(" seed               seed for the initial shuffle (default: {})", config.seed);
    println!(" -h, --help         display this help page and exit\n");
    println!("Sorting methods:");
    print!("{}", Algorithm::help());
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut config = SortConfig::default();
    let mut frame_delay = Duration::from_millis(DEFAULT_FRAME_DELAY_MS);

    let mut args = env::args();
    args.next();

    if let Some(arg) = args.next() {
        if arg == "-h" || arg == "--help" {
            print_help(&config);
            return Ok(());
        }
        match arg.parse::<Algorithm>() {
            Ok(algorithm) => config.algorithm = algorithm,
            Err(e) => eprintln!("{e}. Defaulting to {}.", config.algorithm),
        }
    }
    if let Some(arg) = args.next() {
        match arg.parse::<usize>() {
            Ok(n) if config.elements(n).validate().is_ok() => config.elements = n,
            _ => eprintln!("Invalid number of elements. Defaulting to {}.", config.elements),
        }
    }
    if let Some(arg) = args.next() {
        match arg.parse::<u64>() {
            Ok(ms) => frame_delay = Duration::from_millis(ms),
            Err(_) => eprintln!("Invalid frame delay. Defaulting to {} ms.", frame_delay.as_millis()),
        }
    }
    if let Some(arg) = args.next() {
        match arg.parse::<u64>() {
            Ok(seed) => config.seed = seed,
            Err(_) => eprintln!("Invalid seed. Defaulting to {}.", config.seed),
        }
    }

    let runner = Runner::new(config)?;
    let mut seq = runner.sequence()?;

    // stands in for a renderer: takes each frame as soon as it is emitted
    let (tx, rx) = bounded::<OwnedFrame>(0);
    let renderer = thread::spawn(move || {
        let mut frames = 0u64;
        for frame in rx {
            frames += 1;
            debug!(
                "frame {frames}: accessed {:?}, {} comparisons, {} swaps",
                frame.accessed, frame.counters.comparisons, frame.counters.swaps
            );
        }
        frames
    });

    let mut sink = Paced::new(ChannelSink::new(tx), frame_delay);
    let outcome = runner.run(&mut seq, &mut sink, &Never)?;
    drop(sink);
    let rendered = renderer.join().map_err(|_| "renderer thread panicked")?;
    debug!("Renderer received {rendered} frames");

    let report = outcome.report();
    match outcome {
        SortOutcome::Completed(_) if report.sorted => println!("\nSorted!\n"),
        SortOutcome::Completed(_) => eprintln!("\nError: Sorting Failure!\n"),
        SortOutcome::Cancelled(_) => println!("\nExiting.\n"),
    }
    println!("Total comparisons: {}", report.counters.comparisons);
    println!("Total swaps: {}", report.counters.swaps);
    Ok(())
}
