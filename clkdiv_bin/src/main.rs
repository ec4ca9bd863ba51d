//! Bench host for the gated clock divider.
//!
//! Feeds an enable pattern through a [`ClockDivider`], one reference tick per sample, and
//! prints the resulting waveform together with a half-period check of the output.
//!
//! # Usage
//!
//! ```sh
//! clkdiv_bin --divisor 8 --pattern 1111111111111111111100000000
//! ```

use clkdiv::{ClockDivider, WaveMonitor};

mod args;
mod wave;

use args::ArgsError;
use wave::Waveform;

/// Ticks per rendered block.
const WAVE_WIDTH: usize = 64;

fn main() {
    if let Err(e) = run() {
        eprintln!("clkdiv_bin: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ArgsError> {
    let argv: Vec<String> = std::env::args().collect();
    let args = args::parse_args(&argv)?;
    if args.help {
        print!("{}", args::USAGE);
        return Ok(());
    }

    clkdiv::init_tracing();

    let mut divider = ClockDivider::new(args.config)?;
    let mut monitor = WaveMonitor::new(args.config.divisor());
    let mut wave = Waveform::default();

    for _ in 0..args.repeat {
        for &enable in &args.pattern {
            let state = divider.state();
            let lines = divider.tick(enable);
            monitor.observe(lines);
            wave.push(enable, lines, state);
        }
    }

    print!("{}", wave.render(WAVE_WIDTH));
    println!();
    println!(
        "divisor {} (half period {}), idle {}",
        args.config.divisor(),
        args.config.half_period(),
        if args.config.idle_high() { "high" } else { "low" },
    );
    println!(
        "ticks {}, toggles {}, shortest run {}",
        monitor.ticks(),
        monitor.toggles(),
        monitor
            .shortest_run()
            .map_or_else(|| "-".to_owned(), |r| r.to_string()),
    );

    if monitor.is_clean() {
        println!("no run shorter than half a period");
    } else {
        for v in monitor.violations() {
            println!(
                "short {} run of {} tick(s) ending at tick {}",
                if v.level { "high" } else { "low" },
                v.run,
                v.tick
            );
        }
        let unlisted = monitor.violation_count() - monitor.violations().len();
        if unlisted > 0 {
            println!("... and {} more", unlisted);
        }
    }

    Ok(())
}
