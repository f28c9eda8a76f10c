use crate::cli::DemoArgs;
use crate::interrupt;
use anyhow::{Result, bail};
use multispin::{SpinnerConfig, SpinnerSet};
use rand::Rng;
use std::thread;
use std::time::Duration;

/// Run `args.tasks` simulated tasks concurrently, one spinner each.
pub(crate) fn demo(config: SpinnerConfig, args: &DemoArgs) -> Result<()> {
    if args.min_ms > args.max_ms {
        bail!(
            "--min-ms ({}) must not exceed --max-ms ({})",
            args.min_ms,
            args.max_ms
        );
    }

    let spinners = SpinnerSet::new(config)?;
    interrupt::init(spinners.restore_handle())?;
    let tasks: Vec<usize> = (0..args.tasks).map(|_| spinners.register()).collect();
    tracing::debug!(tasks = tasks.len(), "Starting demo tasks");

    let mut rng = rand::rng();
    thread::scope(|s| {
        for &index in &tasks {
            let spinners = &spinners;
            let duration = Duration::from_millis(rng.random_range(args.min_ms..=args.max_ms));
            let fails = !args.all_succeed && args.fail.contains(&index);
            s.spawn(move || run_task(spinners, index, duration, fails));
        }
    });

    spinners.shutdown()?;
    println!("\nAll tasks completed!");
    Ok(())
}

fn run_task(spinners: &SpinnerSet, index: usize, duration: Duration, fails: bool) {
    let task = index + 1;
    spinners.start(index, &format!("Task {task}: Processing..."));

    let halfway = duration / 2;
    thread::sleep(halfway);
    spinners.message(index, &format!("Task {task}: Almost there..."));
    thread::sleep(duration.saturating_sub(halfway));

    if fails {
        spinners.stop_with_error(index, &format!("Task {task}: Failed with error"));
    } else {
        spinners.stop(index, &format!("Task {task}: Completed successfully"));
    }
}
