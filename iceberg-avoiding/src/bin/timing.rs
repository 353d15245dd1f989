use indicatif::{ProgressBar, ProgressStyle};
use miette::*;

use iceberg_avoiding::experiment::{self, ExperimentConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = ExperimentConfig::default();
    let bar = ProgressBar::new(config.sizes.clone().count() as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .into_diagnostic()?
            .progress_chars("##-"),
    );

    let measurements = experiment::run(&config, |m| {
        bar.set_message(format!("{0}x{0}", m.size));
        bar.inc(1);
    })?;
    bar.finish_and_clear();

    println!("{:>6} {:>22} {:>14} {:>22} {:>14}", "n", "exhaustive", "time", "dynamic", "time");
    for m in &measurements {
        let (exhaustive_paths, exhaustive_time) = match m.exhaustive {
            Some((paths, time)) => (paths.to_string(), format!("{:?}", time)),
            None => ("-".to_string(), "-".to_string()),
        };
        println!(
            "{:>6} {:>22} {:>14} {:>22} {:>14}",
            m.size,
            exhaustive_paths,
            exhaustive_time,
            m.dynamic.0,
            format!("{:?}", m.dynamic.1)
        );
    }
    Ok(())
}
