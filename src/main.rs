//! tariff-scheduler entry point: CLI wiring, file I/O and report printing.

use std::process;

use anyhow::Context;
use tracing::Level;

use tariff_scheduler::cli::{self, CliCommand, CliOptions};
use tariff_scheduler::config::SchedulerConfig;
use tariff_scheduler::error::SchedulerError;
use tariff_scheduler::io::export::export_csv;
use tariff_scheduler::io::input::read_input;
use tariff_scheduler::io::output::write_output;
use tariff_scheduler::sim::engine::Engine;
use tariff_scheduler::sim::report::ScheduleReport;

fn load_config(opts: &CliOptions) -> Result<SchedulerConfig, SchedulerError> {
    let config = match opts.config {
        Some(ref path) => SchedulerConfig::from_toml_file(path)?,
        None => SchedulerConfig::default(),
    };

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(SchedulerError::Config(errors));
    }
    Ok(config)
}

fn run(opts: &CliOptions) -> anyhow::Result<()> {
    let config = load_config(opts)?;
    let input = read_input(&opts.input)?;

    let engine = Engine::new(input, config.dayparts);
    let run = engine.run();

    write_output(&opts.output, &run.output, config.output.pretty)?;

    if let Some(ref path) = opts.schedule_csv {
        export_csv(&run, engine.rates(), path).context("hourly export failed")?;
        eprintln!("Schedule CSV written to {}", path.display());
    }

    println!("{}", ScheduleReport::from_run(&run));
    eprintln!("Schedule written to {}", opts.output.display());
    Ok(())
}

fn main() {
    let opts = match cli::parse_args() {
        Ok(CliCommand::Run(opts)) => opts,
        Ok(CliCommand::Help) => {
            cli::print_usage();
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    let level = if opts.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&opts) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
