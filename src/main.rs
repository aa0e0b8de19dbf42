use anyhow::Context;
use clap::Parser;

use calrange::args::Cli;
use calrange::config::Config;
use calrange::date::{format_range, Clock, SystemClock};
use calrange::logging::init_tracing;
use calrange::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let settings = cli.resolve(&config, SystemClock.today())?;
    let date_format = settings.date_format.clone();
    let range = runtime::run(settings, config.tick_rate()).context("running terminal UI")?;

    if let Some((start, end)) = range {
        println!("{}", format_range(start, end, &date_format));
    }
    Ok(())
}
