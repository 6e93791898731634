mod config;
mod error;
mod format;
mod load;
mod models;
mod pipeline;
mod report;
mod run;
mod session;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_flag, args) = run::take_flag(&args, "--data")?;

    if args.is_empty() {
        run::print_usage();
        return Ok(());
    }

    let config = config::Config::resolve(data_flag.as_deref())?;
    run::as_cli(&args, &config)
}
