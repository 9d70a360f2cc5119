//! calcw: calculator widget CLI
//!
//! ## Usage
//!
//! ```bash
//! calcw press "12+30="          # Replay keypad presses
//! calcw press "5/0=" --json     # Final state as JSON
//! calcw eval 10 / 4             # Result: 10 / 4 = 2.5
//! calcw prompt                  # Ask on stdin
//! calcw config                  # Show effective configuration
//! ```

use calc_widget_cli::{
    handlers::{execute_config, execute_eval, execute_press, execute_prompt},
    logging, Cli, CliConfig, CliResult, Commands, Reporter, Verbosity,
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet())
        .with_stderr_color(config.color.should_color_stderr());
    logging::init(config.verbosity, reporter.stderr_color);

    match run(cli.command, &config, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &CliConfig, reporter: &Reporter) -> CliResult<()> {
    match command {
        Commands::Press(args) => execute_press(&config.widget, reporter, &args),
        Commands::Eval(args) => execute_eval(&args),
        Commands::Prompt => execute_prompt(),
        Commands::Config(args) => execute_config(config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let mut config = CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.clone().into());
    if let Some(ms) = cli.error_clear_ms {
        config = config.with_error_clear_delay_ms(ms);
    }
    config
}
