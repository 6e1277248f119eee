use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

use monkey_viewer::commands;
use monkey_viewer::core::config::ViewerConfig;

fn build_cli() -> Command {
    let watch = Command::new("watch")
        .about("Open the live dashboard (default)")
        .args(commands::source_args())
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("SECS")
                .help("Auto-refresh interval in seconds")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("export-dir")
                .short('o')
                .long("export-dir")
                .value_name("PATH")
                .help("Directory downloads are saved to"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .help("Write logs here while the dashboard is open"),
        );

    Command::new("monkey-viewer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Watch your ForkMonkey evolve from the terminal")
        .subcommand(watch)
        .subcommand(
            Command::new("show")
                .about("Load once and print the monkey")
                .args(commands::source_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Load once and save the monkey as forkmonkey-<timestamp>.svg")
                .args(commands::source_args())
                .arg(
                    Arg::new("export-dir")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("Directory to save the SVG in"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Read or change saved settings (use 'monkey-viewer config --help')")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("get")
                        .about("Show all settings or a single key")
                        .arg(Arg::new("key").help("Setting name").index(1)),
                )
                .subcommand(
                    Command::new("set")
                        .about("Change a setting (empty value clears optional keys)")
                        .arg(Arg::new("key").help("Setting name").required(true).index(1))
                        .arg(Arg::new("value").help("New value").required(true).index(2)),
                )
                .subcommand(Command::new("reset").about("Restore default settings"))
                .subcommand(Command::new("path").about("Print the config file location")),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn init_logging_for(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("watch", sub_matches)) => {
            let path = match sub_matches.get_one::<String>("log-file") {
                Some(path) => PathBuf::from(path),
                None => ViewerConfig::default_log_path()?,
            };
            monkey_viewer::init_file_logging(&path)
        }
        None => monkey_viewer::init_file_logging(&ViewerConfig::default_log_path()?),
        _ => {
            monkey_viewer::init_logging();
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    init_logging_for(&matches)?;

    match matches.subcommand() {
        Some(("watch", sub_matches)) => commands::watch::execute(sub_matches),
        Some(("show", sub_matches)) => commands::show::execute(sub_matches),
        Some(("export", sub_matches)) => commands::export::execute(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("version", _)) => commands::version::execute(),
        _ => commands::watch::execute(&matches),
    }
}
