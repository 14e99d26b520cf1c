use std::path::PathBuf;
use std::time::Duration;

use clap::{value_parser, Arg, ArgMatches, Command};

use stoat_sat::config::Config;

pub fn cli() -> Command {
    Command::new("stoat_sat")
        .about("Determines whether a formula in clause text form is satisfiable")

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The clause text file to parse, one clause per line (e.g. 'p ~q r')."))

        .arg(Arg::new("model")
            .short('m')
            .long("model")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Display a satisfying assignment on finding a given formula is satisfiable."))

        .arg(Arg::new("table")
            .short('t')
            .long("table")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Display every atom of the formula against its value, unconstrained atoms included."))

        .arg(Arg::new("expansion_limit")
            .long("limit")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("A cap on the count of instances explored before reporting Unknown."))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("A cap on solve time, in seconds, before reporting Unknown."))
}

pub fn config_from_args(matches: &ArgMatches) -> Config {
    let mut config = Config::default();

    if let Some(limit) = matches.get_one::<usize>("expansion_limit") {
        config.expansion_limit = Some(*limit);
    }

    if let Some(seconds) = matches.get_one::<u64>("time_limit") {
        config.time_limit = Some(Duration::from_secs(*seconds));
    }

    config
}
