/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use clap::ArgMatches;
use dibits::{Buffering, Newline};
use log::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdOptions {
    pub filepaths: Vec<PathBuf>,
    pub newline: Newline,
    pub buffering: Buffering,
    pub quiet: bool,
    pub stdout: bool,
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let buffering = if options.get_flag("no-buffer") {
        Buffering::Unbuffered
    } else {
        Buffering::Buffered
    };

    CmdOptions {
        filepaths: options
            .get_many::<PathBuf>("filepath")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default(),
        newline: options.get_one::<Newline>("newline").copied().unwrap_or_default(),
        buffering,
        quiet: options.get_flag("quiet"),
        stdout: options.get_flag("stdout"),
    }
}

pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("quiet") {
        Level::Error
    } else {
        Level::Info
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let level = log_level(options);

    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("embed_dibits: could not initialize logger: {e}");
        return;
    }

    log::debug!("Log level: {}", level);
}
