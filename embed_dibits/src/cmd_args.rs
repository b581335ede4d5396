/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Arg, ArgAction, Command, value_parser};
use dibits::Newline;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("embed_dibits")
        .about("Convert images to Win32 DIB pixel arrays (premultiplied ARGB DWORDs)")
        .after_help("example: embed_dibits box.png wall.png --stdout > sprites.h")
        .arg(Arg::new("filepath")
            .help("Image to convert to a C header file")
            .action(ArgAction::Append)
            .num_args(1..)
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("newline")
            .long("newline")
            .help("Use a specific newline mode")
            .value_parser(PossibleValuesParser::new(Newline::NAMES)
                .try_map(|name| name.parse::<Newline>()))
            .default_value("system"))
        .arg(Arg::new("no-buffer")
            .long("no-buffer")
            .action(ArgAction::SetTrue)
            .help("Write directly to files (slower, uses less memory)"))
        .arg(Arg::new("quiet")
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Do not print file -> target information"))
        .arg(Arg::new("stdout")
            .long("stdout")
            .action(ArgAction::SetTrue)
            .help("Print code to standard output instead of files"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
}
