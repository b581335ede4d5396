/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::process::exit;

mod cmd_args;
mod options;
mod workflow;

fn main() {
    let matches = cmd_args::create_cmd_args().get_matches();

    options::setup_logger(&matches);

    let opts = options::parse_options(&matches);
    exit(workflow::run(&opts));
}
