// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::ffi::OsString;
use std::io::stdout;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use greeter::{io::greet, logger};

/// Prints two fixed greetings. Every argument is accepted and ignored.
#[derive(Debug, Parser)]
#[command(
    name = env!("CARGO_CRATE_NAME"),
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct App {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<OsString>,
}

fn main() -> Result<()> {
    let args = App::parse();
    logger::init_cli_logger();
    if !args.ignored.is_empty() {
        debug!(ignored = ?args.ignored, "ignoring arguments");
    }

    info!("starting");
    greet(&mut stdout().lock())?;
    info!("done");

    Ok(())
}
