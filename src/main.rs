// SPDX-License-Identifier: MPL-2.0
use lastkings_ui::app::{self, Flags};
use std::process::ExitCode;

const HELP: &str = "\
LastKings POS register

USAGE:
  lastkings_ui [OPTIONS]

OPTIONS:
  --config-dir <DIR>    Directory holding settings.toml
  --flash <KIND:TEXT>   Banner shown at startup (repeatable);
                        KIND is success, error, warning or info
  --status <TEXT>       Initial status line text
  --log-level <LEVEL>   off, error, warn, info, debug or trace [default: info]
  -h, --help            Print this help
";

struct Args {
    flags: Flags,
    log_level: log::LevelFilter,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        flags: Flags {
            config_dir: args.opt_value_from_str("--config-dir")?,
            flashes: args.values_from_str("--flash")?,
            status: args.opt_value_from_str("--status")?,
        },
        log_level: args
            .opt_value_from_str("--log-level")?
            .unwrap_or(log::LevelFilter::Info),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: unused arguments left: {rest:?}");
    }

    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(args.log_level)
        .with_colors(true)
        .with_local_timestamps()
        .init()
    {
        eprintln!("Failed to initialise logging: {err}");
    }

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Application error: {err}");
            ExitCode::FAILURE
        }
    }
}
