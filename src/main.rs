// SPDX-License-Identifier: MPL-2.0
use seiswave_scanner::app::{self, paths, Flags};
use seiswave_scanner::config;

const HELP: &str = "\
SeisWaveScanner - launch scrttv over a chosen time window

USAGE:
  seiswave_scanner [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --print-config       Print the effective configuration and exit
  --dry-run            Log the viewer command instead of starting it
  -h, --help           Print this help and exit

ENVIRONMENT:
  SEISWAVE_SCANNER_CONFIG_DIR   Same as --config-dir
  RUST_LOG                      Log filter (default: info)
";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    print_config: bool,
    dry_run: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        print_config: args.contains("--print-config"),
        dry_run: args.contains("--dry-run"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(parsed))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(args.config_dir);

    if args.print_config {
        let (config, _) = config::load();
        match config::to_toml(&config) {
            Ok(text) => print!("{text}"),
            Err(err) => {
                log::error!("Could not serialize configuration: {err}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    app::run(Flags {
        lang: args.lang,
        dry_run: args.dry_run,
    })
}
