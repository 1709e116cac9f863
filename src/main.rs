// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use log::LevelFilter;
use showcase_carousel::app::{self, paths, Flags};
use showcase_carousel::config::ForcedMode;

const HELP: &str = "\
Showcase carousel

USAGE:
  showcase_carousel [OPTIONS]

OPTIONS:
  --mode <compact|wide>  Pin the presentation instead of following the window width
  --catalog <PATH>       Load showcase items from a TOML file
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help

ENVIRONMENT:
  SHOWCASE_CAROUSEL_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG                      Log filter (env_logger syntax)
";

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("showcase_carousel", LevelFilter::Info)
        .init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        mode: args.opt_value_from_str::<_, ForcedMode>("--mode")?,
        catalog_path: args.opt_value_from_str("--catalog")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", remaining);
    }
    Ok(flags)
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
