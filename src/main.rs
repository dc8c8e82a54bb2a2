// SPDX-License-Identifier: MPL-2.0
use iced_remote_image::app::{self, Flags};
use iced_remote_image::config::{self, Config};
use iced_remote_image::media::ImageLoader;
use iced_remote_image::ui::sizing::SizingSpec;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
Usage: iced_remote_image [OPTIONS] [URL]...

Shows each URL as a remote image tile.

Options:
  --width <PX>       Tile width
  --height <PX>      Tile height
  --squared          Crop tiles to a square
  --resizable        Scale images to fill the tile
  --config <PATH>    Settings file to use instead of the default one
  -h, --help         Print this help
";

struct Args {
    width: Option<f32>,
    height: Option<f32>,
    squared: bool,
    resizable: bool,
    config: Option<PathBuf>,
    urls: Vec<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Args {
        width: args.opt_value_from_str("--width")?,
        height: args.opt_value_from_str("--height")?,
        squared: args.contains("--squared"),
        resizable: args.contains("--resizable"),
        config: args.opt_value_from_str("--config")?,
        urls: args
            .finish()
            .into_iter()
            .filter_map(|arg: OsString| arg.into_string().ok())
            .collect(),
    }))
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        log::warn!("Using default settings: {err}");
        Config::default()
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let config = load_config(args.config.as_ref());
    let loader = match ImageLoader::from_config(&config) {
        Ok(loader) => loader,
        Err(err) => {
            log::error!("Cannot create the image loader: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut sizing = SizingSpec::new()
        .frame(args.width, args.height)
        .scale_factor(config.scale_factor());
    if args.squared {
        sizing = sizing.squared();
    }
    if args.resizable {
        sizing = sizing.resizable();
    }

    let flags = Flags {
        urls: args.urls,
        sizing,
        loader,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Gallery stopped: {err}");
            ExitCode::FAILURE
        }
    }
}
