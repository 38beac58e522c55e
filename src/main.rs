// SPDX-License-Identifier: MPL-2.0
use shelf_lens::api::{BackendClient, BackendUrl};
use shelf_lens::app::{self, config, paths, Flags};
use shelf_lens::domain::ModelSlug;
use shelf_lens::logging;
use std::process::ExitCode;

const HELP: &str = "\
shelf_lens - browse a 3D model library

USAGE:
    shelf_lens [OPTIONS] [SLUG]

ARGS:
    <SLUG>              Model to open instead of the library list

OPTIONS:
    --backend <URL>     Backend base URL (overrides SHELF_LENS_BACKEND and settings.toml)
    --lang <LANG>       Interface language, e.g. en-US or fr
    --config-dir <DIR>  Directory holding settings.toml
    -h, --help          Print this help
";

struct Args {
    slug: Option<String>,
    backend: Option<String>,
    lang: Option<String>,
    config_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let backend = args.opt_value_from_str("--backend")?;
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let slug = args.opt_free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {rest:?}"),
        });
    }

    Ok(Some(Args {
        slug,
        backend,
        lang,
        config_dir,
    }))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(args.config_dir);
    let (config, config_warning) = config::load();
    logging::init(config.general.log_level.as_deref());

    let raw_url = config.resolve_backend_url(args.backend.as_deref());
    let client = match BackendUrl::parse(&raw_url)
        .and_then(|urls| BackendClient::new(urls, config.backend.request_timeout()))
    {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(url = %raw_url, error = %err, "backend client could not be created");
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let flags = Flags {
        lang: args.lang,
        slug: args.slug.map(ModelSlug::new),
        config,
        config_warning,
        client,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
