use std::path::{Path, PathBuf};

use eyre::Result;
use log::{debug, info};

mod cli;

use cli::Cli;
use ytdetails::config::{Config, config_path};
use ytdetails::pipeline::fetch_video_details;
use ytdetails::{DEFAULT_LANG, DEFAULT_WATCH_URL};

fn setup_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let log_file = log_dir.join("ytdetails.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .try_init()?;

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytdetails")
        .join("logs")
}

fn build_after_help() -> String {
    format!(
        "\nConfig is read from: {}\nLogs are written to: {}",
        config_path().display(),
        log_dir().join("ytdetails.log").display()
    )
}

fn emit(rendered: &str, output: Option<&PathBuf>, verbose: bool) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            if verbose {
                eprintln!("Output written to: {}", path.display());
            }
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Output must stay JSON even without a log file
    if let Err(e) = setup_logging(&log_dir()) {
        eprintln!("Logging disabled: {e}");
    }

    let cmd = <Cli as clap::CommandFactory>::command().after_help(build_after_help());
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    let Some(video_id) = cli.video_id.as_deref().and_then(ytdetails::resolve_video_id) else {
        return emit(&ytdetails::output::render_missing_video_id()?, cli.output.as_ref(), cli.verbose);
    };

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_else(|e| {
        debug!("Ignoring config: {e}");
        Config::default()
    });

    // CLI flags take priority over config, config over built-in defaults
    let lang = cli
        .lang
        .clone()
        .or_else(|| config.default_lang.clone())
        .unwrap_or_else(|| DEFAULT_LANG.to_string());
    let watch_url = config
        .watch_url
        .clone()
        .unwrap_or_else(|| DEFAULT_WATCH_URL.to_string());

    if cli.verbose {
        let path = config_path();
        if path.exists() {
            eprintln!("Config: {}", path.display());
        }
        eprintln!("Video: {video_id}\nLanguage: {lang}\nURL: {watch_url}{video_id}");
    }

    let fetch_config = config.fetch_config(cli.insecure);
    let result = fetch_video_details(&fetch_config, &watch_url, &video_id, &lang).await;
    emit(&ytdetails::output::render_json(&result)?, cli.output.as_ref(), cli.verbose)
}
