use anyhow::Result;
use clap::{crate_version, App, Arg, ArgMatches};
use log::*;
use std::path::Path;
use task_views::{
    config::{ConfigLoader, ConfigSource, ModeName, QueueConfiguration, Settings},
    error::{AppError, AppResult},
    logger,
    model::{Snapshot, ViewOption},
    views::{calendar, ViewCatalogs, ViewContext},
};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = App::new("task-views")
        .version(crate_version!())
        .about("Review a task queue by project, priority, label, due date and presets")
        .arg(
            Arg::with_name("snapshot")
                .long("snapshot")
                .short("s")
                .value_name("FILE")
                .help("JSON snapshot of tasks, projects and labels")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .short("c")
                .value_name("URL|PATH")
                .help("Queue configuration document, overriding the settings file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("settings")
                .long("settings")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("mode")
                .long("mode")
                .short("m")
                .value_name("MODE")
                .help("Only print the catalog of this mode")
                .possible_values(&ModeName::MODES.map(ModeName::as_str))
                .takes_value(true),
        )
        .arg(
            Arg::with_name("today")
                .long("today")
                .value_name("YYYY-MM-DD")
                .help("Compute date buckets relative to this day")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print catalogs as JSON"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase log verbosity"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
        .get_matches();

    logger::init(logger::level_for(
        matches.occurrences_of("verbose"),
        matches.is_present("quiet"),
    ))?;
    run(&matches).await?;
    Ok(())
}

async fn run(matches: &ArgMatches<'_>) -> AppResult<()> {
    let settings = Settings::load(matches.value_of("settings"))?;
    let config = load_configuration(matches.value_of("config"), &settings).await;

    let snapshot_path = matches
        .value_of("snapshot")
        .ok_or_else(|| AppError::InvalidArgument("--snapshot is required".to_string()))?;
    let snapshot = Snapshot::from_path(Path::new(snapshot_path))?;

    let mut ctx = ViewContext::from_snapshot(&snapshot)
        .with_excluded_labels(&settings.excluded_labels)
        .with_project_metadata(settings.project_metadata.clone());
    if let Some(raw) = matches.value_of("today") {
        let today = calendar::parse_day(raw)
            .ok_or_else(|| AppError::InvalidArgument(format!("--today {}", raw)))?;
        ctx = ctx.with_today(today);
    }
    let mode = match matches.value_of("mode") {
        Some(raw) => Some(
            ModeName::parse(raw)
                .ok_or_else(|| AppError::InvalidArgument(format!("--mode {}", raw)))?,
        ),
        None => None,
    };

    let catalogs = ViewCatalogs::build(&ctx, &config);
    if matches.is_present("json") {
        let output = match mode {
            Some(mode) => serde_json::to_string_pretty(catalogs.options(mode))?,
            None => serde_json::to_string_pretty(&catalogs)?,
        };
        println!("{}", output);
    } else {
        let modes = match mode {
            Some(mode) => vec![mode],
            None => ModeName::MODES.to_vec(),
        };
        for mode in modes {
            print_catalog(mode, catalogs.options(mode));
        }
    }
    Ok(())
}

/// The command line wins over the settings file. Without either, the
/// compiled-in configuration is used.
///
async fn load_configuration(flag: Option<&str>, settings: &Settings) -> QueueConfiguration {
    match flag.or(settings.config_source.as_deref()) {
        Some(location) => {
            ConfigLoader::from_source(ConfigSource::parse(location))
                .load()
                .await
        }
        None => {
            info!("No configuration source set, using default queue configuration");
            QueueConfiguration::default()
        }
    }
}

fn print_catalog(mode: ModeName, options: &[ViewOption]) {
    println!("{}", mode);
    for option in options {
        println!(
            "  {}{} ({}){}",
            "  ".repeat(option.indent),
            option.label,
            option.count,
            if option.metadata.is_wildcard() { " *" } else { "" }
        );
    }
}
