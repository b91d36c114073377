mod person;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use concordia_core::{profile_cache_key, synastry_cache_key, Concordia};
use concordia_types::{parse_iso_date, RelationshipType};
use person::PersonSpec;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Engine config (defaults to $CONCORDIA_CONFIG, then configs/concordia.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Natal chart for one birth moment.
    Profile {
        /// `DATE,HH:mm,LAT,LNG,OFFSET[,NAME]`
        person: PersonSpec,
    },
    /// All four pillars for one person.
    Pillars { person: PersonSpec },
    /// Compatibility report for two people.
    Synastry {
        a: PersonSpec,
        b: PersonSpec,
        #[arg(long, default_value = "romantic")]
        relationship: RelationshipType,
    },
    /// Daily volatility windows for two people.
    Project {
        a: PersonSpec,
        b: PersonSpec,
        /// First projected day (defaults to today, UTC).
        #[arg(long, value_parser = parse_start)]
        start: Option<NaiveDate>,
    },
}

fn parse_start(raw: &str) -> Result<NaiveDate, String> {
    parse_iso_date(raw).map_err(|e| e.to_string())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Keyed<T: Serialize> {
    cache_key: String,
    #[serde(flatten)]
    value: T,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn build_engine(config: Option<&PathBuf>) -> anyhow::Result<Concordia> {
    match config {
        Some(path) => {
            let settings = concordia_config::load_settings_from(path)?;
            Concordia::new(settings).context("Invalid synastry weight override")
        }
        None => Concordia::from_config(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let engine = build_engine(args.config.as_ref())?;

    match args.command {
        Command::Profile { person } => {
            let resolution = engine.resolve_chart(&person.birth).await;
            if resolution.is_degraded() {
                log::warn!("chart resolved by {:?} after failures", resolution.source);
            }
            print_json(&Keyed {
                cache_key: profile_cache_key(&person.birth),
                value: resolution,
            })
        }
        Command::Pillars { person } => {
            let pillars = engine.calculate_pillars(&person.birth, &person.name).await;
            print_json(&Keyed {
                cache_key: profile_cache_key(&person.birth),
                value: pillars,
            })
        }
        Command::Synastry { a, b, relationship } => {
            let pa = engine.calculate_pillars(&a.birth, &a.name).await;
            let pb = engine.calculate_pillars(&b.birth, &b.name).await;
            print_json(&Keyed {
                cache_key: synastry_cache_key(&a.birth, &b.birth, relationship),
                value: engine.score_synastry(&pa, &pb, relationship),
            })
        }
        Command::Project { a, b, start } => {
            let ca = engine.resolve_chart(&a.birth).await;
            let cb = engine.resolve_chart(&b.birth).await;
            let windows = match start {
                Some(start) => engine.project_temporal_window(&ca.profile, &cb.profile, start),
                None => engine.project_from_today(&ca.profile, &cb.profile),
            };
            print_json(&windows)
        }
    }
}
