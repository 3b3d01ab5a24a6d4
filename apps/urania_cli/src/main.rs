use anyhow::{bail, Context};
use chrono::FixedOffset;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use urania::chart::{format_longitude, DegreeStyle};
use urania::ephemeris::{local_to_utc, parse_datetime, ChartSnapshot, StaticTimeZoneDb};
use urania::{ChartConfig, ChartEngine};

#[derive(Parser, Debug)]
#[command(author, version, about = "Aspect detection and chart wheel projection")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve aspects for a chart snapshot (JSON) and print them.
    Chart {
        /// Chart snapshot as produced by an ephemeris (bodies + houses).
        snapshot: PathBuf,

        /// Chart config TOML (default: configs/chart.toml if present).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write degrees as "deg" instead of the degree sign.
        #[arg(long)]
        ascii: bool,

        /// Also write the render spec as JSON.
        #[arg(long)]
        spec_out: Option<PathBuf>,

        /// Also write the projected wheel geometry as JSON.
        #[arg(long)]
        geometry_out: Option<PathBuf>,
    },
    /// Convert a local birth time to UTC.
    Utc {
        /// "YYYY-MM-DD HH:MM[:SS]"
        local: String,

        /// Zone id to convert from.
        #[arg(long, default_value = "UTC")]
        zone: String,

        /// Zone table entries, NAME=+HH:MM (repeatable).
        #[arg(long = "define-zone")]
        zones: Vec<String>,
    },
    /// Write the default chart config to a file.
    InitConfig {
        #[arg(default_value = "configs/chart.toml")]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.command {
        Command::Chart {
            snapshot,
            config,
            ascii,
            spec_out,
            geometry_out,
        } => run_chart(&snapshot, config.as_deref(), ascii, spec_out, geometry_out),
        Command::Utc { local, zone, zones } => {
            let db = zone_table(&zones)?;
            let naive = parse_datetime(&local)?;
            let utc = local_to_utc(&db, &zone, naive)
                .with_context(|| format!("converting {local} in {zone}"))?;
            println!("{}", utc.to_rfc3339());
            Ok(())
        }
        Command::InitConfig { path } => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            ChartConfig::default().save(&path)?;
            log::info!("wrote default config to {}", path.display());
            Ok(())
        }
    }
}

fn run_chart(
    snapshot_path: &Path,
    config_path: Option<&Path>,
    ascii: bool,
    spec_out: Option<PathBuf>,
    geometry_out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let mut config = match config_path {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::load_default()?,
    };
    if ascii {
        config.degree_style = DegreeStyle::Ascii;
    }

    let engine = ChartEngine::new();
    let output = engine.run(&snapshot, &config)?;
    let style = config.degree_style;

    println!("Positions");
    for body in &snapshot.bodies {
        println!(
            "  {:<10} {:<28} {}",
            body.id.name(),
            format_longitude(body.longitude, style),
            if body.retrograde { "R" } else { "" }
        );
    }

    println!("Houses ({})", snapshot.houses.system.display_name());
    for (i, cusp) in snapshot.houses.cusps.iter().enumerate() {
        println!("  House {:<3} {}", i + 1, format_longitude(*cusp, style));
    }

    println!("Aspects");
    for edge in output.aspects.matched() {
        if let Some(m) = &edge.matched {
            println!(
                "  {:<10} {:<15} {:<10} orb {:.2} (allowed {:.2})",
                edge.point_a, m.label, edge.point_b, m.delta, m.allowed_orb
            );
        }
    }

    if let Some(path) = geometry_out {
        let json = serde_json::to_string_pretty(&output.geometry)?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = spec_out {
        let spec = engine.render_output(&output, &config);
        fs::write(&path, spec.to_json()?).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn load_snapshot(path: &Path) -> anyhow::Result<ChartSnapshot> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading chart snapshot {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing chart snapshot {}", path.display()))
}

fn zone_table(entries: &[String]) -> anyhow::Result<StaticTimeZoneDb> {
    let mut db = StaticTimeZoneDb::new();
    for entry in entries {
        let Some((name, offset)) = entry.split_once('=') else {
            bail!("zone entry '{entry}' must look like NAME=+HH:MM");
        };
        db.insert(name.trim(), parse_offset(offset.trim())?);
    }
    Ok(db)
}

fn parse_offset(text: &str) -> anyhow::Result<FixedOffset> {
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'+') => (1, &text[1..]),
        Some(b'-') => (-1, &text[1..]),
        _ => bail!("offset '{text}' must start with + or -"),
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    let hours: i32 = hours.parse().with_context(|| format!("bad hours in '{text}'"))?;
    let minutes: i32 = minutes.parse().with_context(|| format!("bad minutes in '{text}'"))?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .with_context(|| format!("offset '{text}' out of range"))
}
