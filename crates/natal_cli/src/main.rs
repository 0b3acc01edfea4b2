//! Command-line front end for the natal chart pipeline.

use std::error::Error;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use natal_chart::{
    AspectConfig, ChartConfig, GeoMoment, compute_houses, compute_natal_chart, sign_position,
    Dms,
};
use natal_ephem::KeplerEphemeris;
use natal_report::{format_position, full_report, natal_report};
use natal_time::{TimeError, UtcTime};
use natal_transit::{TransitConfig, TransitRange, scan_transits};

#[derive(Parser)]
#[command(name = "natal", version, about = "Tropical natal charts and transits")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute and print a natal chart
    Natal(BirthArgs),
    /// Natal chart plus a slow-body transit scan over a date range
    Transit(TransitArgs),
    /// Zodiac sign and degree for an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        longitude: f64,
    },
    /// The 12 house cusp longitudes for a birth moment
    Cusps(BirthArgs),
    /// Render decimal degrees as degrees and arc-minutes
    Dms {
        /// Value in decimal degrees
        degrees: f64,
    },
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date/time, `YYYY-MM-DDThh:mm[:ss]`
    #[arg(long)]
    date: String,
    /// Latitude in decimal degrees, north positive
    #[arg(long)]
    lat: f64,
    /// Longitude in decimal degrees, east positive
    #[arg(long)]
    lon: f64,
    /// UTC offset of the birth time in hours; omit if the time is UTC
    #[arg(long, default_value_t = 0.0)]
    utc_offset: f64,
    /// Let the Ascendant and Midheaven participate in aspects
    #[arg(long)]
    include_axes: bool,
}

#[derive(Args)]
struct TransitArgs {
    #[command(flatten)]
    birth: BirthArgs,
    /// Range start, `YYYY-MM-DD` (interpreted at the birth time-of-day)
    #[arg(long)]
    from: String,
    /// Range end, `YYYY-MM-DD` (interpreted at the birth time-of-day)
    #[arg(long)]
    to: String,
}

impl BirthArgs {
    fn moment(&self) -> Result<GeoMoment, Box<dyn Error>> {
        let local: UtcTime = self.date.parse()?;
        let moment = GeoMoment::from_local(
            local.year,
            local.month,
            local.day,
            local.hour,
            local.minute,
            local.second,
            self.utc_offset,
            self.lat,
            self.lon,
        )?;
        Ok(moment)
    }

    fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            aspects: AspectConfig {
                include_axes: self.include_axes,
                ..AspectConfig::default()
            },
            ..ChartConfig::default()
        }
    }
}

/// Parse `YYYY-MM-DD` and attach the birth time-of-day and UTC offset, so
/// the range endpoints follow the same offset rule as the birth instant.
fn range_endpoint(date: &str, birth: &BirthArgs) -> Result<UtcTime, Box<dyn Error>> {
    let mut parts = date.splitn(3, '-');
    let mut field = |name: &str| -> Result<i64, TimeError> {
        let raw = parts
            .next()
            .ok_or_else(|| TimeError::Parse(format!("missing {name} in {date:?}")))?;
        raw.parse()
            .map_err(|_| TimeError::Parse(format!("invalid {name}: {raw:?}")))
    };
    let year = field("year")? as i32;
    let month = field("month")? as u32;
    let day = field("day")? as u32;

    let local: UtcTime = birth.date.parse()?;
    Ok(UtcTime::from_local(
        year,
        month,
        day,
        local.hour,
        local.minute,
        local.second,
        birth.utc_offset,
    )?)
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let ephemeris = KeplerEphemeris::new();

    match cli.command {
        Command::Natal(args) => {
            let chart = compute_natal_chart(&ephemeris, &args.moment()?, &args.chart_config())?;
            print!("{}", natal_report(&chart));
        }
        Command::Transit(args) => {
            let moment = args.birth.moment()?;
            let chart = compute_natal_chart(&ephemeris, &moment, &args.birth.chart_config())?;
            let range = TransitRange::new(
                range_endpoint(&args.from, &args.birth)?,
                range_endpoint(&args.to, &args.birth)?,
            )?;
            let transits = scan_transits(&ephemeris, &chart, &range, &TransitConfig::default())?;
            print!("{}", full_report(&chart, Some(&transits)));
        }
        Command::Sign { longitude } => {
            let (sign, dms) = sign_position(longitude);
            println!("{} -> {dms} {}", longitude, sign.name());
        }
        Command::Cusps(args) => {
            let wheel = compute_houses(&args.moment()?)?;
            println!("Ascendant: {}", format_position(wheel.ascendant_deg));
            println!("Midheaven: {}", format_position(wheel.midheaven_deg));
            for house in 1..=12u8 {
                println!(
                    "house {house:>2}: {}",
                    format_position(wheel.cusps.cusp(house))
                );
            }
            if wheel.high_latitude {
                println!("note: high latitude, houses unreliable");
            }
        }
        Command::Dms { degrees } => {
            println!("{}", Dms::from_degrees(degrees));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
