use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser, Subcommand};
use neoquery::filters::Criteria;
use neoquery::helpers::parse_date;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "neoquery", bin_name = "neoquery", version = get_version())]
#[command(about = "Explore near-Earth objects and their close approaches to Earth", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// CSV file of near-Earth objects (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub neofile: Option<PathBuf>,

    /// JSON file of close approaches (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub cadfile: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one near-Earth object
    #[command(alias = "i")]
    #[command(group(ArgGroup::new("selector").required(true).args(["pdes", "name"])))]
    Inspect {
        /// Primary designation, e.g. 433
        #[arg(short, long)]
        pdes: Option<String>,

        /// IAU name, e.g. Eros
        #[arg(short, long)]
        name: Option<String>,

        /// Also list its close approaches
        #[arg(short, long)]
        approaches: bool,
    },

    /// Find close approaches matching every given criterion
    #[command(alias = "q")]
    Query(QueryArgs),

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = cli_date)]
    pub date: Option<NaiveDate>,

    /// Approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = cli_date)]
    pub start_date: Option<NaiveDate>,

    /// Approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = cli_date)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long, value_name = "AU", allow_negative_numbers = true)]
    pub min_distance: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long, value_name = "AU", allow_negative_numbers = true)]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity in km/s
    #[arg(long, value_name = "KM_S", allow_negative_numbers = true)]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity in km/s
    #[arg(long, value_name = "KM_S", allow_negative_numbers = true)]
    pub max_velocity: Option<f64>,

    /// Minimum object diameter in km
    #[arg(long, value_name = "KM", allow_negative_numbers = true)]
    pub min_diameter: Option<f64>,

    /// Maximum object diameter in km
    #[arg(long, value_name = "KM", allow_negative_numbers = true)]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous objects
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only objects that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results (0 means no limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write results to this .csv or .json file in the output directory
    #[arg(short, long, value_name = "FILE")]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    pub fn criteria(&self) -> Criteria {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };
        Criteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous,
        }
    }
}

fn cli_date(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}
