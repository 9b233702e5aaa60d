use super::print::{print_approaches, print_config, print_messages, print_neo};
use super::setup::{Cli, Commands, QueryArgs};
use clap::Parser;
use directories::ProjectDirs;
use neoquery::api::{NeoApi, NeoSelector};
use neoquery::config::NeoConfig;
use neoquery::error::{NeoError, Result};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "NEOQUERY_HOME";
const LOG_ENV: &str = "NEOQUERY_LOG";
const PROJECT_DIR: &str = ".neoquery";

struct AppContext {
    config: NeoConfig,
    config_dir: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Inspect {
            pdes,
            name,
            approaches,
        } => handle_inspect(&ctx, pdes, name, approaches),
        Commands::Query(args) => handle_query(&ctx, &args),
        Commands::Config => handle_config(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "neoquery=debug"
    } else {
        "neoquery=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Config directories in lookup order: `$NEOQUERY_HOME`, `./.neoquery`, then
/// the per-user config directory.
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(home) = std::env::var_os(HOME_ENV) {
        candidates.push(PathBuf::from(home));
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    candidates.push(cwd.join(PROJECT_DIR));
    if let Some(dirs) = ProjectDirs::from("com", "neoquery", "neoquery") {
        candidates.push(dirs.config_dir().to_path_buf());
    }
    candidates
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let candidates = config_candidates();
    let config_dir = NeoConfig::find_dir(candidates.iter().map(PathBuf::as_path));
    let mut config = match &config_dir {
        Some(dir) => NeoConfig::load(dir)?,
        None => NeoConfig::default(),
    };
    debug!(config_dir = ?config_dir, "loaded configuration");

    if let Some(neofile) = &cli.neofile {
        config.neo_file = neofile.clone();
    }
    if let Some(cadfile) = &cli.cadfile {
        config.cad_file = cadfile.clone();
    }

    Ok(AppContext { config, config_dir })
}

fn load_api(ctx: &AppContext) -> Result<NeoApi> {
    NeoApi::from_files(&ctx.config.neo_file, &ctx.config.cad_file)
}

fn handle_inspect(
    ctx: &AppContext,
    pdes: Option<String>,
    name: Option<String>,
    with_approaches: bool,
) -> Result<()> {
    let selector = match (pdes, name) {
        (Some(pdes), _) => NeoSelector::Designation(pdes),
        (None, Some(name)) => NeoSelector::Name(name),
        (None, None) => {
            return Err(NeoError::Api(
                "Either a designation or a name is required".into(),
            ))
        }
    };

    let api = load_api(ctx)?;
    let result = api.inspect(&selector, with_approaches)?;
    if let Some(neo) = result.neo {
        print_neo(neo);
    }
    print_approaches(&result.approaches);
    print_messages(&result.messages);
    Ok(())
}

fn handle_query(ctx: &AppContext, args: &QueryArgs) -> Result<()> {
    let criteria = args.criteria();
    let api = load_api(ctx)?;

    let result = match &args.outfile {
        Some(outfile) => {
            let path = ctx.config.output_path(outfile);
            api.export(&criteria, args.limit, &path)?
        }
        None => {
            let limit = args.limit.unwrap_or(ctx.config.display_limit);
            let result = api.query(&criteria, Some(limit))?;
            print_approaches(&result.approaches);
            result
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    match &ctx.config_dir {
        Some(dir) => println!("# {}", dir.display()),
        None => println!("# defaults (no config.json found)"),
    }
    print_config(&ctx.config);
    Ok(())
}
