use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::Layer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod ui;

use commands::Ctx;

#[derive(Parser)]
#[command(
    name = "phonemic",
    version,
    about = "Phonemic inventory analyzer: validate elementary-segment mappings and compare languages"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Only warnings and errors on the console
    #[arg(long, global = true)]
    quiet: bool,

    /// Cache file to load from and save to
    #[arg(long, global = true, conflicts_with = "no_cache")]
    cache: Option<PathBuf>,

    /// Work on the seed dataset in memory, never touching the cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List languages in the collection
    List {
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Show one language (id or name)
    Show {
        language: String,
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Run completeness, minimality and complexity checks
    Validate {
        /// Language id or name; all languages when omitted
        language: Option<String>,
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Jaccard and functional similarity of elementary inventories
    Compare {
        /// Both or neither; without them every pair is compared
        #[arg(num_args = 0..=2)]
        languages: Vec<String>,
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Symbol counts across the collection
    Overview {
        #[arg(long, default_value = "all", value_parser = ["all", "vowels", "consonants"])]
        class: String,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Feature matrix of a language's elementary segments
    Features {
        language: String,
        /// Highlight segments carrying this feature
        #[arg(long)]
        feature: Option<String>,
        #[arg(long, default_value = "plus", value_parser = ["plus", "minus"])]
        polarity: String,
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Add a language
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        family: String,
        #[arg(long)]
        iso: Option<String>,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lon: f64,
        /// Space or comma separated
        #[arg(long, default_value = "")]
        surface: String,
        #[arg(long, default_value = "")]
        elementary: String,
        #[arg(long, default_value = "")]
        suprasegmentals: String,
        #[arg(long, default_value_t = 0)]
        features: u32,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a language
    Delete { language: String },

    /// Edit a language; all changes are saved together
    Edit {
        language: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        family: Option<String>,
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
        #[arg(long)]
        surface: Option<String>,
        #[arg(long)]
        elementary: Option<String>,
        #[arg(long)]
        suprasegmentals: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// SURFACE=ELEMENTARY[=NOTES]
        #[arg(long = "add-mapping")]
        add_mapping: Vec<String>,
        /// INDEX.FIELD=VALUE, field is surface, elementary or notes
        #[arg(long = "set-mapping")]
        set_mapping: Vec<String>,
        /// Mapping index to remove (applied after --set-mapping)
        #[arg(long = "remove-mapping")]
        remove_mapping: Vec<usize>,
    },

    /// Write the blank CSV analysis template
    ExportTemplate {
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "out")]
        stdout: bool,
    },

    /// Export the collection as CSV (stdout when --out is omitted)
    ExportCsv {
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Import languages from a CSV file
    ImportCsv {
        path: PathBuf,
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Dump JSON Schemas of the report types
    Schema {
        #[arg(long, default_value = "")]
        out_dir: PathBuf,
    },

    /// Replace the collection with the seed dataset
    Reset,
}

trait Runnable {
    fn run(self, ctx: &Ctx) -> Result<()>;
}

impl Runnable for Commands {
    fn run(self, ctx: &Ctx) -> Result<()> {
        let cmd_name = format!("{:?}", self);
        debug!(event = "command_start", command = %cmd_name);

        let result = match self {
            Commands::List { limit, format } => commands::list::run_list(ctx, limit, &format),
            Commands::Show { language, format } => commands::list::run_show(ctx, &language, &format),
            Commands::Validate { language, format } => {
                commands::validate::run_validate(ctx, language.as_deref(), &format)
            }
            Commands::Compare { languages, format } => {
                commands::compare::run_compare(ctx, &languages, &format)
            }
            Commands::Overview {
                class,
                search,
                format,
            } => commands::overview::run_overview(ctx, &class, search, &format),
            Commands::Features {
                language,
                feature,
                polarity,
                format,
            } => commands::features::run_features(ctx, &language, feature, &polarity, &format),
            Commands::Add {
                name,
                family,
                iso,
                lat,
                lon,
                surface,
                elementary,
                suprasegmentals,
                features,
                notes,
            } => commands::add::run_add(
                ctx,
                phonemic_store::NewLanguage {
                    name,
                    family,
                    iso_code: iso,
                    latitude: lat,
                    longitude: lon,
                    surface_phonemes: surface,
                    elementary_segments: elementary,
                    suprasegmentals,
                    features,
                    dialect_notes: notes,
                },
            ),
            Commands::Delete { language } => commands::delete::run_delete(ctx, &language),
            Commands::Edit {
                language,
                name,
                family,
                lat,
                lon,
                surface,
                elementary,
                suprasegmentals,
                notes,
                add_mapping,
                set_mapping,
                remove_mapping,
            } => commands::edit::run_edit(
                ctx,
                &language,
                commands::edit::EditArgs {
                    name,
                    family,
                    coordinates: lat.zip(lon),
                    surface,
                    elementary,
                    suprasegmentals,
                    notes,
                    add_mapping,
                    set_mapping,
                    remove_mapping,
                },
            ),
            Commands::ExportTemplate { out, stdout } => {
                commands::export_csv::run_export_template(ctx, out, stdout)
            }
            Commands::ExportCsv { out } => commands::export_csv::run_export_csv(ctx, out),
            Commands::ImportCsv { path, format } => {
                commands::import_csv::run_import_csv(ctx, &path, &format)
            }
            Commands::Schema { out_dir } => commands::schema::run_schema(ctx, out_dir),
            Commands::Reset => commands::reset::run_reset(ctx),
        };

        match &result {
            Ok(_) => debug!(event = "command_done", command = %cmd_name),
            Err(e) => error!(event = "command_failed", command = %cmd_name, error = ?e),
        }

        result
    }
}

/// Console layer on stderr (stdout stays clean for --format json), plus a
/// daily rolling debug log under `logs/`. The guard must outlive `main`'s work.
fn init_tracing(quiet: bool) -> WorkerGuard {
    let file_appender = rolling::daily("logs", "phonemic.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if quiet { "warn" } else { "info" };
    let console_filter = if quiet {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
    guard
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _guard = init_tracing(cli.quiet);

    let use_color = !cli.no_color
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    let cfg = phonemic_config::load_config().unwrap_or_default();
    let cache = commands::resolve_cache(&cfg, cli.cache, cli.no_cache);
    debug!(event = "startup", version = env!("CARGO_PKG_VERSION"), cache = ?cache);

    let ctx = Ctx {
        cfg,
        cache,
        use_color,
    };
    cli.cmd.run(&ctx)
}
