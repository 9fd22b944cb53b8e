mod source;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use tspgen_core::config::{self, CONFIG_FILE_NAME, TspgenConfig};
use tspgen_core::ir::{IrModelKind, IrNamespace, group_namespaces};
use tspgen_core::parse::spec::OpenApiSpec;
use tspgen_core::{CodeGenerator, GeneratedFile, transform};
use tspgen_endpoints::EndpointIndexGenerator;
use tspgen_typespec::{TypeSpecConfig, TypeSpecGenerator};

use crate::source::CachedSchemaSource;

#[derive(Parser)]
#[command(
    name = "tspgen",
    about = "Generate TypeSpec namespaces from the Riot API OpenAPI schema",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one TypeSpec file per namespace plus the manifest
    Generate {
        /// Path to the cached schema (YAML or JSON); downloaded when missing
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory for the .tsp files
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate the markdown endpoint index
    Endpoints {
        /// Path to the cached schema (YAML or JSON); downloaded when missing
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path of the markdown file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the namespace grouping of a schema
    Inspect {
        /// Path to the cached schema (YAML or JSON); downloaded when missing
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new tspgen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => cmd_generate(input, output),

        Commands::Endpoints { input, output } => cmd_endpoints(input, output),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "tspgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<TspgenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Load the schema, downloading it into `input` when absent.
///
/// Returns `Ok(None)` when the cached file exists but cannot be read or
/// parsed: the error is reported and the caller writes nothing.
fn load_spec(input: &Path, cfg: &TspgenConfig) -> Result<Option<OpenApiSpec>> {
    let source = CachedSchemaSource::new(input, cfg.schema_url.as_str());
    match source.load() {
        Ok(spec) => Ok(Some(spec)),
        Err(e) if e.is_fatal() => Err(e.into()),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error reading {}: {e}", source.path().display());
            Ok(None)
        }
    }
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let Some(spec) = load_spec(&input, &cfg)? else {
        return Ok(());
    };

    let files = TypeSpecGenerator
        .generate(&spec, &TypeSpecConfig::from(&cfg))
        .map_err(|e| anyhow::anyhow!(e))?;

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;

    eprintln!(
        "Generated {} files in {}",
        files.len(),
        output_dir.display()
    );
    Ok(())
}

fn cmd_endpoints(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.endpoints.output));

    let Some(spec) = load_spec(&input, &cfg)? else {
        return Ok(());
    };

    let (mut file, groups) = EndpointIndexGenerator
        .render(&spec, &cfg.endpoints)
        .map_err(|e| anyhow::anyhow!(e))?;
    file.path = output.to_string_lossy().into_owned();
    write_files(Path::new(""), std::slice::from_ref(&file))?;

    eprintln!("Generated {} with {groups} API groups.", output.display());
    Ok(())
}

fn cmd_inspect(input: Option<PathBuf>, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));

    let Some(spec) = load_spec(&input, &cfg)? else {
        return Ok(());
    };
    let namespaces = transform::resolve_namespaces(&group_namespaces(&spec));

    let summary = build_inspect_summary(&spec, &namespaces);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(spec: &OpenApiSpec, namespaces: &[IrNamespace]) -> serde_json::Value {
    let namespaces: Vec<serde_json::Value> = namespaces
        .iter()
        .map(|ns| {
            let names_of = |wanted: fn(&IrModelKind) -> bool| -> Vec<&str> {
                ns.models
                    .iter()
                    .filter(|m| wanted(&m.kind))
                    .map(|m| m.name.as_str())
                    .collect()
            };
            serde_json::json!({
                "key": ns.key,
                "name": ns.name,
                "model_count": ns.models.len(),
                "operation_count": ns.operations.len(),
                "records": names_of(|k| matches!(k, IrModelKind::Record(_))),
                "enums": names_of(|k| matches!(k, IrModelKind::Enum(_))),
                "aliases": names_of(|k| matches!(k, IrModelKind::Alias(_))),
            })
        })
        .collect();

    serde_json::json!({
        "info": {
            "title": spec.info.title,
            "version": spec.info.version,
        },
        "namespaces": namespaces,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
