use clap::{Parser, ValueEnum};
use pagedoc::report::format_diagnostics;
use pagedoc::{EngineBuilder, EngineError, ResolverConfig, Viewport};
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Resolve a page of a low-code document set.
#[derive(Parser, Debug)]
#[command(name = "pagedoc")]
#[command(version, about = "Resolves references, list bindings and styles of page documents", long_about = None)]
struct Cli {
    /// YAML documents to load into the document root
    #[arg(value_name = "DOCUMENT", required = true)]
    documents: Vec<PathBuf>,

    /// Page to resolve; repeat to resolve several pages
    #[arg(long, short, required = true)]
    page: Vec<String>,

    /// Resolver settings file (YAML or JSON); flags override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL substituted for `~/` references
    #[arg(long)]
    base_url: Option<String>,

    /// Maximum hops followed when a reference resolves to another reference
    #[arg(long)]
    max_depth: Option<usize>,

    /// Viewport as WIDTHxHEIGHT; sizes become pixels instead of vh/vw
    #[arg(long, value_parser = parse_viewport)]
    viewport: Option<Viewport>,

    /// Exit with a failure status when any error diagnostic is reported
    #[arg(long)]
    fail_on_error: bool,

    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Disable colors in the diagnostics
    #[arg(long)]
    no_colors: bool,
}

fn parse_viewport(spec: &str) -> Result<Viewport, String> {
    Viewport::parse(spec).ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", spec))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("pagedoc: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when `--fail-on-error` applies.
fn run(cli: &Cli) -> Result<bool, EngineError> {
    let config = match &cli.config {
        Some(path) => serde_yaml::from_str::<ResolverConfig>(&fs::read_to_string(path)?)?,
        None => ResolverConfig::default(),
    };

    let mut builder = EngineBuilder::new().with_config(config);
    for path in &cli.documents {
        builder = builder.with_document_file(path)?;
    }
    if let Some(base_url) = &cli.base_url {
        builder = builder.with_base_url(base_url.as_str());
    }
    if let Some(max_depth) = cli.max_depth {
        builder = builder.with_max_depth(max_depth);
    }
    if let Some(viewport) = cli.viewport {
        builder = builder.with_viewport(viewport);
    }
    let engine = builder.build()?;

    let use_colors = !cli.no_colors && std::io::stderr().is_terminal();
    let mut output = serde_json::Map::new();
    let mut any_errors = false;
    for (page, result) in engine.resolve_pages(cli.page.as_slice()) {
        let resolution = result?;
        if !resolution.diagnostics.is_empty() || cli.page.len() > 1 {
            eprintln!("{}:", page);
            eprintln!("{}", format_diagnostics(&resolution.diagnostics, use_colors));
        }
        any_errors |= resolution.has_errors();
        output.insert(page, resolution.to_value());
    }

    let tree = if output.len() == 1 {
        output.into_iter().next().map(|(_, tree)| tree).unwrap_or_default()
    } else {
        serde_json::Value::Object(output)
    };
    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&tree)?),
    }

    Ok(!(cli.fail_on_error && any_errors))
}
