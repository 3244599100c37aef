use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use swagger_class_generator::config::{load_config, merge_with_cli_args};
use swagger_class_generator::{pipeline, SupportedLanguage, SwaggerDocument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the Swagger 2.0 specification file (YAML or JSON)
    #[arg(short, long)]
    spec: Option<PathBuf>,

    /// Output directory for generated code
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file (overrides default location)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target languages; repeat or comma-separate (java, kotlin, ts, python)
    #[arg(short, long, value_delimiter = ',')]
    language: Vec<SupportedLanguage>,

    /// Print the definition graph as JSON instead of generating files
    #[arg(long)]
    dump_graph: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    // Load configuration
    let config = load_config(args.config.as_deref())?;
    let merged_config = merge_with_cli_args(config, args.spec, args.output, &args.language);

    // Validate we have input
    let input_config = merged_config
        .input
        .ok_or_else(|| anyhow::anyhow!("No input source specified. Use --spec or configure input in config file"))?;

    let document = SwaggerDocument::load(&input_config.source)
        .with_context(|| format!("Failed to read input: {:?}", input_config.source))?;

    if args.dump_graph {
        println!("{}", pipeline::dump_graph(&document)?);
        return Ok(());
    }

    println!("📖 Read {:?} ({} {})", input_config.source, document.title, document.version);

    let output_dir = merged_config.output.unwrap_or_else(|| PathBuf::from("generated"));
    fs::create_dir_all(&output_dir)?;

    for hook in &merged_config.hooks.before_generate {
        println!("🎣 Running before hook: {}", hook);
        execute_hook(hook)?;
    }

    for settings in merged_config.languages.iter().filter(|settings| !settings.enabled) {
        println!("⏭️  Skipping disabled language: {}", settings.language);
    }

    let files = pipeline::run(&document, &merged_config.languages).context("Failed to generate classes")?;

    for file in &files {
        let directory = output_dir.join(&file.directory);
        fs::create_dir_all(&directory)
            .with_context(|| format!("Failed to create output directory: {:?}", directory))?;

        let output_path = directory.join(&file.file_name);
        fs::write(&output_path, &file.content)
            .with_context(|| format!("Failed to write output file: {:?}", output_path))?;

        println!("✅ Generated: {:?}", output_path);
    }

    for hook in &merged_config.hooks.after_generate {
        println!("🎣 Running after hook: {}", hook);
        execute_hook(hook)?;
    }

    if files.is_empty() {
        println!("⚠️  No languages were enabled. Check your configuration.");
    } else {
        println!("🎉 Successfully generated {} file(s)!", files.len());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn execute_hook(command: &str) -> Result<()> {
    use std::process::Command;

    let output = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", command]).output()
    } else {
        Command::new("sh").args(["-c", command]).output()
    }?;

    if !output.status.success() {
        anyhow::bail!(
            "Hook failed: {}\nStderr: {}",
            command,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}
