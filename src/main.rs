//! codeprint - render a source file as a styled HTML page

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use codeprint::style::{save_overrides, valid_width};
use codeprint::{
    render_in, render_plain, resolve_style_profile, CodeprintError, Config, GrammarTable,
    PresetRegistry, Result, StyleOverrides, StyleSpec,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "codeprint", version)]
#[command(about = "Render source files as styled, reflowed HTML pages")]
struct Args {
    /// Source file to render
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Language id (detected from the file extension if omitted)
    #[arg(short, long, value_name = "ID")]
    lang: Option<String>,

    /// Style preset name, inline JSON, or base64-encoded JSON
    #[arg(short, long, value_name = "SPEC")]
    style: Option<String>,

    /// Page width in columns (40 to 200)
    #[arg(short, long, value_name = "COLUMNS")]
    width: Option<usize>,

    /// Write HTML here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number output lines
    #[arg(long)]
    line_numbers: bool,

    /// Keep comments as written instead of reflowing them
    #[arg(long)]
    no_reflow: bool,

    /// Save the resolved style as a custom preset
    #[arg(long, value_name = "NAME")]
    save_style: Option<String>,

    /// List known languages and exit
    #[arg(long)]
    list_languages: bool,

    /// List style presets and exit
    #[arg(long)]
    list_styles: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("CODEPRINT_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("codeprint=debug")
        } else {
            EnvFilter::new("codeprint=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = Config::load();
    let table = GrammarTable::new();

    let mut presets = PresetRegistry::with_builtins();
    let presets_dir = config.presets_dir();
    if let Some(dir) = &presets_dir {
        if let Err(e) = presets.load_dir(dir) {
            tracing::warn!(dir = %dir.display(), error = %e, "could not load custom presets");
        }
    }

    if args.list_languages {
        for id in table.list_languages() {
            println!("{}", id);
        }
        return Ok(());
    }

    if args.list_styles {
        for name in presets.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let spec = args.style.as_deref().unwrap_or(&config.style);
    let width = args.width.or(config.max_width);

    if let Some(name) = &args.save_style {
        let dir = presets_dir.ok_or_else(|| {
            CodeprintError::Message("no presets directory (set HOME or presets-dir)".to_string())
        })?;
        save_style(name, spec, width, &presets, &dir)?;
        if args.file.is_none() {
            return Ok(());
        }
    }

    let path = args
        .file
        .as_deref()
        .ok_or_else(|| CodeprintError::Message("no input file (see --help)".to_string()))?;

    let mut profile = resolve_style_profile(spec, &presets);
    if let Some(width) = width.and_then(|w| valid_width(w as f64)) {
        profile.max_width = width;
    }

    let bytes = fs::read(path)?;
    let source = String::from_utf8_lossy(&bytes);
    let title = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let html = if bytes.len() as u64 > config.raw_threshold {
        tracing::debug!(
            bytes = bytes.len(),
            threshold = config.raw_threshold,
            "file too large to highlight, writing plain text"
        );
        render_plain(&source, &title)
    } else {
        let language = args
            .lang
            .as_deref()
            .or_else(|| table.detect_language(path))
            .unwrap_or("text");
        tracing::debug!(file = %path.display(), language, "rendering");

        let mut options = config.render_options();
        options.line_numbers |= args.line_numbers;
        options.reflow_comments &= !args.no_reflow;
        options.title = Some(title);

        render_in(&source, &table, language, &profile, &options).standalone_html
    };

    match &args.output {
        Some(output) => fs::write(output, html)?,
        None => io::stdout().lock().write_all(html.as_bytes())?,
    }
    Ok(())
}

/// Resolve `spec` strictly and store it as `<dir>/<name>.toml`
fn save_style(
    name: &str,
    spec: &str,
    width: Option<usize>,
    presets: &PresetRegistry,
    dir: &Path,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\', '.']) {
        return Err(CodeprintError::Message(format!("invalid preset name: {:?}", name)));
    }

    let mut profile = StyleSpec::parse(spec, presets)?.resolve(presets)?;
    if let Some(width) = width.and_then(|w| valid_width(w as f64)) {
        profile.max_width = width;
    }

    let path = dir.join(format!("{}.toml", name.to_lowercase()));
    save_overrides(&StyleOverrides::from(&profile), &path)?;
    eprintln!("Saved style {} to {}", name, path.display());
    Ok(())
}
