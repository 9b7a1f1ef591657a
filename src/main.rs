//! docapy — generate browsable HTML documentation from Python docstrings.
//!
//! Two modes:
//!
//! - **stdin mode**: `docapy < module.py` prints the module's documentation block
//! - **file mode**: `docapy -n MyProject -o docs/ src/` writes one page per file

use anyhow::{bail, Context, Result};
use clap::Parser;
use docapy::discover::{discover, SourceFile};
use docapy::render::{self, page, theme, Renderer};
use docapy::{Config, Project, Scanner, SourcePage};
use rayon::prelude::*;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docapy",
    about = "Generate HTML documentation from numpydoc-style Python docstrings"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    paths: Vec<String>,

    /// Output directory
    #[arg(short = 'o', long, default_value = "docapy")]
    output: PathBuf,

    /// Project name shown in page titles and the navigation bar.
    /// Defaults to the name of the first input directory.
    #[arg(short = 'n', long)]
    project_name: Option<String>,

    /// Repository link shown in the navigation bar
    #[arg(short = 'g', long)]
    github: Option<String>,

    /// Accent color: blue, cyan, red, green, orange, purple, or #RRGGBB
    #[arg(short = 'c', long, default_value = "cyan")]
    color: String,

    /// Output format: html (default), json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Columns per indentation level
    #[arg(long, default_value_t = docapy::indent::INDENT_UNIT)]
    indent_unit: usize,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::default().with_indent_unit(cli.indent_unit);

    if cli.paths.is_empty() {
        return stdin_mode(&cli, &config);
    }

    file_mode(&cli, &config)
}

/// stdin mode: read one module from stdin, write its documentation to stdout.
fn stdin_mode(cli: &Cli, config: &Config) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let renderer = render::create_renderer(&cli.format, config)?;
    let page = scan_page(config, "./stdin.py".to_string(), &input);
    print!("{}", renderer.render_fragment(&page));
    Ok(())
}

/// file mode: document every discovered file and write the site.
fn file_mode(cli: &Cli, config: &Config) -> Result<()> {
    let output_dir = cli.output.as_path();
    let accent = theme::resolve_color(&cli.color)?;
    let renderer = render::create_renderer(&cli.format, config)?;

    let inputs = discover(&cli.paths, Some(output_dir))?;
    if inputs.is_empty() {
        bail!("no Python files found in: {}", cli.paths.join(", "));
    }
    info!(files = inputs.len(), "discovered source files");

    let pages: Vec<SourcePage> = inputs
        .par_iter()
        .filter_map(|file| read_page(config, file))
        .collect();

    let project = Project {
        name: cli
            .project_name
            .clone()
            .unwrap_or_else(|| default_project_name(&cli.paths)),
        github: cli.github.clone(),
        files: pages.iter().map(|p| p.path.clone()).collect(),
    };

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    pages
        .par_iter()
        .try_for_each(|page| write_page(output_dir, renderer.as_ref(), &project, page))?;

    if renderer.file_extension() == "html" {
        write_file(&output_dir.join("index.html"), &page::index_page(&project))?;
        write_file(&output_dir.join("style.css"), &theme::stylesheet(&accent))?;
    }

    info!(
        pages = pages.len(),
        output = %output_dir.display(),
        "documentation written"
    );
    Ok(())
}

/// Read and scan one file. Unreadable files are skipped with a warning.
fn read_page(config: &Config, file: &SourceFile) -> Option<SourcePage> {
    match fs::read_to_string(&file.path) {
        Ok(source) => Some(scan_page(config, file.rel.clone(), &source)),
        Err(e) => {
            warn!(file = %file.path.display(), error = %e, "skipping unreadable file");
            None
        }
    }
}

fn scan_page(config: &Config, path: String, source: &str) -> SourcePage {
    let scanner = Scanner::new(config);
    let entities = scanner.scan(source);
    debug!(file = %path, entities = entities.len(), "scanned");
    SourcePage {
        module_doc: scanner.module_docstring(source),
        entities,
        path,
    }
}

fn write_page(
    output_dir: &Path,
    renderer: &dyn Renderer,
    project: &Project,
    source: &SourcePage,
) -> Result<()> {
    let out_path = output_dir.join(page::output_path(&source.path, renderer.file_extension()));
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    write_file(&out_path, &renderer.render(project, source))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Name of the first input that is a directory, or "Project".
fn default_project_name(paths: &[String]) -> String {
    paths
        .iter()
        .map(Path::new)
        .filter(|p| p.is_dir())
        .find_map(|p| {
            p.canonicalize()
                .ok()?
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "Project".to_string())
}
