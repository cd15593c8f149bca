//! tagdoc — generate documentation from @tag-annotated JavaScript sources.
//!
//! Two modes:
//!
//! - **stdin mode**: `tagdoc < widget.js` renders to stdout
//! - **file mode**: `tagdoc -o docs src/*.js` writes one document per input

use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tagdoc::assemble::{assemble, primary_tagname};
use tagdoc::extract::extract_doc_comments;
use tagdoc::model::{ClassDoc, SourceDoc, TagKind};
use tagdoc::parser::{parse_comment, Context, TagRegistry};
use tagdoc::render;
use tagdoc::warnings::{Location, Reporter};

#[derive(Parser)]
#[command(
    name = "tagdoc",
    about = "Generate structured documentation from @tag-annotated doc comments"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Include @private and @hide members in output
    #[arg(long)]
    show_private: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one source from stdin, render to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let registry = TagRegistry::standard();
    let mut reporter = Reporter::new();
    let mut doc = process_source("<stdin>", &input, &registry, &mut reporter);
    filter_members(&mut doc, cli.show_private);

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&doc));
    report(&mut reporter);
    Ok(())
}

/// file mode: process multiple files, write one document each.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    let registry = TagRegistry::standard();
    let mut reporter = Reporter::new();

    for path in &input_files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let source_file = path.to_string_lossy().to_string();
        let mut doc = process_source(&source_file, &content, &registry, &mut reporter);
        filter_members(&mut doc, cli.show_private);
        if doc.classes.is_empty() && doc.orphans.is_empty() {
            continue;
        }

        let name = derive_output_name(&source_file);
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&doc))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    report(&mut reporter);
    Ok(())
}

/// Extract, parse and assemble every doc comment in one source text.
///
/// A class entity opens a new class; member entities attach to the most
/// recent class, or to the orphan list when no class has been seen yet.
fn process_source(
    filename: &str,
    source: &str,
    registry: &TagRegistry,
    reporter: &mut Reporter,
) -> SourceDoc {
    let mut doc = SourceDoc {
        source_file: filename.to_string(),
        ..SourceDoc::default()
    };

    for comment in extract_doc_comments(source) {
        let location = Location::new(filename, comment.line);
        let tags = parse_comment(&comment.text, location.clone(), registry, reporter);
        let Some(tagname) = primary_tagname(&tags) else {
            continue;
        };
        let mut ctx = Context::new(reporter, location);
        let entity = assemble(tagname, tags, registry, &mut ctx);

        if tagname == TagKind::Class {
            doc.classes.push(ClassDoc {
                name: entity.name.clone().unwrap_or_default(),
                extends: entity.extends.clone(),
                entity,
                members: Vec::new(),
            });
        } else if let Some(class) = doc.classes.last_mut() {
            class.members.push(entity);
        } else {
            doc.orphans.push(entity);
        }
    }

    doc
}

/// Drop @private and @hide entities unless --show-private is given.
fn filter_members(doc: &mut SourceDoc, show_private: bool) {
    if show_private {
        return;
    }
    doc.orphans.retain(|m| !m.is_private && !m.hidden);
    doc.classes
        .retain(|c| !c.entity.is_private && !c.entity.hidden);
    for class in &mut doc.classes {
        class.members.retain(|m| !m.is_private && !m.hidden);
    }
}

/// Print collected warnings to stderr and drain the reporter.
fn report(reporter: &mut Reporter) {
    for warning in reporter.take() {
        eprintln!("warning: {}", warning);
    }
}

/// File extensions recognized as source files when scanning directories.
const SUPPORTED_EXTENSIONS: &[&str] = &["js", "jsx"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "src/panel.js" → "panel"
fn derive_output_name(source: &str) -> String {
    let filename = source.rsplit('/').next().unwrap_or(source);
    filename
        .strip_suffix(".js")
        .or_else(|| filename.strip_suffix(".jsx"))
        .unwrap_or(filename)
        .to_string()
}
