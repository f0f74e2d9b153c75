//! Glossa CLI: glossary tooltips for markdown content.
//!
//! Usage:
//!   glossa annotate <FILE> --glossary <PATH>
//!   glossa build <INPUT> <OUTPUT> --glossary <PATH>
//!   glossa terms --glossary <PATH> [--json]

use clap::{Args, Parser, Subcommand};
use glossa::{build_site, load_dictionary, Annotator, AnnotatorConfig, Dictionary};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "glossa",
    version,
    about = "Build-time glossary tooltip annotator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log annotation decisions
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Args)]
struct GlossaryArgs {
    /// Glossary file (.yaml, .yml, .json) or directory of term pages
    #[arg(long)]
    glossary: PathBuf,

    /// Maximum tooltips per document
    #[arg(long, default_value_t = glossa::annotate::DEFAULT_MAX_ANNOTATIONS)]
    max_tooltips: usize,

    /// Prefix of term page links
    #[arg(long, default_value = "/glossaire/")]
    href_prefix: String,

    /// Directory whose <slug>.md pages describe a term
    #[arg(long, default_value = "content/glossaire")]
    glossary_dir: PathBuf,
}

impl GlossaryArgs {
    fn config(&self) -> AnnotatorConfig {
        AnnotatorConfig::new()
            .with_max_annotations(self.max_tooltips)
            .with_href_prefix(self.href_prefix.clone())
            .with_glossary_dir(self.glossary_dir.clone())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate one markdown file and print the HTML
    Annotate {
        /// Markdown file to annotate
        file: PathBuf,
        #[command(flatten)]
        glossary: GlossaryArgs,
    },
    /// Annotate every markdown file under INPUT into OUTPUT
    Build {
        /// Content directory
        input: PathBuf,
        /// Output directory
        output: PathBuf,
        #[command(flatten)]
        glossary: GlossaryArgs,
    },
    /// List match entries, longest variant first
    Terms {
        #[command(flatten)]
        glossary: GlossaryArgs,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn open_dictionary(path: &Path) -> Result<Dictionary, String> {
    load_dictionary(path)
        .map_err(|e| format!("Failed to load glossary '{}': {}", path.display(), e))
}

fn open_annotator(args: &GlossaryArgs) -> Result<Annotator, String> {
    let dictionary = open_dictionary(&args.glossary)?;
    Annotator::new(dictionary, args.config())
        .map_err(|e| format!("Failed to build match index: {}", e))
}

fn cmd_annotate(args: &GlossaryArgs, file: &Path) -> i32 {
    let annotator = match open_annotator(args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let markdown = match std::fs::read_to_string(file) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", file.display(), e);
            return 1;
        }
    };
    let (html, _) = annotator.render_markdown(&markdown, Some(file));
    println!("{}", html);
    0
}

fn cmd_build(args: &GlossaryArgs, input: &Path, output: &Path) -> i32 {
    let annotator = match open_annotator(args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return 1;
        }
    };

    match rt.block_on(build_site(input, output, &annotator)) {
        Ok(summary) => {
            println!(
                "Rendered {} documents with {} tooltips",
                summary.document_count(),
                summary.annotation_count()
            );
            if !summary.per_term.is_empty() {
                println!("{:<32}  {:>9}", "TERM", "DOCUMENTS");
                println!("{}", "-".repeat(43));
                for (term, documents) in &summary.per_term {
                    println!("{:<32}  {:>9}", term, documents);
                }
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_terms(args: &GlossaryArgs, json: bool) -> i32 {
    let dictionary = match open_dictionary(&args.glossary) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let entries = dictionary.match_entries();

    if json {
        let listed: Vec<_> = entries
            .iter()
            .map(|(variant, term)| serde_json::json!({ "variant": variant, "term": term }))
            .collect();
        return match serde_json::to_string_pretty(&listed) {
            Ok(out) => {
                println!("{}", out);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
    }

    if entries.is_empty() {
        println!("No terms defined.");
        return 0;
    }
    println!("{:<40}  {:<32}", "VARIANT", "TERM");
    println!("{}", "-".repeat(74));
    for (variant, term) in entries {
        println!("{:<40}  {:<32}", variant, term);
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let code = match cli.command {
        Commands::Annotate { file, glossary } => cmd_annotate(&glossary, &file),
        Commands::Build {
            input,
            output,
            glossary,
        } => cmd_build(&glossary, &input, &output),
        Commands::Terms { glossary, json } => cmd_terms(&glossary, json),
    };
    std::process::exit(code);
}
