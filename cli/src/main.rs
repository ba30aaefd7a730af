//! docx-md CLI - Word to Markdown documentation converter

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use docx_md::{Category, ConvertOptions, Error, WordToMarkdown};

const AFTER_HELP: &str = "\
Document Categories:
  architecture  - System design, components, and architecture diagrams
  functional    - Features, requirements, and user stories
  technical     - Implementation details, APIs, and configurations

Examples:
  docx-md input.docx -c architecture
  docx-md input.docx -c functional -o my_document
  docx-md input.docx -c technical --docs-dir site/docs";

#[derive(Parser)]
#[command(name = "docx-md")]
#[command(version)]
#[command(about = "Convert Word documents to Markdown", long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Path to the Word document (.docx)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Document category type
    #[arg(short, long, value_enum)]
    category: CategoryArg,

    /// Output filename (optional, defaults to input filename)
    #[arg(short, long, value_name = "NAME")]
    output: Option<String>,

    /// Root directory of the category folders
    #[arg(long, value_name = "DIR", env = "DOCX_MD_DOCS_DIR", default_value = "docs")]
    docs_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CategoryArg {
    /// System design, components, diagrams
    Architecture,
    /// Features, requirements, user stories
    Functional,
    /// Implementation details, APIs, configurations
    Technical,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Architecture => Category::Architecture,
            CategoryArg::Functional => Category::Functional,
            CategoryArg::Technical => Category::Technical,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let category = Category::from(cli.category);
    let options = ConvertOptions::new().with_docs_root(&cli.docs_dir);
    let converter = WordToMarkdown::with_options(category, options);

    // An empty name falls back to the input stem
    let output_name = cli.output.as_deref().filter(|name| !name.is_empty());

    match converter.convert(&cli.input, output_name) {
        Ok(result) => {
            println!("{}", "Successfully converted document!".green().bold());
            println!("Output saved to: {}", result.output_path.display());
            log::debug!(
                "{} headings, {} list items, {} tables, {} words",
                result.stats.heading_count,
                result.stats.list_item_count,
                result.stats.table_count,
                result.stats.word_count
            );
        }
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn report_error(e: &Error) {
    if e.is_input_error() {
        println!("{}: {}", "Error".red().bold(), e);
    } else {
        println!("{}: {}", "Conversion failed".red().bold(), e);
    }
}
