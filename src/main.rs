use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mhtpack::core::{print_error_message, print_info_message};
use mhtpack::env::{generate_env_docs, EnvConfig};
use mhtpack::resources::{DirectoryResolver, ResourceTable};
use mhtpack::{ConversionOptions, ConversionSession, MhtError};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source HTML file
    #[arg(required_unless_present = "env_help")]
    source: Option<PathBuf>,

    /// Archive to write (default: the source path with an .mht extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Encoding used to parse the source document
    #[arg(short, long)]
    encoding: Option<String>,

    /// Match references against file names ignoring case
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Print the scripts and pages that would be packed, without writing
    #[arg(short, long)]
    list: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Describe the environment variables that are read
    #[arg(long)]
    env_help: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.env_help {
        print!("{}", generate_env_docs());
        return;
    }

    let env = EnvConfig::from_env();
    init_logging(&cli, &env);
    env.report_invalid();

    let colored = atty::is(atty::Stream::Stderr) && !env.no_color;

    if let Err(e) = run(cli, &env) {
        print_error_message(&format!("Error: {e}"), colored);
        process::exit(1);
    }
}

fn run(cli: Cli, env: &EnvConfig) -> Result<(), MhtError> {
    let Some(source) = cli.source else {
        return Ok(());
    };

    let mut options = ConversionOptions::from(env);
    if let Some(encoding) = cli.encoding {
        options.encoding = encoding;
    }
    options.case_insensitive |= cli.ignore_case;

    let resolver = DirectoryResolver::new().case_insensitive(options.case_insensitive);
    let session = ConversionSession::new(&source, cli.output.as_deref(), options);

    if cli.list {
        let document = session.read_source()?;
        let (scripts, links) = session.collect(&document, &resolver)?;
        print_table("scripts", &scripts);
        print_table("links", &links);
        return Ok(());
    }

    let report = session.run(&resolver)?;

    if !cli.quiet {
        print_info_message(&report.output_path.display().to_string());
    }

    Ok(())
}

fn print_table(title: &str, table: &ResourceTable) {
    print_info_message(&format!("{title}:"));
    for (reference, path) in table.iter() {
        match path {
            Some(path) => print_info_message(&format!("  {reference} -> {}", path.display())),
            None => print_info_message(&format!("  {reference} (not found)")),
        }
    }
}

fn init_logging(cli: &Cli, env: &EnvConfig) {
    let level = if cli.quiet {
        "error".to_string()
    } else {
        match cli.verbose {
            0 => env.log_level.clone(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("mhtpack={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
