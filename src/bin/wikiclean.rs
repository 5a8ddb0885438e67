//! wikiclean CLI - Flatten wiki markup and LaTeX math to plain text

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use wikiclean::{
    clean_value_with_options, to_chem, to_math_with_diagnostics, to_subscript, to_superscript,
    CleanConfig, CleanOptions, CleanResult, MathWarning,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "wikiclean")]
#[command(version)]
#[command(about = "Flatten wiki markup, HTML and LaTeX math into plain Unicode text", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// What to do with the input
    #[arg(short, long, value_enum, default_value_t = Mode::Clean)]
    mode: Mode,

    /// Keep leading and trailing whitespace (clean mode)
    #[arg(long)]
    no_strip: bool,

    /// Language code of the dump the input comes from
    #[arg(long)]
    lang: Option<String>,

    /// Load the extraction configuration from a JSON file
    #[arg(long)]
    config: Option<String>,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Clean wiki markup into plain text
    Clean,
    /// Convert a LaTeX math formula
    Math,
    /// Convert to superscript glyphs
    Sup,
    /// Convert to subscript glyphs
    Sub,
    /// Convert a chemical formula
    Chem,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> CleanResult<()> {
    let mut config = load_config(cli)?;
    if cli.verbose {
        config.verbose = true;
    }

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let (result, warnings) = convert(cli, &config, &input);

    // Print warnings to stderr (unless quiet mode)
    if !cli.quiet {
        for warning in &warnings {
            eprintln!("{}", warning);
        }
    }

    // Check strict mode
    if cli.strict && !warnings.is_empty() {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            warnings.len()
        );
        std::process::exit(1);
    }

    // Output
    match cli.output {
        Some(ref path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", result)?;
            if warnings.is_empty() {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path,
                    warnings.len()
                );
            }
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_config(cli: &Cli) -> CleanResult<CleanConfig> {
    let mut config = match cli.config {
        Some(ref path) => {
            let json = fs::read_to_string(path)?;
            CleanConfig::from_json(&json)?
        }
        None => CleanConfig::default(),
    };

    if let Some(ref lang) = cli.lang {
        config.dump_language = lang.clone();
        config.validate()?;
    }
    Ok(config)
}

#[cfg(feature = "cli")]
fn convert(cli: &Cli, config: &CleanConfig, input: &str) -> (String, Vec<MathWarning>) {
    // Script conversions work on a single fragment
    let fragment = input.trim_end_matches(&['\n', '\r'][..]);

    match cli.mode {
        Mode::Clean => {
            let options = CleanOptions {
                no_strip: cli.no_strip,
            };
            (clean_value_with_options(config, input, &options), Vec::new())
        }
        Mode::Math => {
            let output = to_math_with_diagnostics(fragment);
            (output.content, output.warnings)
        }
        Mode::Sup => (to_superscript(fragment), Vec::new()),
        Mode::Sub => (to_subscript(fragment), Vec::new()),
        Mode::Chem => (to_chem(fragment), Vec::new()),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install wikiclean --features cli");
    eprintln!("  wikiclean [OPTIONS] [INPUT_FILE]");
}
