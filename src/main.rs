use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use triecheck::cli::output::{self, OutputFormat};
use triecheck::{dict, Checker, Config};

#[derive(Parser, Debug)]
#[command(name = "triecheck")]
#[command(version, about = "A fast trie-backed spell checker", long_about = None)]
struct Cli {
    /// Text file to check
    #[arg(value_name = "FILE", required_unless_present = "completion")]
    file: Option<PathBuf>,

    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY", required_unless_present = "completion")]
    dictionary: Option<PathBuf>,

    /// Treat WORD as always correct (repeatable)
    #[arg(short = 'i', long = "ignore", value_name = "WORD")]
    ignore: Vec<String>,

    /// Ignore uppercase letters. By default a word containing an uppercase
    /// letter anywhere but the start is considered wrong; this flag
    /// disables that rule by lowercasing words before checking
    #[arg(short = 'u', long = "uppercase")]
    uppercase: bool,

    /// Skip tokens matching this regex (repeatable)
    #[arg(long, value_name = "REGEX")]
    ignore_pattern: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if errors are found
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "triecheck", &mut io::stdout());
        return Ok(());
    }

    let (file, dictionary) = match (cli.file, cli.dictionary) {
        (Some(file), Some(dictionary)) => (file, dictionary),
        _ => anyhow::bail!("both FILE and DICTIONARY must be specified. Use --help for usage."),
    };

    // Load configuration
    let config = Config::load(cli.ignore, cli.uppercase, cli.ignore_pattern)?;

    // Build the dictionary, then check
    let trie = dict::load_dictionary(&dictionary)?;
    let checker = Checker::new(&config);

    let findings = checker.check_file(&trie, &file)?;

    output::print_findings(&file, &findings, !cli.no_color, &cli.format);

    // Exit with appropriate code
    if !findings.is_empty() && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
