mod cli;

use anyhow::Result;
use cli::{Cli, Commands};
use snaker::config::{validate_separator, Config};
use snaker::pipeline::Pipeline;
use snaker::{split, Case, INITIALISMS};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Convert {
            idents,
            to,
            input,
            config,
            verbose,
        } => {
            run_convert(&idents, to, &input, &config, verbose)?;
        }
        Commands::Split {
            idents,
            separator,
            config,
        } => {
            run_split(&idents, separator, &config)?;
        }
        Commands::Initialisms => {
            run_initialisms()?;
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;
        }
    }

    Ok(())
}

/// Run the convert command
fn run_convert(
    idents: &[String],
    to: Option<Case>,
    inputs: &[PathBuf],
    config_path: &Path,
    verbose: bool,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let case = to.unwrap_or(config.convert.case);

    if verbose {
        eprintln!("Target case: {}", case);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !idents.is_empty() {
        for ident in idents {
            writeln!(out, "{}", case.apply(ident))?;
        }
        return Ok(());
    }

    let pipeline = Pipeline::new(verbose);

    if inputs.is_empty() {
        pipeline.convert_lines(io::stdin().lock(), &mut out, case, config.convert.skip_blank)?;
        return Ok(());
    }

    for path in inputs {
        pipeline.convert_file(path, &mut out, case, config.convert.skip_blank)?;
    }

    Ok(())
}

/// Run the split command
fn run_split(idents: &[String], separator: Option<String>, config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let separator = separator.unwrap_or(config.split.separator);
    validate_separator(&separator)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if idents.is_empty() {
        Pipeline::new(false).split_lines(io::stdin().lock(), &mut out, &separator)?;
        return Ok(());
    }

    for ident in idents {
        writeln!(out, "{}", split(ident).join(separator.as_str()))?;
    }

    Ok(())
}

/// Run the initialisms command
fn run_initialisms() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for initialism in INITIALISMS {
        writeln!(out, "{}", initialism)?;
    }

    Ok(())
}

/// Run the init command
fn run_init(output_path: &Path, force: bool) -> Result<()> {
    // Check if file already exists
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = Config::default_config();
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - case: Target case for convert (snake, upper_camel, lower_camel)");
    println!("  - skip_blank: Drop blank input lines");
    println!("  - separator: Text placed between words by split");

    Ok(())
}
