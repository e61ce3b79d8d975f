use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::case::Case;
use crate::split::split;

/// Line-oriented batch conversion: one identifier per input line
pub struct Pipeline {
    verbose: bool,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new(verbose: bool) -> Self {
        Pipeline { verbose }
    }

    /// Convert every line of `reader` into `case` and write the results to `writer`.
    ///
    /// Returns the number of identifiers converted.
    pub fn convert_lines<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        case: Case,
        skip_blank: bool,
    ) -> Result<usize> {
        let mut converted = 0;

        for line in reader.lines() {
            let line = line.context("Failed to read input line")?;
            let ident = line.trim();

            if ident.is_empty() {
                if !skip_blank {
                    writeln!(writer)?;
                }
                continue;
            }

            writeln!(writer, "{}", case.apply(ident))?;
            converted += 1;
        }

        if self.verbose {
            eprintln!("Converted {} identifiers to {}", converted, case);
        }

        Ok(converted)
    }

    /// Convert every line of the file at `path`
    pub fn convert_file<W: Write>(
        &self,
        path: &Path,
        writer: &mut W,
        case: Case,
        skip_blank: bool,
    ) -> Result<usize> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;

        if self.verbose {
            eprintln!("Reading identifiers from: {}", path.display());
        }

        self.convert_lines(BufReader::new(file), writer, case, skip_blank)
            .with_context(|| format!("Failed to convert file: {}", path.display()))
    }

    /// Write the words of every non-blank line, joined by `separator`.
    ///
    /// Returns the number of identifiers split.
    pub fn split_lines<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        separator: &str,
    ) -> Result<usize> {
        let mut count = 0;

        for line in reader.lines() {
            let line = line.context("Failed to read input line")?;
            let ident = line.trim();

            if ident.is_empty() {
                continue;
            }

            writeln!(writer, "{}", split(ident).join(separator))?;
            count += 1;
        }

        if self.verbose {
            eprintln!("Split {} identifiers", count);
        }

        Ok(count)
    }
}
