//! Interactive entry point: prompts for a table size on stdin and writes
//! both artifacts to the working directory.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;

use timestable::{render_png, render_svg, TableConfig, PNG_FILENAME, SVG_FILENAME};

/// Parse the line typed at the prompt.
fn parse_table_size(line: &str) -> anyhow::Result<u32> {
    line.trim()
        .parse::<u32>()
        .with_context(|| format!("'{}' is not a non-negative integer", line.trim()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    print!("Enter the size of the multiplication table: ");
    io::stdout().flush().context("failed to flush the prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read the table size from stdin")?;
    let n = parse_table_size(&line)?;

    let config = TableConfig::new(n)?;

    render_png(&config, Path::new(PNG_FILENAME))?;
    println!("PNG file saved as {}", PNG_FILENAME);

    render_svg(&config, Path::new(SVG_FILENAME))?;
    println!("SVG file saved as {}", SVG_FILENAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_sizes() {
        assert_eq!(parse_table_size("12\n").unwrap(), 12);
        assert_eq!(parse_table_size(" 0 ").unwrap(), 0);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_table_size("twelve").is_err());
        assert!(parse_table_size("-3").is_err());
        assert!(parse_table_size("").is_err());
        assert!(parse_table_size("3.5").is_err());
    }
}
