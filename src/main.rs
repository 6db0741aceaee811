// Interactive front end: asks for a grid file, analyzes it, and prints the
// labeled image followed by the blob statistics table.

use blob_vision::{BlobAnalyzer, BlobError, Result};
use flexi_logger::Logger;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logs go to stderr so the reports on stdout stay clean. RUST_LOG overrides the level.
    let _logger = match Logger::try_with_env_or_str("warn").and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    };

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:?}");
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let file_name = prompt_file_name(io::stdin().lock(), io::stdout().lock())?;

    let analysis = BlobAnalyzer::new(file_name).process_file()?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(analysis.render().as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Prints the prompt and returns the first whitespace-delimited token typed.
fn prompt_file_name(mut input: impl BufRead, mut output: impl Write) -> Result<String> {
    write!(output, "Enter the filename: ")?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(BlobError::MissingFilename);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_takes_the_first_token() {
        let mut output = Vec::new();
        let name = prompt_file_name(Cursor::new("\n  image.txt trailing\n"), &mut output).expect("a token");

        assert_eq!(name, "image.txt");
        assert_eq!(output, b"Enter the filename: ");
    }

    #[test]
    fn prompt_fails_on_end_of_input() {
        let result = prompt_file_name(Cursor::new("   \n"), Vec::new());
        assert!(matches!(result, Err(BlobError::MissingFilename)));
    }
}
