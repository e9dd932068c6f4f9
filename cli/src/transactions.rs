use anyhow::{Context, Result};
use clap::Subcommand;
use std::io::Read;
use std::path::{Path, PathBuf};
use wasm_ark::{sanitize_response_json, sanitize_transactions_json};

#[derive(Subcommand)]
pub enum TransactionsCommand {
    /// Escape censored fields of transaction JSON (a record or an array)
    Sanitize {
        /// Input file, stdin when omitted
        file: Option<PathBuf>,
        /// Input is an API response with `data` and `meta`
        #[arg(long)]
        response: bool,
    },
}

pub fn handle_command(command: TransactionsCommand) -> Result<String> {
    match command {
        TransactionsCommand::Sanitize { file, response } => {
            let input = read_input(file.as_deref())?;
            sanitize(&input, response)
        }
    }
}

fn sanitize(input: &str, response: bool) -> Result<String> {
    if response {
        sanitize_response_json(input)
    } else {
        sanitize_transactions_json(input)
    }
    .context("Failed to sanitize transactions")
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn input_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_sanitize_records_from_file() {
        let file = input_file(r#"[{"id":"1","vendorField":"<b>"}]"#);
        let out = handle_command(TransactionsCommand::Sanitize {
            file: Some(file.path().to_path_buf()),
            response: false,
        })
        .unwrap();
        assert_eq!(out, r#"[{"id":"1","vendorField":"&lt;b&gt;"}]"#);
    }

    #[test]
    fn test_sanitize_response_from_file() {
        let file = input_file(r#"{"data":{"id":"1","vendorField":"a&b"},"meta":{"totalCount":1}}"#);
        let out = handle_command(TransactionsCommand::Sanitize {
            file: Some(file.path().to_path_buf()),
            response: true,
        })
        .unwrap();
        assert!(out.contains(r#""vendorField":"a&amp;b""#));
        assert!(out.contains(r#""meta":{"totalCount":1}"#));
    }

    #[test]
    fn test_response_flag_requires_envelope() {
        let err = sanitize(r#"[{"id":"1"}]"#, true).unwrap_err();
        assert!(err.to_string().contains("Failed to sanitize transactions"));
    }

    #[test]
    fn test_missing_file() {
        let err = handle_command(TransactionsCommand::Sanitize {
            file: Some(PathBuf::from("/nonexistent/transactions.json")),
            response: false,
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
