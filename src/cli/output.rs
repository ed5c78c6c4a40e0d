//! Rendering of generated commands on stdout

use crate::cli::args::OutputFormat;
use crate::commands::split_words;
use crate::error::Result;
use serde::Serialize;

/// JSON view of a generated command
#[derive(Debug, Serialize)]
pub struct CommandOutput<'a> {
    pub command: &'a str,
    pub argv: Vec<String>,
}

pub fn render(line: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(line.to_string()),
        OutputFormat::Json => {
            let output = CommandOutput {
                command: line,
                argv: split_words(line)?,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandMaker;
    use crate::error::Error;

    #[test]
    fn test_text_is_verbatim() {
        let line = CommandMaker::run_client("a", 1, 1, 0, &[] as &[&str]).unwrap();
        assert_eq!(render(&line, OutputFormat::Text).unwrap(), line);
    }

    #[test]
    fn test_json_includes_argv() {
        let line = CommandMaker::kill();
        let rendered = render(&line, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["command"], "tmux kill-server");
        assert_eq!(value["argv"], serde_json::json!(["tmux", "kill-server"]));
    }

    #[test]
    fn test_json_drops_empty_nodes_section() {
        let line = CommandMaker::run_client("a", 1, 1, 0, &[] as &[&str]).unwrap();
        let rendered = render(&line, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(
            value["argv"],
            serde_json::json!(["./benchmark_client", "a", "--size", "1", "--burst", "1", "--rate", "0"])
        );
    }

    #[test]
    fn test_unbalanced_quote_fails_json() {
        let line = CommandMaker::generate_key("\"broken");
        assert!(matches!(
            render(&line, OutputFormat::Json),
            Err(Error::ShellParse(_))
        ));
    }
}
