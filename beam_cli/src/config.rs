//! CLI configuration.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file: `--config FILE`, or `beam_cli.toml` in the working directory
//! 3. Command-line flags
//!
//! ```toml
//! format = "csv"
//! output_dir = "results"
//! show_stations = true
//! log_filter = "beam_cli=debug"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "beam_cli.toml";

/// Output format for analysis results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Settings read from the TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
    pub show_stations: Option<bool>,
    pub log_filter: Option<String>,
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub format: OutputFormat,
    pub output_dir: Option<PathBuf>,
    pub show_stations: bool,
    pub log_filter: String,
    pub inputs: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Text,
            output_dir: None,
            show_stations: false,
            log_filter: "warn".to_string(),
            inputs: Vec::new(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0}")]
    Usage(String),

    #[error("config file '{}': {reason}", .path.display())]
    File { path: PathBuf, reason: String },

    #[error("help requested")]
    HelpRequested,
}

/// Command-line flags before merging
#[derive(Debug, Default, PartialEq)]
struct Flags {
    format: Option<OutputFormat>,
    output_dir: Option<PathBuf>,
    show_stations: bool,
    config: Option<PathBuf>,
    inputs: Vec<PathBuf>,
}

fn parse_flags(args: &[String]) -> Result<Flags, ConfigError> {
    let mut args = args.iter();
    match args.next().map(String::as_str) {
        Some("analyze") => {}
        Some("-h") | Some("--help") => return Err(ConfigError::HelpRequested),
        Some(other) => return Err(ConfigError::Usage(format!("unknown command '{}'", other))),
        None => return Err(ConfigError::Usage("missing command".to_string())),
    }

    let mut flags = Flags::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(ConfigError::HelpRequested),
            "--stations" => flags.show_stations = true,
            "--format" => {
                let value = next_value(&mut args, "--format")?;
                flags.format = Some(OutputFormat::parse(value).ok_or_else(|| {
                    ConfigError::Usage(format!("unknown format '{}' (text, csv, json)", value))
                })?);
            }
            "--output-dir" => {
                flags.output_dir = Some(PathBuf::from(next_value(&mut args, "--output-dir")?));
            }
            "--config" => {
                flags.config = Some(PathBuf::from(next_value(&mut args, "--config")?));
            }
            other if other.starts_with("--") => {
                return Err(ConfigError::Usage(format!("unknown option '{}'", other)));
            }
            path => flags.inputs.push(PathBuf::from(path)),
        }
    }

    if flags.inputs.is_empty() {
        return Err(ConfigError::Usage("no input files".to_string()));
    }
    Ok(flags)
}

fn next_value<'a>(
    args: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str, ConfigError> {
    args.next()
        .map(String::as_str)
        .ok_or_else(|| ConfigError::Usage(format!("{} requires a value", flag)))
}

/// Parse a TOML config document
pub fn parse_file_config(text: &str) -> Result<FileConfig, String> {
    toml::from_str(text).map_err(|e| e.to_string())
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::File {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_file_config(&text).map_err(|reason| ConfigError::File {
        path: path.to_path_buf(),
        reason,
    })
}

impl Config {
    /// Build the effective configuration from arguments (without the program name).
    ///
    /// An explicit `--config` file must exist; the default file is optional.
    /// Text output goes to stdout only, so an output directory is rejected
    /// with `text` format.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let flags = parse_flags(args)?;
        let file = match &flags.config {
            Some(path) => read_file_config(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    read_file_config(default)?
                } else {
                    FileConfig::default()
                }
            }
        };
        Self::merge(file, flags)
    }

    fn merge(file: FileConfig, flags: Flags) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let config = Config {
            format: flags.format.or(file.format).unwrap_or(defaults.format),
            output_dir: flags.output_dir.or(file.output_dir),
            show_stations: flags.show_stations
                || file.show_stations.unwrap_or(defaults.show_stations),
            log_filter: file.log_filter.unwrap_or(defaults.log_filter),
            inputs: flags.inputs,
        };

        if let (OutputFormat::Text, Some(dir)) = (config.format, &config.output_dir) {
            return Err(ConfigError::Usage(format!(
                "output directory '{}' needs --format csv or json",
                dir.display()
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags() {
        let flags = parse_flags(&args(&[
            "analyze",
            "--format",
            "JSON",
            "--stations",
            "--output-dir",
            "out",
            "a.csv",
            "b.json",
        ]))
        .unwrap();
        assert_eq!(flags.format, Some(OutputFormat::Json));
        assert!(flags.show_stations);
        assert_eq!(flags.output_dir, Some(PathBuf::from("out")));
        assert_eq!(flags.inputs, vec![PathBuf::from("a.csv"), PathBuf::from("b.json")]);
    }

    #[test]
    fn test_usage_errors() {
        assert!(matches!(parse_flags(&args(&[])), Err(ConfigError::Usage(_))));
        assert!(matches!(parse_flags(&args(&["run", "a.csv"])), Err(ConfigError::Usage(_))));
        assert!(matches!(parse_flags(&args(&["analyze"])), Err(ConfigError::Usage(_))));
        assert!(matches!(
            parse_flags(&args(&["analyze", "--format", "xml", "a.csv"])),
            Err(ConfigError::Usage(_))
        ));
        assert!(matches!(
            parse_flags(&args(&["analyze", "--format"])),
            Err(ConfigError::Usage(_))
        ));
        assert!(matches!(
            parse_flags(&args(&["analyze", "--verbose", "a.csv"])),
            Err(ConfigError::Usage(_))
        ));
        assert_eq!(parse_flags(&args(&["--help"])), Err(ConfigError::HelpRequested));
    }

    #[test]
    fn test_parse_file_config() {
        let file = parse_file_config(
            "format = \"csv\"\n\
             output_dir = \"results\"\n\
             show_stations = true\n\
             log_filter = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(file.format, Some(OutputFormat::Csv));
        assert_eq!(file.output_dir, Some(PathBuf::from("results")));
        assert_eq!(file.show_stations, Some(true));
        assert_eq!(file.log_filter.as_deref(), Some("debug"));

        assert!(parse_file_config("colour = \"red\"").is_err());
        assert_eq!(parse_file_config("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            format: Some(OutputFormat::Csv),
            output_dir: Some(PathBuf::from("from_file")),
            show_stations: Some(true),
            log_filter: Some("info".to_string()),
        };
        let flags = parse_flags(&args(&["analyze", "--format", "json", "a.csv"])).unwrap();
        let config = Config::merge(file, flags).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.output_dir, Some(PathBuf::from("from_file")));
        assert!(config.show_stations);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_defaults_without_file() {
        let flags = parse_flags(&args(&["analyze", "a.csv"])).unwrap();
        let config = Config::merge(FileConfig::default(), flags).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.output_dir, None);
        assert!(!config.show_stations);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = Config::from_args(&args(&[
            "analyze",
            "--config",
            "/nonexistent/beam_cli.toml",
            "a.csv",
        ]));
        assert!(matches!(err, Err(ConfigError::File { .. })));
    }

    #[test]
    fn test_text_format_rejects_output_dir() {
        let flags = parse_flags(&args(&["analyze", "--output-dir", "out", "a.csv"])).unwrap();
        let err = Config::merge(FileConfig::default(), flags).unwrap_err();
        assert!(matches!(err, ConfigError::Usage(ref msg) if msg.contains("'out'")));

        // A directory from the file is fine once the flags pick a file format
        let file = FileConfig {
            output_dir: Some(PathBuf::from("results")),
            ..FileConfig::default()
        };
        let flags = parse_flags(&args(&["analyze", "--format", "csv", "a.csv"])).unwrap();
        assert!(Config::merge(file, flags).is_ok());
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::File {
            path: PathBuf::from("beam_cli.toml"),
            reason: "bad key".to_string(),
        };
        assert_eq!(err.to_string(), "config file 'beam_cli.toml': bad key");
        assert_eq!(ConfigError::Usage("no input files".into()).to_string(), "no input files");
    }
}
