//! # Beamcheck CLI
//!
//! Analyzes one or more beams read from CSV or JSON files and prints or
//! writes the results.
//!
//! ```text
//! beam_cli analyze [--format text|csv|json] [--output-dir DIR] [--stations]
//!                  [--config FILE] <input>...
//! ```
//!
//! Logging goes to stderr. The filter comes from `BEAM_CLI_LOG`, else the
//! config file's `log_filter`, else `warn`.

mod config;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use beam_core::calculations::{analyze_detailed, BeamAnalysis};
use beam_core::errors::{CalcError, CalcResult};
use beam_core::file_io::{load_beam_input, results_to_csv, save_report_json, save_results_csv};
use beam_core::model::BeamInput;
use beam_core::report::AnalysisReport;
use rayon::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use config::{Config, ConfigError, OutputFormat};

const LOG_ENV_VAR: &str = "BEAM_CLI_LOG";

fn usage() {
    eprintln!("usage: beam_cli analyze [options] <input>...");
    eprintln!();
    eprintln!(
        "Inputs ending in .json are read as JSON beam inputs; anything else as beam data CSV."
    );
    eprintln!();
    eprintln!("options:");
    eprintln!("  --format text|csv|json   output format (default: text)");
    eprintln!("  --output-dir DIR         write <stem>_analysis_results.<csv|json> into DIR");
    eprintln!("  --stations               include moment and shear at every station");
    eprintln!(
        "  --config FILE            read settings from FILE (default: ./{})",
        config::DEFAULT_CONFIG_FILE
    );
    eprintln!("  -h, --help               show this help");
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One input file and what became of it
struct Job {
    path: PathBuf,
    outcome: CalcResult<(BeamInput, BeamAnalysis)>,
}

fn run_job(path: &Path) -> CalcResult<(BeamInput, BeamAnalysis)> {
    info!(path = %path.display(), "loading beam");
    let input = load_beam_input(path)?;
    let model = input.to_model()?;
    debug!(label = %input.label, loads = model.load_count(), "validated beam");
    let analysis = analyze_detailed(&model)?;
    Ok((input, analysis))
}

/// Load, validate and analyze every input in parallel, in input order.
fn run_jobs(paths: &[PathBuf]) -> Vec<Job> {
    paths
        .par_iter()
        .map(|path| Job {
            path: path.clone(),
            outcome: run_job(path),
        })
        .collect()
}

fn write_output(
    job: &Job,
    input: &BeamInput,
    analysis: &BeamAnalysis,
    result_path: Option<&Path>,
    config: &Config,
) -> CalcResult<()> {
    let report = || {
        let mut report = AnalysisReport::new(&input.label, analysis)
            .with_source(job.path.display().to_string());
        if config.show_stations {
            report = report.with_stations(analysis);
        }
        report
    };

    match (config.format, result_path) {
        (OutputFormat::Text, _) => {
            print!("{}", output::render_text(input, analysis, config.show_stations));
            println!();
        }
        (OutputFormat::Csv, Some(path)) => {
            save_results_csv(&analysis.results, path)?;
            info!(path = %path.display(), "results written");
        }
        (OutputFormat::Csv, None) => {
            println!("# {}", input.label);
            print!("{}", results_to_csv(&analysis.results)?);
        }
        (OutputFormat::Json, Some(path)) => {
            save_report_json(&report(), path)?;
            info!(path = %path.display(), "report written");
        }
        (OutputFormat::Json, None) => {
            let json = serde_json::to_string_pretty(&report())?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn report_failure(path: &Path, error: &CalcError) {
    warn!(path = %path.display(), code = error.error_code(), "beam failed");
    eprintln!("Error in {}: {}", path.display(), error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            usage();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {}", err);
            usage();
            return ExitCode::from(2);
        }
    };
    init_logging(&config.log_filter);

    if let Some(dir) = &config.output_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("error: cannot create output directory '{}': {}", dir.display(), e);
            return ExitCode::from(2);
        }
    }

    let result_paths: Vec<Option<PathBuf>> = match (&config.output_dir, config.format) {
        (Some(dir), OutputFormat::Csv | OutputFormat::Json) => {
            let extension = if config.format == OutputFormat::Csv { "csv" } else { "json" };
            output::result_file_names(&config.inputs, extension)
                .into_iter()
                .map(|name| Some(dir.join(name)))
                .collect()
        }
        _ => vec![None; config.inputs.len()],
    };

    let jobs = run_jobs(&config.inputs);
    let mut failures = 0;
    for (job, result_path) in jobs.iter().zip(&result_paths) {
        let written = match &job.outcome {
            Ok((input, analysis)) => {
                write_output(job, input, analysis, result_path.as_deref(), &config)
            }
            Err(e) => Err(e.clone()),
        };
        if let Err(e) = written {
            report_failure(&job.path, &e);
            failures += 1;
        }
    }

    info!(beams = jobs.len(), failures, "analysis complete");
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;

    fn write_beam(name: &str, contents: &str) -> PathBuf {
        let path = temp_dir().join(format!("beam_cli_test_{}", name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_jobs_keep_their_own_results() {
        let missing = temp_dir().join("beam_cli_test_missing.csv");
        let short = write_beam("short.csv", "L,W,H,E\n4,2,4,1000\nP,M\n1,2\n");
        let outside = write_beam("outside.csv", "L,W,H,E\n5,2,4,1000\nP,M\n6,10\n");
        let long = write_beam("long.csv", "L,W,H,E\n10,2,4,1000\nP,M\n0,3\n");

        let paths = vec![missing.clone(), short.clone(), outside.clone(), long.clone()];
        let jobs = run_jobs(&paths);
        assert_eq!(jobs.len(), 4);
        for (job, path) in jobs.iter().zip(&paths) {
            assert_eq!(&job.path, path);
        }

        assert_eq!(jobs[0].outcome.as_ref().unwrap_err().error_code(), "FILE_ERROR");
        let (input, analysis) = jobs[1].outcome.as_ref().unwrap();
        assert_eq!(input.label, "beam_cli_test_short");
        // M = 2 * (4 - 1)
        assert_eq!(analysis.results.max_bending_moment, 6.0);
        assert_eq!(
            jobs[2].outcome.as_ref().unwrap_err().error_code(),
            "OUT_OF_RANGE_LOAD"
        );
        let (input, analysis) = jobs[3].outcome.as_ref().unwrap();
        assert_eq!(input.label, "beam_cli_test_long");
        assert_eq!(analysis.results.max_bending_moment, 30.0);

        for path in [short, outside, long] {
            let _ = fs::remove_file(path);
        }
    }
}
