//! Rendering analysis results for the terminal and for result files.

use std::collections::HashSet;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use beam_core::calculations::{BeamAnalysis, StationForces};
use beam_core::model::BeamInput;

/// Result file names for a batch, one per input and all distinct.
///
/// `beam_data.csv` -> `beam_data_analysis_results.<ext>`. Inputs sharing a
/// stem get a numeric suffix in input order: `beam`, `beam_2`, `beam_3`.
pub fn result_file_names(inputs: &[PathBuf], extension: &str) -> Vec<PathBuf> {
    let mut used = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input_stem(input);
            let mut name = stem.clone();
            let mut n = 1;
            while !used.insert(name.clone()) {
                n += 1;
                name = format!("{}_{}", stem, n);
            }
            PathBuf::from(format!("{}_analysis_results.{}", name, extension))
        })
        .collect()
}

fn input_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "beam".to_string())
}

/// Human-readable summary of one analyzed beam
pub fn render_text(input: &BeamInput, analysis: &BeamAnalysis, show_stations: bool) -> String {
    let r = &analysis.results;
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "═══════════════════════════════════════");
    let _ = writeln!(out, "  BEAM ANALYSIS: {}", display_label(&input.label));
    let _ = writeln!(out, "═══════════════════════════════════════");
    let _ = writeln!(out);
    let _ = writeln!(out, "Input:");
    let _ = writeln!(out, "  Length:   {}", input.length);
    let _ = writeln!(out, "  Section:  {} x {} (width x height)", input.width, input.height);
    let _ = writeln!(out, "  E:        {}", input.elastic_modulus);
    let _ = writeln!(out, "  Loads:    {}", input.loads.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "Demand:");
    let _ = writeln!(out, "  M_max = {:.6e}", r.max_bending_moment);
    let _ = writeln!(out, "  V_max = {:.6e}", r.max_shear_force);
    let _ = writeln!(out);
    let _ = writeln!(out, "Stress:");
    let _ = writeln!(out, "  σ_max = {:.6e}", r.max_bending_stress);
    let _ = writeln!(out, "  τ_max = {:.6e}", r.max_shear_stress);
    let _ = writeln!(out);
    let _ = writeln!(out, "Deflection:");
    let _ = writeln!(out, "  δ_max = {:.6e}", r.max_deflection);

    if show_stations {
        let _ = writeln!(out);
        out.push_str(&render_station_table(&analysis.forces.stations));
    }
    out
}

/// Fixed-width table of station values
pub fn render_station_table(stations: &[StationForces]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>14} {:>16} {:>16}", "x", "M(x)", "V(x)");
    for s in stations {
        let _ = writeln!(out, "{:>14.6} {:>16.6e} {:>16.6e}", s.position, s.moment, s.shear);
    }
    out
}

fn display_label(label: &str) -> &str {
    if label.is_empty() {
        "(unnamed)"
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beam_core::calculations::analyze_detailed;
    use beam_core::loads::PointLoad;

    fn input() -> BeamInput {
        BeamInput {
            label: "B-7".to_string(),
            length: 10.0,
            width: 6.0,
            height: 10.0,
            elastic_modulus: 200_000.0,
            loads: vec![PointLoad::new(2.0, 10.0)],
        }
    }

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(|s| PathBuf::from(*s)).collect()
    }

    #[test]
    fn test_result_file_names() {
        assert_eq!(
            result_file_names(&paths(&["data/beam_data.csv", "b.json"]), "csv"),
            paths(&["beam_data_analysis_results.csv", "b_analysis_results.csv"])
        );
    }

    #[test]
    fn test_same_stem_inputs_get_distinct_names() {
        let names = result_file_names(
            &paths(&["site_a/beam.csv", "site_b/beam.csv", "beam.json", "beam_2.csv"]),
            "json",
        );
        assert_eq!(
            names,
            paths(&[
                "beam_analysis_results.json",
                "beam_2_analysis_results.json",
                "beam_3_analysis_results.json",
                "beam_2_2_analysis_results.json",
            ])
        );
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_render_text() {
        let input = input();
        let analysis = analyze_detailed(&input.to_model().unwrap()).unwrap();
        let text = render_text(&input, &analysis, false);
        assert!(text.contains("BEAM ANALYSIS: B-7"));
        assert!(text.contains("M_max = 8.000000e1"));
        assert!(text.contains("V_max = 1.000000e1"));
        assert!(!text.contains("M(x)"));
    }

    #[test]
    fn test_render_text_with_stations() {
        let input = input();
        let analysis = analyze_detailed(&input.to_model().unwrap()).unwrap();
        let text = render_text(&input, &analysis, true);
        assert!(text.contains("M(x)"));
        // header + 3 stations
        assert_eq!(render_station_table(&analysis.forces.stations).lines().count(), 4);
    }

    #[test]
    fn test_unnamed_label() {
        assert_eq!(display_label(""), "(unnamed)");
    }
}
