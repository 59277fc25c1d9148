//! End-to-end tests of the prepare, filter, annotate and view operations
//!
//! Each test builds a small data directory in a temporary location.

use ferro_sv::check::check_data;
use ferro_sv::cli::{OutputFormat, OutputKind};
use ferro_sv::commands::{annotate, filter, output_or_default, view, RunConfig};
use ferro_sv::config::DataPaths;
use ferro_sv::prepare::{prepare_companions, PrepareConfig};
use ferro_sv::SvError;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

const FORWARD: &str = "\
S\tchr1:1000-2000\tchr1:11000-12000
A\tchr1:3000-3100\tchr5:800-700
E\tchr2:500-600
";

const REVERSE: &str = "\
S\tchr1:11000-12000\tchr1:1000-2000
A\tchr1:11800-11900\tchr9:100-200
E\tchr1:11600-11700
";

const CATALOG: &str = "\
DEL;chr1:1500-1600;chr1:11500-11550
INS\tchr3:100-200\tchr3:150-260
";

const HEADER: &str = "# SMAP File Version:\t0.0.1\n#h RefStartPos\tRefEndPos";

fn smap_row(id: i64, chr: u32, chr2: u32, x: f64, y: f64, link: i64, kind: &str) -> String {
    format!(
        "{}\t1\t{}\t{}\t0\t0\t{:.1}\t{:.1}\t0\t{}\t0\t0\t{}",
        id, chr, chr2, x, y, kind, link
    )
}

fn data_dir() -> (TempDir, DataPaths) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fromHG38toCHM13-alignments"), FORWARD).unwrap();
    fs::write(dir.path().join("fromCHM13toHG38-alignments"), REVERSE).unwrap();
    fs::write(dir.path().join("prediction_38.bed"), CATALOG).unwrap();

    let paths = DataPaths::in_dir(dir.path());
    prepare_companions(&PrepareConfig::for_paths(&paths, false)).unwrap();
    (dir, paths)
}

fn run_config(dir: &Path, paths: &DataPaths, rows: &[String], kind: OutputKind) -> RunConfig {
    let input = dir.join("sample.smap");
    let mut content = HEADER.to_string();
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&input, content).unwrap();

    RunConfig {
        output: output_or_default(&input, None, kind),
        input,
        distance: 100,
        paths: paths.clone(),
    }
}

fn data_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(String::from)
        .collect()
}

fn ids(lines: &[String]) -> Vec<i64> {
    lines
        .iter()
        .map(|line| line.split('\t').next().unwrap().parse().unwrap())
        .collect()
}

// =============================================================================
// Data preparation
// =============================================================================

#[test]
fn test_prepared_directory_checks_clean() {
    let (_dir, paths) = data_dir();
    let result = check_data(&paths);
    assert!(result.valid, "errors: {:?}", result.errors);

    let (empty, alternatives) = paths.companions();
    assert_eq!(fs::read_to_string(empty).unwrap(), "chr1:11600-11700\n");
    assert_eq!(
        fs::read_to_string(alternatives).unwrap(),
        "chr1:11800-11900\tchr9:100-200\tchr1:1800-1900\n"
    );
}

// =============================================================================
// Filter
// =============================================================================

#[test]
fn test_filter_excludes_catalog_overlaps() {
    let (dir, paths) = data_dir();
    let config = run_config(
        dir.path(),
        &paths,
        &[
            smap_row(3, 1, 1, 5000.0, 5200.0, -1, "deletion"),
            smap_row(1, 1, 1, 1550.0, 1570.0, -1, "deletion"),
            smap_row(2, 3, 3, 150.0, 160.0, -1, "insertion"),
        ],
        OutputKind::Filtered,
    );

    let summary = filter(&config).unwrap();
    assert_eq!(summary.variants, 3);
    assert_eq!(summary.written, 1);
    assert!(config.output.ends_with("sample.filtered.smap"));

    let written = fs::read_to_string(&config.output).unwrap();
    assert!(written.starts_with(HEADER));
    assert_eq!(ids(&data_lines(&config.output)), vec![3]);
}

#[test]
fn test_filter_translocation_needs_both_windows_clear() {
    let (dir, paths) = data_dir();
    let config = run_config(
        dir.path(),
        &paths,
        &[
            // Neither window touches the catalog
            smap_row(10, 1, 2, 5000.0, 9000.0, -1, "translocation_interchr"),
            // Window A reaches chr1:1500-1600
            smap_row(11, 1, 2, 1450.0, 9000.0, -1, "translocation_interchr"),
            // Both windows match
            smap_row(12, 1, 3, 1650.0, 250.0, -1, "translocation_interchr"),
        ],
        OutputKind::Filtered,
    );

    filter(&config).unwrap();
    assert_eq!(ids(&data_lines(&config.output)), vec![10]);
}

#[test]
fn test_filter_inversion_keeps_first_leg_in_id_order() {
    let (dir, paths) = data_dir();
    let config = run_config(
        dir.path(),
        &paths,
        &[
            smap_row(21, 1, 1, 8000.0, -1.0, 20, "inversion_partial"),
            smap_row(5, 1, 1, 7000.0, 7100.0, -1, "deletion"),
            smap_row(20, 1, 1, 6000.0, -1.0, 21, "inversion"),
            // Spans the catalog record chr1:1500-1600
            smap_row(30, 1, 1, 1000.0, -1.0, 31, "inversion"),
            smap_row(31, 1, 1, 2000.0, -1.0, 30, "inversion_partial"),
        ],
        OutputKind::Filtered,
    );

    let summary = filter(&config).unwrap();
    assert_eq!(summary.variants, 3);
    assert_eq!(summary.written, 2);
    // The pair 21/20 is identified by 21, its first leg in the file
    assert_eq!(ids(&data_lines(&config.output)), vec![5, 21]);
}

#[test]
fn test_filter_invalid_inversion_writes_nothing() {
    let (dir, paths) = data_dir();
    let config = run_config(
        dir.path(),
        &paths,
        &[smap_row(40, 1, 1, 8000.0, -1.0, 41, "inversion")],
        OutputKind::Filtered,
    );

    assert!(matches!(
        filter(&config),
        Err(SvError::InvalidInversion { id: 40, .. })
    ));
    assert!(!config.output.exists());
}

#[test]
fn test_filter_reads_gzip_input() {
    let (dir, paths) = data_dir();
    let input = dir.path().join("sample.smap.gz");
    let content = format!(
        "{}\n{}\n",
        HEADER,
        smap_row(3, 1, 1, 5000.0, 5200.0, -1, "deletion")
    );

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    fs::write(&input, encoder.finish().unwrap()).unwrap();

    let config = RunConfig {
        output: output_or_default(&input, None, OutputKind::Filtered),
        input,
        distance: 100,
        paths,
    };
    filter(&config).unwrap();
    assert!(config.output.ends_with("sample.filtered.smap"));
    assert_eq!(ids(&data_lines(&config.output)), vec![3]);
}

// =============================================================================
// Annotate
// =============================================================================

#[test]
fn test_annotate_report_layout() {
    let (dir, paths) = data_dir();
    let config = run_config(
        dir.path(),
        &paths,
        &[
            smap_row(50, 1, 2, 1550.0, 550.0, -1, "translocation_interchr"),
            smap_row(1, 1, 1, 1450.0, 1650.0, -1, "deletion"),
        ],
        OutputKind::Annotated,
    );

    annotate(&config).unwrap();
    assert!(config.output.ends_with("sample.annotated.txt"));

    let report = fs::read_to_string(&config.output).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    let original = smap_row(1, 1, 1, 1450.0, 1650.0, -1, "deletion");

    let expected = vec![
        format!("1 chr1:1450-1650 {}", original),
        "\tStructural variants induced by transition from HG38 to CHM13-T2T".to_string(),
        "\t\tDEL chr1:1500-1600 (101) chr1:11500-11550 (51)".to_string(),
        "\tAmbiguous and other mapping events".to_string(),
        "\t\tchr1:1450-1650 site positions in CHM13 chr1:11450-11650".to_string(),
        "\t\t\tchr1:11600-11650 in CHM13 have no mapping to HG38".to_string(),
        String::new(),
        "50 TRANSLOCATION A=chr1:1550\tB=chr2:550".to_string(),
        "\tA: chr1:1450-1650".to_string(),
        "\t\tStructural variants induced by transition from HG38 to CHM13-T2T".to_string(),
        "\t\t\tDEL chr1:1500-1600 (101) chr1:11500-11550 (51)".to_string(),
        "\t\tAmbiguous and other mapping events".to_string(),
        "\t\t\tchr1:1450-1650 site positions in CHM13 chr1:11450-11650".to_string(),
        "\t\t\t\tchr1:11600-11650 in CHM13 have no mapping to HG38".to_string(),
        String::new(),
        "\tB: chr2:450-650".to_string(),
        "\t\tStructural variants induced by transition from HG38 to CHM13-T2T".to_string(),
        "\t\t\tNone".to_string(),
        "\t\tAmbiguous and other mapping events".to_string(),
        "\t\t\tchr2:500-600 no mapping from HG38 to CHM13".to_string(),
        String::new(),
        String::new(),
    ];
    assert_eq!(lines, expected);
}

#[test]
fn test_annotate_inversion_header() {
    let (dir, paths) = data_dir();
    let config = run_config(
        dir.path(),
        &paths,
        &[
            smap_row(61, 1, 1, 3050.0, -1.0, 60, "inversion_partial"),
            smap_row(60, 1, 1, 3000.0, -1.0, 61, "inversion"),
        ],
        OutputKind::Annotated,
    );

    annotate(&config).unwrap();
    let report = fs::read_to_string(&config.output).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "61 60 INVERSION chr1:3000-3050");
    assert_eq!(lines[2], "\t\tNone");
    assert_eq!(
        lines[4],
        "\t\tchr1:3000-3050 alternative site mapping in CHM13 chr5:800-750 (Reversed)"
    );
}

#[test]
fn test_annotate_failure_leaves_no_output() {
    let (dir, paths) = data_dir();
    let config = run_config(
        dir.path(),
        &paths,
        &[
            smap_row(1, 1, 1, 5000.0, 5100.0, -1, "deletion"),
            // start > end reaches the mapping step and is rejected there
            smap_row(2, 1, 1, 1900.0, 1500.0, -1, "deletion"),
        ],
        OutputKind::Annotated,
    );

    assert!(matches!(
        annotate(&config),
        Err(SvError::InvalidMapping { .. })
    ));
    assert!(!config.output.exists());

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "fromCHM13toHG38-alignments",
            "fromCHM13toHG38-alignments-alternatives",
            "fromCHM13toHG38-alignments-empty",
            "fromHG38toCHM13-alignments",
            "prediction_38.bed",
            "sample.smap",
        ]
    );
}

// =============================================================================
// View
// =============================================================================

#[test]
fn test_view_multiple_sources() {
    let (_dir, paths) = data_dir();
    let mut out = Vec::new();
    view("chr1:1800-1850", &paths, OutputFormat::Text, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Position:  chr1:1800-1850");
    assert_eq!(lines[3], "\t\tNone");
    assert_eq!(
        lines[5],
        "\t\tchr1:1800-1850 site positions in CHM13 chr1:11800-11850"
    );
    assert_eq!(
        lines[6],
        "\t\t\tchr1:11800-11850 in CHM13 have multiple sources in HG38 chr9:100-150 chr1:1800-1850"
    );
}

#[test]
fn test_view_json_report() {
    let (_dir, paths) = data_dir();
    let mut out = Vec::new();
    view("chr1:1450-1650", &paths, OutputFormat::Json, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["query"], "chr1:1450-1650");
    assert_eq!(value["known_differences"][0]["label"], "DEL");
    assert_eq!(value["known_differences"][0]["chm13"], "chr1:11500-11550");

    let finding = &value["mapping_events"][0];
    assert_eq!(finding["kind"], "site_position");
    assert_eq!(finding["target"], "chr1:11450-11650");
    assert_eq!(finding["reversed"], false);
    assert_eq!(finding["nested"][0]["kind"], "no_mapping_back");
    assert_eq!(finding["nested"][0]["part"], "chr1:11600-11650");
}

#[test]
fn test_view_requires_companions() {
    let (dir, paths) = data_dir();
    fs::remove_file(dir.path().join("fromCHM13toHG38-alignments-alternatives")).unwrap();

    let mut out = Vec::new();
    assert!(matches!(
        view("chr1:1", &paths, OutputFormat::Text, &mut out),
        Err(SvError::MissingInput { .. })
    ));
}
