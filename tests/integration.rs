//! Integration tests for fixture generation.
//!
//! Exercises the path from a base result file on disk through generation to
//! the written fixture files, plus the command-line surface.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use approx::assert_abs_diff_eq;
use tempfile::TempDir;
use volsurf_fixtures::generator::DEFAULT_TENOR_DAYS;
use volsurf_fixtures::{FixtureError, FixtureGenerator, GeneratorConfig, SyntheticFixture};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const BASE_CANONICAL: &str = r#"{
  "fixtureId": "spx_2025-01-03_7d",
  "forward": 100.0,
  "T": 0.019178082191780823,
  "strikes": [90.0, 100.0, 110.0],
  "svi_params": {"a": 0.04, "b": 0.1, "rho": -0.3, "m": 0.0, "sigma": 0.2},
  "ivs": [1.85, 1.77, 1.76],
  "df": 0.9995
}"#;

const BASE_ALTERNATE: &str = r#"{
  "F": 100.0,
  "strikes": [90.0, 100.0, 110.0],
  "svi": {"a": 0.04, "b": 0.1, "rho": -0.3, "m": 0.0, "sigma": 0.2}
}"#;

fn write_base(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read_fixture(path: &Path) -> SyntheticFixture {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Independent recomputation of the SVI implied vol.
fn svi_iv(forward: f64, strike: f64, days: u32, p: [f64; 5]) -> f64 {
    let [a, b, rho, m, sigma] = p;
    let k = (strike / forward).ln();
    let x = k - m;
    let w = (a + b * (rho * x + (x * x + sigma * sigma).sqrt())).max(1e-12);
    (w / (f64::from(days) / 365.0)).sqrt()
}

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generate-multi-tenor"))
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

#[test]
fn default_tenors_write_two_files_next_to_base() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "spx_2025-01-03_7d_result.json", BASE_CANONICAL);

    let generator = FixtureGenerator::from_path(&base, GeneratorConfig::default()).unwrap();
    let written = generator.run().unwrap();

    assert_eq!(written.len(), DEFAULT_TENOR_DAYS.len());
    assert_eq!(
        written[0].path,
        dir.path().join("spx_2025-01-03_7d_synthetic_14d_result.json")
    );
    assert_eq!(
        written[1].path,
        dir.path().join("spx_2025-01-03_7d_synthetic_30d_result.json")
    );
    assert!(written.iter().all(|w| w.path.exists()));
}

#[test]
fn thirty_day_scenario_matches_independent_recomputation() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "spx_result.json", BASE_CANONICAL);

    let generator =
        FixtureGenerator::from_path(&base, GeneratorConfig::with_tenors(vec![30])).unwrap();
    let written = generator.run().unwrap();
    let fixture = read_fixture(&written[0].path);

    assert_eq!(fixture.fixture_id, "spx_synthetic_30d");
    assert_abs_diff_eq!(fixture.expiry, 0.082_191_780_821_917_8, epsilon = 1e-12);
    assert_eq!(fixture.strikes, vec![90.0, 100.0, 110.0]);
    assert_eq!(fixture.ivs.len(), fixture.strikes.len());
    for (&strike, &iv) in fixture.strikes.iter().zip(&fixture.ivs) {
        let expected = svi_iv(100.0, strike, 30, [0.04, 0.1, -0.3, 0.0, 0.2]);
        assert_abs_diff_eq!(iv, expected, epsilon = 1e-9);
    }
    assert_eq!(fixture.df, 0.9995);
}

#[test]
fn alternate_keys_produce_same_ivs_as_canonical() {
    let dir = TempDir::new().unwrap();
    let canonical = write_base(&dir, "a_result.json", BASE_CANONICAL);
    let alternate = write_base(&dir, "b_result.json", BASE_ALTERNATE);
    let config = GeneratorConfig::with_tenors(vec![14]);

    let from_canonical = FixtureGenerator::from_path(&canonical, config.clone())
        .unwrap()
        .generate(14)
        .unwrap();
    let from_alternate = FixtureGenerator::from_path(&alternate, config)
        .unwrap()
        .generate(14)
        .unwrap();

    assert_eq!(from_canonical.ivs, from_alternate.ivs);
    assert_eq!(from_canonical.svi_params, from_alternate.svi_params);
    assert_eq!(from_alternate.df, 1.0);
}

#[test]
fn one_year_tenor_gives_unit_t() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "x_result.json", BASE_CANONICAL);
    let generator =
        FixtureGenerator::from_path(&base, GeneratorConfig::with_tenors(vec![365])).unwrap();
    assert_eq!(generator.generate(365).unwrap().expiry, 1.0);
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "x_result.json", BASE_CANONICAL);
    let config = GeneratorConfig::with_tenors(vec![14, 30]);

    let first = FixtureGenerator::from_path(&base, config.clone()).unwrap().run().unwrap();
    let first_bytes: Vec<Vec<u8>> = first.iter().map(|w| fs::read(&w.path).unwrap()).collect();
    let second = FixtureGenerator::from_path(&base, config).unwrap().run().unwrap();
    let second_bytes: Vec<Vec<u8>> = second.iter().map(|w| fs::read(&w.path).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn generated_fixture_is_a_valid_base() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "x_result.json", BASE_CANONICAL);
    let written = FixtureGenerator::from_path(&base, GeneratorConfig::with_tenors(vec![14]))
        .unwrap()
        .run()
        .unwrap();

    let chained =
        FixtureGenerator::from_path(&written[0].path, GeneratorConfig::with_tenors(vec![30]))
            .unwrap()
            .generate(30)
            .unwrap();
    assert_eq!(chained.fixture_id, "x_synthetic_14d_synthetic_30d");
}

#[test]
fn output_dir_override() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let base = write_base(&dir, "x_result.json", BASE_CANONICAL);

    let config = GeneratorConfig::with_tenors(vec![7]).output_dir(out.path());
    let written = FixtureGenerator::from_path(&base, config).unwrap().run().unwrap();

    assert_eq!(written[0].path, out.path().join("x_synthetic_7d_result.json"));
    assert!(!dir.path().join("x_synthetic_7d_result.json").exists());
}

#[test]
fn missing_params_aborts_before_writing() {
    let dir = TempDir::new().unwrap();
    let base = write_base(
        &dir,
        "bad_result.json",
        r#"{"forward": 100.0, "strikes": [90.0, 100.0]}"#,
    );

    let err = FixtureGenerator::from_path(&base, GeneratorConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        FixtureError::MissingField {
            field: "svi_params (or svi)"
        }
    ));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn malformed_json_aborts() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "bad_result.json", "{ not json");
    assert!(matches!(
        FixtureGenerator::from_path(&base, GeneratorConfig::default()),
        Err(FixtureError::Json { .. })
    ));
}

#[test]
fn degenerate_params_floor_variance() {
    let dir = TempDir::new().unwrap();
    let base = write_base(
        &dir,
        "neg_result.json",
        r#"{"forward": 100.0, "strikes": [80.0, 100.0, 120.0],
            "svi_params": {"a": -0.5, "b": 0.1, "rho": 0.0, "m": 0.0, "sigma": 0.1}}"#,
    );
    let fixture = FixtureGenerator::from_path(&base, GeneratorConfig::with_tenors(vec![365]))
        .unwrap()
        .generate(365)
        .unwrap();
    for iv in fixture.ivs {
        assert!(iv.is_finite());
        assert_abs_diff_eq!(iv, 1e-6, epsilon = 1e-18);
    }
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[test]
fn cli_without_arguments_exits_one() {
    let output = cli().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("BASE_RESULT"), "stderr: {stderr}");
}

#[test]
fn cli_without_tenors_writes_default_fixtures() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "x_result.json", BASE_CANONICAL);
    let output = cli().arg(&base).output().unwrap();

    assert!(output.status.success());
    assert!(dir.path().join("x_synthetic_14d_result.json").exists());
    assert!(dir.path().join("x_synthetic_30d_result.json").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn cli_malformed_json_names_the_file() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "broken_result.json", "{ not json");
    let output = cli().arg(&base).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken_result.json"));
    assert!(stderr.contains("malformed json"));
}

#[test]
fn cli_missing_base_exits_one() {
    let dir = TempDir::new().unwrap();
    let output = cli()
        .arg(dir.path().join("nope_result.json"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Base file not found"));
}

#[test]
fn cli_rejects_zero_tenor() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "x_result.json", BASE_CANONICAL);
    let output = cli().arg(&base).arg("0").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_writes_requested_tenors_and_prints_summary() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "x_result.json", BASE_CANONICAL);
    let output = cli().arg(&base).args(["7", "60"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("x_synthetic_7d_result.json"));
    assert!(stdout.contains("x_synthetic_60d_result.json"));
    assert!(dir.path().join("x_synthetic_7d_result.json").exists());
    assert!(dir.path().join("x_synthetic_60d_result.json").exists());
    assert!(!dir.path().join("x_synthetic_14d_result.json").exists());
}

#[test]
fn cli_data_error_exits_one_without_output() {
    let dir = TempDir::new().unwrap();
    let base = write_base(&dir, "x_result.json", r#"{"strikes": [100.0]}"#);
    let output = cli().arg(&base).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("forward (or F)"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
