use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::{fs, path::Path, process::Command};

/// Runs inside `dir` so the rolling log and any config lookup stay in the temp dir.
fn bin_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("phonemic").expect("phonemic built");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid json on stdout")
}

#[test]
fn help_works() {
    let tmp = tempfile::tempdir().unwrap();
    bin_cmd(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phonemic inventory analyzer"));
}

#[test]
fn list_shows_seed_languages() {
    let tmp = tempfile::tempdir().unwrap();
    bin_cmd(tmp.path())
        .args(["--no-cache", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rotokas")
                .and(predicate::str::contains("Hawaiian"))
                .and(predicate::str::contains("English")),
        );
}

#[test]
fn list_limit_applies() {
    let tmp = tempfile::tempdir().unwrap();
    let v = stdout_json(bin_cmd(tmp.path()).args(["--no-cache", "list", "--limit", "1", "--format", "json"]));
    assert_eq!(v.as_array().map(Vec::len), Some(1));
    assert_eq!(v[0]["name"], "Rotokas");
}

#[test]
fn validate_reports_english_gaps() {
    let tmp = tempfile::tempdir().unwrap();
    let v = stdout_json(bin_cmd(tmp.path()).args(["--no-cache", "validate", "--format", "json"]));
    let items = v.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["report"]["complexity"]["message"], "19 optimized, 0 complex, 0 invalid");
    assert_eq!(items[2]["language"], "English");
    assert_eq!(items[2]["report"]["completeness"]["passed"], false);
    assert_eq!(
        items[2]["report"]["completeness"]["message"],
        "Unmapped phonemes: ɒː, ɒː, ə, ər, i, ʔ"
    );
}

#[test]
fn validate_text_single_language() {
    let tmp = tempfile::tempdir().unwrap();
    bin_cmd(tmp.path())
        .args(["--no-cache", "validate", "hawaiian"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hawaiian (#2)")
                .and(predicate::str::contains("25 optimized, 8 complex, 0 invalid"))
                .and(predicate::str::contains("Rotokas").not()),
        );
}

#[test]
fn compare_rotokas_hawaiian() {
    let tmp = tempfile::tempdir().unwrap();
    let v = stdout_json(bin_cmd(tmp.path()).args([
        "--no-cache",
        "compare",
        "Rotokas",
        "2",
        "--format",
        "json",
    ]));
    let sim = &v[0]["similarity"];
    assert_eq!(sim["jaccard"], 57.1);
    assert_eq!(sim["functional_jaccard"], 71.4);
    assert_eq!(sim["functional_matches"][0][0], "k");
    assert_eq!(sim["functional_matches"][0][1], "ʔ");
}

#[test]
fn compare_all_pairs_and_bad_arity() {
    let tmp = tempfile::tempdir().unwrap();
    let v = stdout_json(bin_cmd(tmp.path()).args(["--no-cache", "compare", "--format", "json"]));
    assert_eq!(v.as_array().map(Vec::len), Some(3));

    bin_cmd(tmp.path())
        .args(["--no-cache", "compare", "rotokas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("two languages or none"));
}

#[test]
fn unknown_language_fails() {
    let tmp = tempfile::tempdir().unwrap();
    bin_cmd(tmp.path())
        .args(["--no-cache", "show", "Klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language `Klingon`"));
}

#[test]
fn overview_counts() {
    let tmp = tempfile::tempdir().unwrap();
    let v = stdout_json(bin_cmd(tmp.path()).args([
        "--no-cache",
        "overview",
        "--class",
        "vowels",
        "--format",
        "json",
    ]));
    assert_eq!(v["languages"], 3);
    let surface = v["surface_phonemes"].as_array().expect("array");
    assert!(surface.iter().any(|c| c["symbol"] == "a"));
    assert!(!surface.iter().any(|c| c["symbol"] == "k"));
}

#[test]
fn features_highlight() {
    let tmp = tempfile::tempdir().unwrap();
    let v = stdout_json(bin_cmd(tmp.path()).args([
        "--no-cache",
        "features",
        "rotokas",
        "--feature",
        "front",
        "--polarity",
        "minus",
        "--format",
        "json",
    ]));
    assert_eq!(v["highlighted"], serde_json::json!(["k"]));
    assert_eq!(v["matrix"]["j"]["front"], "+");
    assert_eq!(v["matrix"]["w"]["front"], "±");
}

#[test]
fn export_template_to_stdout_and_file() {
    let tmp = tempfile::tempdir().unwrap();
    bin_cmd(tmp.path())
        .args(["--no-cache", "export-template", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "language_name,language_family,iso_code,latitude,longitude,",
        ));

    bin_cmd(tmp.path())
        .args(["--no-cache", "export-template"])
        .assert()
        .success();
    let written = fs::read_to_string(tmp.path().join("phonemic_analysis_template.csv")).unwrap();
    assert!(written.contains("Rotokas"));
    assert!(!written.ends_with('\n'));
}

#[test]
fn add_edit_delete_persist_in_cache() {
    let tmp = tempfile::tempdir().unwrap();
    let cache = tmp.path().join("cache.json");
    let cache_arg = cache.to_str().unwrap();

    bin_cmd(tmp.path())
        .args(["--cache", cache_arg, "add", "--name", "Toy", "--elementary", "a k"])
        .args(["--lat", "-10.5", "--lon", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added Toy as #4"));
    assert!(cache.exists());

    bin_cmd(tmp.path())
        .args(["--cache", cache_arg, "edit", "toy", "--family", "Constructed"])
        .args(["--add-mapping", "ka=ka=open syllable"])
        .assert()
        .success();

    let v = stdout_json(bin_cmd(tmp.path()).args(["--cache", cache_arg, "show", "4", "--format", "json"]));
    assert_eq!(v["family"], "Constructed");
    assert_eq!(v["coordinates"][0], -10.5);
    assert_eq!(v["surfaceMappings"][0]["notes"], "open syllable");

    // bad mapping index: nothing is saved
    bin_cmd(tmp.path())
        .args(["--cache", cache_arg, "edit", "toy", "--name", "Renamed", "--remove-mapping", "7"])
        .assert()
        .failure();
    let v = stdout_json(bin_cmd(tmp.path()).args(["--cache", cache_arg, "show", "toy", "--format", "json"]));
    assert_eq!(v["name"], "Toy");
    assert_eq!(v["surfaceMappings"].as_array().map(Vec::len), Some(1));
    bin_cmd(tmp.path())
        .args(["--cache", cache_arg, "show", "Renamed"])
        .assert()
        .failure();

    bin_cmd(tmp.path())
        .args(["--cache", cache_arg, "delete", "Toy"])
        .assert()
        .success();
    bin_cmd(tmp.path())
        .args(["--cache", cache_arg, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Toy").not());

    // ids are not reused after delete
    bin_cmd(tmp.path())
        .args(["--cache", cache_arg, "add", "--name", "Next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#5"));
}

#[test]
fn import_then_reset() {
    let tmp = tempfile::tempdir().unwrap();
    let cache = tmp.path().join("cache.json");
    let cache_arg = cache.to_str().unwrap();
    let csv = tmp.path().join("langs.csv");
    fs::write(
        &csv,
        "language_name,language_family,surface_phonemes,elementary_segments\n\
         Toy,Constructed,\"a i k\",\"a k\"\n\
         ,Nameless,a,a\n",
    )
    .unwrap();

    let v = stdout_json(bin_cmd(tmp.path()).args([
        "--cache",
        cache_arg,
        "import-csv",
        csv.to_str().unwrap(),
        "--format",
        "json",
    ]));
    assert_eq!(v["rows"], 2);
    assert_eq!(v["created"], 1);
    assert_eq!(v["skipped"], 1);

    let v = stdout_json(bin_cmd(tmp.path()).args(["--cache", cache_arg, "list", "--format", "json"]));
    assert_eq!(v.as_array().map(Vec::len), Some(4));

    bin_cmd(tmp.path())
        .args(["--cache", cache_arg, "reset"])
        .assert()
        .success();
    let v = stdout_json(bin_cmd(tmp.path()).args(["--cache", cache_arg, "list", "--format", "json"]));
    assert_eq!(v.as_array().map(Vec::len), Some(3));
}

#[test]
fn export_csv_to_stdout() {
    let tmp = tempfile::tempdir().unwrap();
    bin_cmd(tmp.path())
        .args(["--no-cache", "export-csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hawaiian,Austronesian"));
}

#[test]
fn schema_dump_writes_files() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("schemas");
    bin_cmd(tmp.path())
        .args(["--no-cache", "schema", "--out-dir"])
        .arg(&out)
        .assert()
        .success();
    for name in [
        "language_validation.schema.json",
        "pair_comparison.schema.json",
        "overview_stats.schema.json",
        "import_summary.schema.json",
    ] {
        assert!(out.join(name).exists(), "{name} missing");
    }
}
