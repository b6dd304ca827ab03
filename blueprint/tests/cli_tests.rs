use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A throwaway project directory holding one configuration document.
struct BlueprintTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl BlueprintTestEnv {
    fn with_document(file_name: &str, content: &str) -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        fs::write(root.join(file_name), content)?;
        Ok(Self { _tmp: tmp, root })
    }

    fn blueprint(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("blueprint"));
        cmd.current_dir(&self.root).env_remove("BLUEPRINT_CONFIG");
        cmd
    }

    fn read(&self, file_name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.root.join(file_name))?)
    }
}

const TAXI: &str = r#"
partitions:
  - name: monthly
    partition_type: monthly
    config:
      start_date: "2023-01-01"
      end_offset: 1
  - name: borough
    partition_type: categorical
    config:
      categories: [bronx, queens]
assets:
  - name: taxi_trips
    resources: [taxi_api, local_fs]
    partitions: [monthly]
    checks:
      - check_type: volume
        config:
          min: {value: 1000, operator: gt}
  - name: trips_by_borough
    depends_on: taxi_trips
    resources: [duckdb]
    partitions: [monthly, borough]
    checks:
      - check_type: nullity
        config: {column: borough, threshold_pct: 0.5}
  - name: zones
    resources: [taxi_api]
"#;

#[test]
fn test_validate_accepts_discovered_document() -> Result<()> {
    let env = BlueprintTestEnv::with_document("assets.yml", TAXI)?;

    env.blueprint()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("Assets: 3"))
        .stdout(predicate::str::contains("Checks: 2"));
    Ok(())
}

#[test]
fn test_validate_reports_every_error() -> Result<()> {
    let env = BlueprintTestEnv::with_document(
        "blueprint.yml",
        r#"
partitions:
  - {name: p1, partition_type: weekly, config: {start_date: bad-date}}
assets:
  - {name: a1, depends_on: a2, resources: [r1]}
  - name: people
    resources: []
    checks:
      - check_type: bounds
        config:
          column: age
          min: {value: 50, operator: ge}
          max: {value: 10, operator: le}
"#,
    )?;

    env.blueprint()
        .arg("validate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("2 error(s) found"))
        .stderr(predicate::str::contains("start_date"))
        .stderr(predicate::str::contains("min.value must be < max.value"));
    Ok(())
}

#[test]
fn test_validate_dangling_references() -> Result<()> {
    let env = BlueprintTestEnv::with_document(
        "assets.yml",
        r#"
partitions:
  - {name: p1, partition_type: daily, config: {start_date: "2024-01-01"}}
assets:
  - {name: a1, depends_on: a2, resources: [r1], partitions: [p2]}
"#,
    )?;

    env.blueprint()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("references unknown 'a2'"))
        .stderr(predicate::str::contains("references unknown 'p2'"));
    Ok(())
}

#[test]
fn test_validate_missing_document() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    Command::new(assert_cmd::cargo::cargo_bin!("blueprint"))
        .current_dir(tmp.path())
        .env_remove("BLUEPRINT_CONFIG")
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    Ok(())
}

#[test]
fn test_env_override_selects_document() -> Result<()> {
    let env = BlueprintTestEnv::with_document("custom.yml", TAXI)?;

    env.blueprint()
        .env("BLUEPRINT_CONFIG", env.root.join("custom.yml"))
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.yml"));
    Ok(())
}

#[test]
fn test_validate_resources() -> Result<()> {
    let env = BlueprintTestEnv::with_document("assets.yml", TAXI)?;

    env.blueprint()
        .args(["validate", "-r", "taxi_api", "-r", "local_fs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("resource 'duckdb'"));

    env.blueprint()
        .args(["validate", "-r", "taxi_api", "-r", "local_fs", "-r", "duckdb"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_validate_json_output() -> Result<()> {
    let env = BlueprintTestEnv::with_document("assets.yml", TAXI)?;

    let output = env
        .blueprint()
        .args(["validate", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["partitions"][1]["config"]["partition_keys"][0], "bronx");
    assert_eq!(json["assets"][0]["schedule"], "eager");
    assert_eq!(json["assets"][0]["checks"][0]["config"]["anomaly_from_n"], 10);
    Ok(())
}

#[test]
fn test_plan_prints_layers() -> Result<()> {
    let env = BlueprintTestEnv::with_document("assets.yml", TAXI)?;

    env.blueprint()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Layer 0: taxi_trips, zones"))
        .stdout(predicate::str::contains("Layer 1: trips_by_borough"));
    Ok(())
}

#[test]
fn test_inspect_lists_assets() -> Result<()> {
    let env = BlueprintTestEnv::with_document("assets.yml", TAXI)?;

    env.blueprint()
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("trips_by_borough"))
        .stdout(predicate::str::contains("nullity(borough)"))
        .stdout(predicate::str::contains("partition 'monthly' (monthly from 2023-01-01)"));
    Ok(())
}

#[test]
fn test_inspect_categorical_partition_has_no_start() -> Result<()> {
    let env = BlueprintTestEnv::with_document(
        "assets.yml",
        "partitions: [{name: regions, partition_type: categorical, config: {categories: [eu, us]}}]\nassets: [{name: a1, resources: [r1], partitions: [regions]}]\n",
    )?;

    env.blueprint()
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("partition 'regions' (categorical)\n"));
    Ok(())
}

#[test]
fn test_tag_case_is_not_folded() -> Result<()> {
    let env = BlueprintTestEnv::with_document(
        "assets.yml",
        "partitions: [{name: p, partition_type: DAILY, config: {start_date: '2024-01-01'}}]\nassets: [{name: a1, resources: [r1]}]\n",
    )?;

    env.blueprint()
        .arg("validate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unrecognized type 'DAILY'"));
    Ok(())
}

#[test]
fn test_fmt_write_then_check() -> Result<()> {
    let env = BlueprintTestEnv::with_document(
        "assets.yml",
        "assets: [{asset_name: a1, resources: [r1]}]\n",
    )?;

    env.blueprint()
        .arg("fmt")
        .assert()
        .success()
        .stdout(predicate::str::contains("name: a1"));
    assert!(env.read("assets.yml")?.contains("asset_name"));

    env.blueprint()
        .args(["fmt", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rewritten"));
    let rewritten = env.read("assets.yml")?;
    assert!(!rewritten.contains("asset_name"));
    assert!(rewritten.contains("schedule: eager"));

    env.blueprint()
        .args(["fmt", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already canonical"));
    Ok(())
}
