use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn tegen() -> Command {
    Command::cargo_bin("tegen").unwrap()
}

#[test]
fn test_init_writes_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");

    tegen()
        .arg("init")
        .arg("--output")
        .arg(&path)
        .arg("--length")
        .arg("40")
        .arg("--seed")
        .arg("9")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration written to"));

    let text = std::fs::read_to_string(&path).unwrap();
    let config: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(config["initial_length"], 40);
    assert_eq!(config["seed"], 9);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    tegen()
        .arg("init")
        .arg("-o")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tegen()
        .arg("init")
        .arg("-o")
        .arg(&path)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_run_prints_summary() {
    tegen()
        .args(["run", "--length", "20", "--steps", "10", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("Steps: 10"));
}

#[test]
fn test_run_json_snapshot() {
    let output = tegen()
        .args(["run", "-n", "15", "-s", "8", "--seed", "4", "--backend", "ring", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["step"], 8);
    assert_eq!(snapshot["backend"], "ring");
    let render = snapshot["render"].as_str().unwrap();
    assert_eq!(render.len() as u64, snapshot["length"].as_u64().unwrap());
    assert!(render.chars().all(|c| matches!(c, '-' | 'A' | 'x')));
}

#[test]
fn test_run_is_reproducible_across_backends() {
    let run = |backend: &str| {
        tegen()
            .args(["run", "-n", "25", "-s", "30", "--seed", "77", "--json", "-b", backend])
            .output()
            .unwrap()
    };
    let a: serde_json::Value = serde_json::from_slice(&run("contiguous").stdout).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&run("ring").stdout).unwrap();
    assert_eq!(a["render"], b["render"]);
    assert_eq!(a["active"], b["active"]);
}

#[test]
fn test_run_show_every() {
    tegen()
        .args(["run", "-n", "5", "-s", "4", "--seed", "2", "--show-every", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("     0 -----"))
        .stdout(predicate::str::is_match(r"(?m)^\s+2 [-Ax]+$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^\s+4 [-Ax]+$").unwrap());
}

#[test]
fn test_run_from_config_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "initial_length": 12, "steps": 3, "seed": 5, "backend": "ring" }"#,
    )
    .unwrap();

    tegen()
        .arg("run")
        .arg("--config")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""step": 3"#))
        .stdout(predicate::str::contains(r#""backend": "ring""#));
}

#[test]
fn test_run_rejects_invalid_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bad.json");
    std::fs::write(&path, r#"{ "events": { "copy_prob": 3.0 } }"#).unwrap();

    tegen()
        .arg("run")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_run_rejects_unknown_backend() {
    tegen()
        .args(["run", "--backend", "tree"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown genome backend"));
}

#[test]
fn test_compare_backends_agree() {
    tegen()
        .args(["compare", "-n", "30", "-s", "50", "--seed", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contiguous"))
        .stdout(predicate::str::contains("ring"))
        .stdout(predicate::str::contains("Backends agree after 50 steps"));
}

#[test]
fn test_compare_lists_every_backend() {
    tegen()
        .args(["compare", "-n", "10", "-s", "5", "--seed", "8", "--backend", "ring"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backends: contiguous, ring"))
        .stdout(predicate::str::contains("[--backend]").not());
}

#[test]
fn test_run_rejects_tiny_length_p() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "initial_length": 10, "steps": 1, "seed": 1, "events": { "length_p": 1e-9 } }"#,
    )
    .unwrap();

    tegen()
        .arg("run")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("length_p"));
}

#[test]
fn test_compare_json() {
    let output = tegen()
        .args(["compare", "-n", "10", "-s", "20", "--seed", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["identical"], true);
    assert_eq!(report["seed"], 3);
    assert_eq!(report["backends"].as_array().unwrap().len(), 2);
}
