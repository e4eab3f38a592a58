use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"[
  {
    "package_name": "my.mod",
    "simple_name": "Chest",
    "qualified_name": "my.mod.Chest",
    "primary_constructor": [
      {"name": "s", "type": "net.fabricmc.fabric.api.object.builder.v1.block.FabricBlockSettings"}
    ],
    "companion_object": {
      "package_name": "my.mod",
      "simple_name": "Companion",
      "qualified_name": "my.mod.Chest.Companion",
      "is_companion_object": true,
      "properties": [{"name": "ID", "type": "net.minecraft.util.Identifier"}]
    },
    "super_types": ["my.mod.AbstractChest"],
    "annotations": [{
      "name": "nipah.minecraft.ui.annotations.BlockAsContainer",
      "arguments": [
        {"name": "itemCount", "value": {"kind": "int", "value": 9}},
        {"name": "gui", "value": {"kind": "type", "value": "my.mod.ChestGui"}}
      ]
    }]
  },
  {
    "package_name": "my.mod",
    "simple_name": "ChestGui",
    "qualified_name": "my.mod.ChestGui",
    "super_types": ["nipah.minecraft.ui.lib.GUI"],
    "functions": [{"name": "tick", "return_type": "kotlin.Boolean"}]
  }
]"#;

fn kgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kgen").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn write_snapshot(dir: &Path, contents: &str) -> String {
    let path = dir.join("symbols.json");
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_generate_writes_package_tree() {
    let temp_dir = TempDir::new().unwrap();
    let symbols = write_snapshot(temp_dir.path(), SNAPSHOT);
    let out = temp_dir.path().join("out");

    kgen(temp_dir.path())
        .args(["generate", &symbols, "--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 12 file(s)"));

    let entity = fs::read_to_string(out.join("my/mod/BaseChestEntity.kt")).unwrap();
    assert!(entity.contains("DefaultedList.ofSize(9, ItemStack.EMPTY)"));
    assert!(entity.contains("gui.tick()"));
    assert!(out.join("nipah/minecraft/ui/lib/NipahUIModInitializer.kt").exists());
    assert!(out.join("nipah/minecraft/ui/lib/StateBuffers.kt").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let symbols = write_snapshot(temp_dir.path(), SNAPSHOT);

    kgen(temp_dir.path())
        .args(["generate", &symbols, "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my.mod.ChestScreenHandler"))
        .stdout(predicate::str::contains("nipah.minecraft.ui.lib.GUI"));

    assert!(!temp_dir.path().join("generated").exists());
}

#[test]
fn test_diagnostics_fail_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let broken = SNAPSHOT.replace(
        "net.fabricmc.fabric.api.object.builder.v1.block.FabricBlockSettings",
        "kotlin.Int",
    );
    let symbols = write_snapshot(temp_dir.path(), &broken);

    kgen(temp_dir.path())
        .args(["generate", &symbols, "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "my.mod.Chest: BlockAsContainer requires the existence of a primary constructor",
        ))
        .stderr(predicate::str::contains("1 diagnostic(s) reported"));
}

#[test]
fn test_analyze_json() {
    let temp_dir = TempDir::new().unwrap();
    let symbols = write_snapshot(temp_dir.path(), SNAPSHOT);

    let output = kgen(temp_dir.path())
        .args(["analyze", &symbols, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[0]["symbol"]["symbol"], "my.mod.Chest");
    assert_eq!(reports[0]["companions"]["screen"], "ChestScreen");
    assert_eq!(reports[0]["gui"]["events"][0], "Tick");
}

#[test]
fn test_init_respects_existing_config() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path().to_str().unwrap();

    kgen(temp_dir.path())
        .args(["init", "--cwd", cwd])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let config_path = temp_dir.path().join(".kgen.json");
    fs::write(&config_path, r#"{"lib_package": "custom.lib"}"#).unwrap();

    kgen(temp_dir.path())
        .args(["init", "--cwd", cwd])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        r#"{"lib_package": "custom.lib"}"#
    );
}

#[test]
fn test_discovered_config_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let symbols = write_snapshot(temp_dir.path(), SNAPSHOT);
    fs::write(
        temp_dir.path().join(".kgen.json"),
        r#"{"lib_package": "custom.lib"}"#,
    )
    .unwrap();

    kgen(temp_dir.path())
        .args(["generate", &symbols, "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.lib.NipahUIModInitializer"));
}

#[test]
fn test_overlapping_snapshot_files_generate_once() {
    let temp_dir = TempDir::new().unwrap();
    let snapshots = temp_dir.path().join("symbols");
    fs::create_dir(&snapshots).unwrap();
    fs::write(snapshots.join("a.json"), SNAPSHOT).unwrap();
    fs::write(snapshots.join("b.json"), SNAPSHOT).unwrap();
    let out = temp_dir.path().join("out");

    kgen(temp_dir.path())
        .args([
            "generate",
            snapshots.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 12 file(s)"));

    let initializer =
        fs::read_to_string(out.join("nipah/minecraft/ui/lib/NipahUIModInitializer.kt")).unwrap();
    assert_eq!(initializer.matches("AbstractChest.init()").count(), 1);
}
