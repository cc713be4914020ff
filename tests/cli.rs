/*!
 * Command-line tests for projdump
 */

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn projdump() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("projdump"))
}

#[test]
fn snapshot_of_current_directory() {
    let project = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("project_code.xml");

    write_file(&project.path().join("client/src/app.ts"), b"export {};\n");
    write_file(&project.path().join("client/node_modules/pkg/index.js"), b"x\n");
    write_file(&project.path().join("notes.txt"), b"notes\n");

    projdump()
        .current_dir(project.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Included: "))
        .stdout(predicate::str::contains("app.ts"))
        .stdout(predicate::str::contains("SNAPSHOT COMPLETE"));

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project>\n"));
    assert!(xml.contains("<![CDATA[export {};\n]]>"));
    assert!(!xml.contains("index.js"));
    assert!(!xml.contains("notes.txt"));
}

#[test]
fn read_failures_are_reported_and_skipped() {
    let project = tempdir().unwrap();
    let output = project.path().join("out.xml");

    let mut late_binary = vec![b'a'; 4096];
    late_binary.push(0xff);
    write_file(&project.path().join("server/src/data.rs"), &late_binary);
    write_file(&project.path().join("server/src/lib.rs"), b"pub fn ok() {}\n");

    projdump()
        .arg("--root")
        .arg(project.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error reading "))
        .stderr(predicate::str::contains("data.rs"));

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("pub fn ok() {}"));
    assert!(xml.ends_with("</project>\n"));
}

#[test]
fn binary_files_are_skipped_silently() {
    let project = tempdir().unwrap();
    let output = project.path().join("out.xml");
    write_file(&project.path().join("client/src/sprite.dat"), &[0x00, 0xff, 0x10]);

    projdump()
        .arg("--root")
        .arg(project.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Included: ").not())
        .stderr(predicate::str::contains("sprite.dat").not());
}

#[test]
fn missing_output_directory_is_fatal() {
    let project = tempdir().unwrap();
    let output = project.path().join("missing").join("out.xml");

    projdump()
        .arg("--root")
        .arg(project.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory not found"));

    assert!(!output.exists());
}

#[test]
fn json_config_replaces_rule_sets() {
    let project = tempdir().unwrap();
    let output = project.path().join("out.xml");
    let config = project.path().join("projdump.json");

    write_file(&project.path().join("docs/guide.md"), b"# Guide\n");
    write_file(&project.path().join("client/src/app.ts"), b"export {};\n");
    fs::write(
        &config,
        format!(
            r#"{{ "rootPath": {:?}, "outputPath": {:?}, "includePaths": ["docs"] }}"#,
            project.path().to_string_lossy(),
            output.to_string_lossy()
        ),
    )
    .unwrap();

    projdump().arg("--config").arg(&config).assert().success();

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("# Guide"));
    assert!(!xml.contains("app.ts"));
}

#[test]
fn exclude_generated_flag_prunes_bindings() {
    let project = tempdir().unwrap();
    let output = project.path().join("out.xml");
    write_file(
        &project.path().join("client/src/generated/bindings.ts"),
        b"export type Id = number;\n",
    );

    projdump()
        .arg("--root")
        .arg(project.path())
        .arg("--output")
        .arg(&output)
        .arg("--exclude-generated")
        .assert()
        .success();

    let xml = fs::read_to_string(&output).unwrap();
    assert!(!xml.contains("bindings.ts"));
}

#[test]
fn generates_shell_completions() {
    projdump()
        .arg("--generate")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("projdump"));
}
