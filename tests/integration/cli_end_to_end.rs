//! CLI end-to-end: runs the built binary against a temporary workspace

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn shotmatch(workspace: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shotmatch"))
        .arg("--workspace")
        .arg(workspace)
        .arg("--quiet")
        .args(args)
        .env_remove("SHOTMATCH_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_inputs(dir: &Path) {
    std::fs::write(
        dir.join("xytech.txt"),
        "/hpsans2/production/show/a\n/hpsans2/production/show/b\n",
    )
    .unwrap();
    std::fs::write(dir.join("baselight.txt"), "/baselightfilesystem1/show/a 100 101 102\n")
        .unwrap();
}

#[test]
fn test_import_process_export() {
    let temp = TempDir::new().unwrap();
    let ws = temp.path();
    write_inputs(ws);

    let xytech = ws.join("xytech.txt");
    let baselight = ws.join("baselight.txt");
    let out = shotmatch(
        ws,
        &[
            "import",
            "--xytech",
            xytech.to_str().unwrap(),
            "--baselight",
            baselight.to_str().unwrap(),
        ],
    );
    assert!(out.status.success(), "import failed: {:?}", out);
    assert!(stdout(&out).contains("Location records: 2"));

    let out = shotmatch(ws, &["process", "--no-thumbnails", "--format", "json"]);
    assert!(out.status.success(), "process failed: {:?}", out);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["matched"], 1);
    assert_eq!(value["unmatched"], 1);
    assert_eq!(value["entries"][0]["frame_ranges"][0], "52-150");
    assert_eq!(value["entries"][0]["timecodes"][0], "00:00:02:04 to 00:00:06:06");

    let report = ws.join("out").join("report.csv");
    let out = shotmatch(ws, &["export", report.to_str().unwrap()]);
    assert!(out.status.success(), "export failed: {:?}", out);

    let csv = std::fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Location,Frames,Timecode,Thumbnail",
            "/hpsans2/production/show/a,52-150,00:00:02:04 to 00:00:06:06,",
            "/hpsans2/production/show/b,,,",
        ]
    );
}

#[test]
fn test_export_without_processing_fails() {
    let temp = TempDir::new().unwrap();
    let out = shotmatch(temp.path(), &["export"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("No processed entries"));
}

#[test]
fn test_missing_input_file_fails() {
    let temp = TempDir::new().unwrap();
    let out = shotmatch(
        temp.path(),
        &["import", "--xytech", "/nonexistent/x.txt", "--baselight", "/nonexistent/b.txt"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to read input"));
}
