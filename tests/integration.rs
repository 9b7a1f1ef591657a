use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_docapy")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn copy_project(dest: &Path) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project");
    for rel in ["geometry.py", "shapes/circle.py"] {
        let target = dest.join(rel);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::copy(root.join(rel), target).unwrap();
    }
}

// -- stdin mode --

#[test]
fn stdin_mode_prints_content_block() {
    let input = fs::read_to_string(fixture_path("project/geometry.py")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(output.starts_with(
        "<div class=\"content\"><h2>File Description</h2> Small geometry helpers. See <a href=\"https://docs.python.org/3/library/math.html\">"
    ));
    assert!(output.contains(
        "<span class=\"def\">def</span> <span class=\"blue\">distance</span>(a, b, metric=&quot;euclid:2&quot;)</summary>"
    ));
    assert!(output.contains("<h3>Methods</h3>"));
    assert!(output.contains(
        "<span class=\"def\">async def</span> <span class=\"blue\">fetch</span>(url)</summary> Fetch a remote shape.</details></div>"
    ));
    assert!(output.contains("<h3>Examples</h3><br><div class=\"code\"> &gt;&gt;&gt;&nbsp;distance((0,&nbsp;0),&nbsp;(3,&nbsp;4))<br> 5.0</div>"));
    assert_eq!(
        output.matches("<details>").count(),
        output.matches("</details>").count()
    );
}

#[test]
fn stdin_mode_without_definitions() {
    cmd()
        .write_stdin("x = 1\n")
        .assert()
        .success()
        .stdout("<div class=\"content\"><h2>File Description</h2>No documentation found for this section</div>");
}

#[test]
fn stdin_mode_json() {
    let input = fs::read_to_string(fixture_path("project/shapes/circle.py")).unwrap();

    cmd()
        .args(["-f", "json"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"signature\": \"area(r)\""))
        .stdout(predicate::str::contains("\"documentation\": \"Area of a circle.\""))
        .stdout(predicate::str::contains("\"signature\": \"square(v)\""));
}

#[test]
fn malformed_source_keeps_earlier_entities() {
    cmd()
        .write_stdin("def ok():\n    \"\"\"Fine.\"\"\"\n\ndef broken(a, b\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<span class=\"blue\">ok</span>()</summary> Fine.</details>"))
        .stdout(predicate::str::contains("broken").not());
}

// -- file mode --

#[test]
fn file_mode_writes_site() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");

    cmd()
        .args(["-o", out.to_str().unwrap()])
        .args(["-n", "Geo", "-g", "https://github.com/me/geo"])
        .arg(fixture_path("project"))
        .assert()
        .success();

    let geometry = fs::read_to_string(out.join("geometry.html")).unwrap();
    assert!(geometry.starts_with("<!doctype html>"));
    assert!(geometry.contains("<title>Geo Documentation - geometry.py</title>"));
    assert!(geometry.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
    assert!(geometry.contains("<a href=\"shapes/circle.html\" class=\"menua\">circle.py</a>"));

    let circle = fs::read_to_string(out.join("shapes/circle.html")).unwrap();
    assert!(circle.contains("href=\"../style.css\""));
    assert!(circle.contains("<h3>Nested Functions</h3>"));
    assert!(circle.contains("<a href=\"../geometry.html\" class=\"menua\">geometry.py</a>"));

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("<h1>GEO DOCUMENTATION</h1>"));
    assert!(index.contains("<a href=\"https://github.com/me/geo\">https://github.com/me/geo</a>"));

    let css = fs::read_to_string(out.join("style.css")).unwrap();
    assert!(css.contains("#03c3f5"));
}

#[test]
fn file_mode_accent_color() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap(), "-c", "red"])
        .arg(fixture_path("project/geometry.py"))
        .assert()
        .success();

    let css = fs::read_to_string(dir.path().join("style.css")).unwrap();
    assert!(css.contains("#e50914"));
    assert!(!css.contains("#03c3f5"));
}

#[test]
fn file_mode_json() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap(), "-f", "json"])
        .arg(fixture_path("project"))
        .assert()
        .success();

    assert!(dir.path().join("geometry.json").exists());
    assert!(dir.path().join("shapes/circle.json").exists());
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn output_inside_project_is_not_rescanned() {
    let dir = TempDir::new().unwrap();
    copy_project(dir.path());
    let out = dir.path().join("docapy");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("stale.py"), "def stale():\n    pass\n").unwrap();

    cmd()
        .args(["-o", out.to_str().unwrap()])
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success();

    assert!(out.join("geometry.html").exists());
    assert!(!out.join("docapy/stale.html").exists());
    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(!index.contains("stale.py"));
}

#[test]
fn unreadable_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    copy_project(dir.path());
    fs::write(dir.path().join("binary.py"), [0xff, 0xfe, 0x00, 0x81]).unwrap();
    let out = dir.path().join("out");

    cmd()
        .args(["-o", out.to_str().unwrap()])
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping unreadable file"));

    assert!(out.join("geometry.html").exists());
    assert!(!out.join("binary.html").exists());
}

// -- errors --

#[test]
fn unknown_color_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap(), "-c", "magenta"])
        .arg(fixture_path("project"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown color: magenta"));
}

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["-f", "markdown"])
        .write_stdin("def f():\n    pass\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: markdown"));
}

#[test]
fn no_matching_files_fails() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.py", dir.path().display());

    cmd()
        .args(["-o", dir.path().join("out").to_str().unwrap()])
        .arg(pattern)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no Python files found"));
}
