use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn editorconf_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_editorconf"))
}

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        ".editorconfig",
        r#"
root = true

[*]
end_of_line = lf
insert_final_newline = true

[*.go]
indent_style = tab
indent_size = 8

[*.md]
indent_style = tab
"#,
    );
    dir
}

#[test]
fn test_single_file_output() {
    let dir = sample_dir();
    let target = dir.path().join("subdir/code.go");

    let output = editorconf_cmd()
        .arg(target.to_str().unwrap())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "indent_style=tab\nindent_size=8\nend_of_line=lf\ninsert_final_newline=true\n"
    );
}

#[test]
fn test_multiple_files_are_prefixed() {
    let dir = sample_dir();
    let go = dir.path().join("main.go");
    let txt = dir.path().join("notes.txt");
    let go_arg = go.to_str().unwrap();
    let txt_arg = txt.to_str().unwrap();

    let output = editorconf_cmd().arg(go_arg).arg(txt_arg).output().unwrap();

    assert!(output.status.success());
    let expected = format!(
        "[{go_arg}]\nindent_style=tab\nindent_size=8\nend_of_line=lf\ninsert_final_newline=true\n\
         [{txt_arg}]\nend_of_line=lf\ninsert_final_newline=true\n"
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn test_custom_config_name() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "settings.ini", "root = true\n[*]\ncharset = utf-8\n");

    let output = editorconf_cmd()
        .arg("-f")
        .arg("settings.ini")
        .arg(dir.path().join("a.txt").to_str().unwrap())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "charset=utf-8\n");
}

#[test]
fn test_emulated_version() {
    let dir = sample_dir();
    let target = dir.path().join("README.md");

    let latest = editorconf_cmd()
        .arg(target.to_str().unwrap())
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&latest.stdout).contains("indent_size=tab\n"));

    let old = editorconf_cmd()
        .arg("-b")
        .arg("0.8.0")
        .arg(target.to_str().unwrap())
        .output()
        .unwrap();
    assert!(old.status.success());
    assert!(!String::from_utf8_lossy(&old.stdout).contains("indent_size"));
}

#[test]
fn test_version_flag() {
    for flag in ["-v", "--version"] {
        let output = editorconf_cmd().arg(flag).output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("EditorConfig Rust editorconf, Version "));
    }
}

#[test]
fn test_no_arguments_is_an_error() {
    let output = editorconf_cmd().output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_unreadable_config_aborts_without_output() {
    let dir = sample_dir();
    fs::create_dir_all(dir.path().join("broken/.editorconfig")).unwrap();

    let output = editorconf_cmd()
        .arg(dir.path().join("main.go").to_str().unwrap())
        .arg(dir.path().join("broken/main.go").to_str().unwrap())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}
