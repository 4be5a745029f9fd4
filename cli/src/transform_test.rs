use std::fs;

use asciiart::FilterConfig;

use super::*;

const BLOCK: &str = "<pre class=\"asciiart\"><code>+-+\n| |\n+-+</code></pre>";

fn filter() -> BlockFilter {
    BlockFilter::new(&FilterConfig::default()).unwrap()
}

fn run_with(root: &Path, options: Options) -> Summary {
    let filter = filter();
    let render = RenderConfig::default();
    Transformer::new(&filter, &render, options).run(&[root.to_owned()])
}

#[test]
fn rewrites_only_files_with_blocks() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.html"), format!("<p>x</p>{BLOCK}")).unwrap();
    fs::write(dir.path().join("b.html"), "<p>plain</p>").unwrap();

    let summary = run_with(dir.path(), Options::default());
    assert_eq!(summary, Summary { files: 2, changed: 1, blocks: 1, failed: 0 });

    let a = fs::read_to_string(dir.path().join("a.html")).unwrap();
    assert!(a.starts_with("<p>x</p><svg"));
    assert_eq!(fs::read_to_string(dir.path().join("b.html")).unwrap(), "<p>plain</p>");
}

#[test]
fn recurses_into_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
    fs::write(dir.path().join("nested/deeper/c.html"), BLOCK).unwrap();

    let summary = run_with(dir.path(), Options::default());
    assert_eq!(summary.changed, 1);
    assert!(fs::read_to_string(dir.path().join("nested/deeper/c.html")).unwrap().starts_with("<svg"));
}

#[test]
fn check_mode_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.html");
    fs::write(&path, BLOCK).unwrap();

    let summary = run_with(dir.path(), Options { check: true, ..Options::default() });
    assert_eq!(summary.changed, 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), BLOCK);
}

#[test]
fn keep_originals_saves_backup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.html");
    fs::write(&path, BLOCK).unwrap();

    run_with(dir.path(), Options { keep_originals: true, ..Options::default() });
    assert_eq!(fs::read_to_string(dir.path().join("a.html.orig")).unwrap(), BLOCK);
    assert!(fs::read_to_string(&path).unwrap().starts_with("<svg"));

    // backups are not picked up by the next run
    let summary = run_with(dir.path(), Options { keep_originals: true, ..Options::default() });
    assert_eq!(summary.files, 1);
    assert_eq!(summary.changed, 0);
}

#[test]
fn output_dir_mirrors_layout_and_leaves_input() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::create_dir_all(input.path().join("sub")).unwrap();
    fs::write(input.path().join("sub/a.html"), BLOCK).unwrap();
    fs::write(input.path().join("b.txt"), "plain").unwrap();

    let summary =
        run_with(input.path(), Options { output: Some(output.path().to_owned()), ..Options::default() });
    assert_eq!(summary.files, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(fs::read_to_string(input.path().join("sub/a.html")).unwrap(), BLOCK);
    assert!(fs::read_to_string(output.path().join("sub/a.html")).unwrap().starts_with("<svg"));
    assert_eq!(fs::read_to_string(output.path().join("b.txt")).unwrap(), "plain");
}

#[test]
fn non_utf8_file_is_counted_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.bin"), [0xff, 0xfe, 0x00]).unwrap();
    fs::write(dir.path().join("b.html"), BLOCK).unwrap();

    let summary = run_with(dir.path(), Options::default());
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.changed, 1);
    assert!(!summary.is_success());
}

#[test]
fn missing_root_is_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let summary = run_with(&dir.path().join("absent"), Options::default());
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.files, 0);
}

#[test]
fn single_file_root() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.html");
    fs::write(&path, BLOCK).unwrap();
    let summary = run_with(&path, Options::default());
    assert_eq!(summary.changed, 1);
}

// --- Paths ---

#[test]
fn backup_path_appends_suffix() {
    assert_eq!(backup_path(Path::new("docs/a.html")), PathBuf::from("docs/a.html.orig"));
}

#[test]
fn mirror_path_keeps_relative_layout() {
    let out = Path::new("/out");
    assert_eq!(mirror_path(Path::new("docs"), Path::new("docs/x/a.html"), out), PathBuf::from("/out/x/a.html"));
    assert_eq!(mirror_path(Path::new("docs/a.html"), Path::new("docs/a.html"), out), PathBuf::from("/out/a.html"));
}
