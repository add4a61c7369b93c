use javadoc_md::{Config, Error, MalformedKind, Processor};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config(out: &Path) -> Config {
    Config {
        output_dir: out.to_path_buf(),
        ..Config::default()
    }
}

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn processes_tree_and_collects_comment_errors() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(src.path(), "a/A.java", b"/** A. */\nclass A {}\n");
    write(
        src.path(),
        "b/B.java",
        b"/** B. */\nclass B {\n/** never closed\n}\n",
    );

    let summary = Processor::new(src.path(), config(out.path())).process().unwrap();

    assert_eq!(summary.processed.len(), 2);
    assert!(summary.skipped.is_empty());
    assert_eq!(summary.malformed.len(), 1);
    match &summary.malformed[0] {
        Error::MalformedComment { path, source } => {
            assert!(path.ends_with("b/B.java"));
            assert_eq!(source.kind, MalformedKind::Unterminated);
            assert_eq!(source.line, 3);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(out.path().join("a/A.md").exists());
    assert!(out.path().join("b/B.md").exists());
    assert_eq!(summary.index_path(), out.path().join("index.md"));
}

#[test]
fn output_is_identical_across_runs() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(
        src.path(),
        "Calc.java",
        b"/**\n * Adds.\n * @param a x\n * @param b y\n * @return sum\n */\nint add(int a, int b);\n",
    );

    let processor = Processor::new(src.path(), config(out.path()));
    processor.process().unwrap();
    let first = fs::read(out.path().join("Calc.md")).unwrap();
    let first_index = fs::read(out.path().join("index.md")).unwrap();

    processor.process().unwrap();
    assert_eq!(fs::read(out.path().join("Calc.md")).unwrap(), first);
    assert_eq!(fs::read(out.path().join("index.md")).unwrap(), first_index);
}

#[test]
fn unreadable_file_is_skipped() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(src.path(), "Bad.java", &[0x2f, 0x2a, 0x2a, 0xff, 0xfe, 0x2a, 0x2f]);
    write(src.path(), "Good.java", b"/** Good. */\nclass Good {}\n");

    let summary = Processor::new(src.path(), config(out.path())).process().unwrap();

    assert_eq!(summary.processed.len(), 1);
    assert_eq!(summary.skipped.len(), 1);
    assert!(matches!(summary.skipped[0], Error::UnreadableFile { .. }));

    let index = fs::read_to_string(out.path().join("index.md")).unwrap();
    assert!(index.contains("Good.java"));
    assert!(!index.contains("Bad.java"));
}

#[test]
fn write_failure_is_skipped() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(src.path(), "A.java", b"/** A. */\nclass A {}\n");
    write(src.path(), "B.java", b"/** B. */\nclass B {}\n");
    // A directory where A.md should go makes the write fail.
    fs::create_dir_all(out.path().join("A.md")).unwrap();

    let summary = Processor::new(src.path(), config(out.path())).process().unwrap();

    assert_eq!(summary.processed.len(), 1);
    assert_eq!(summary.processed[0].source, Path::new("B.java"));
    assert!(matches!(summary.skipped[0], Error::WriteFailure { .. }));
}

#[test]
fn fail_fast_stops_at_first_file_error() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(src.path(), "A.java", b"\n");
    write(src.path(), "B.java", b"/** B. */\nclass B {}\n");

    let config = Config {
        fail_fast: true,
        ..config(out.path())
    };
    let result = Processor::new(src.path(), config).process();

    assert!(matches!(result, Err(Error::EmptyFile(_))));
    assert!(!out.path().join("B.md").exists());
}

#[test]
fn missing_input() {
    let out = TempDir::new().unwrap();
    let result = Processor::new(out.path().join("nope"), config(out.path())).process();
    assert!(matches!(result, Err(Error::InputNotFound(_))));
}

#[test]
fn discover_filters_by_extension_and_sorts() {
    let src = TempDir::new().unwrap();
    write(src.path(), "z/Z.java", b"class Z {}");
    write(src.path(), "A.java", b"class A {}");
    write(src.path(), "notes.txt", b"hello");

    let discovery = Processor::new(src.path(), Config::default()).discover().unwrap();
    assert!(discovery.unreadable.is_empty());
    let names: Vec<_> = discovery
        .files
        .iter()
        .map(|p| p.strip_prefix(src.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(names, [Path::new("A.java"), Path::new("z/Z.java")]);
}

#[test]
fn same_stem_sources_get_distinct_documents() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(src.path(), "A.java", b"/** From Java. */\nclass A {}\n");
    write(src.path(), "A.kt", b"/** From Kotlin. */\nclass A\n");

    let config = Config {
        extensions: vec!["java".into(), "kt".into()],
        ..config(out.path())
    };
    let summary = Processor::new(src.path(), config).process().unwrap();

    assert_eq!(summary.processed.len(), 2);
    let java = fs::read_to_string(out.path().join("A.md")).unwrap();
    let kotlin = fs::read_to_string(out.path().join("A.kt.md")).unwrap();
    assert!(java.contains("From Java."));
    assert!(kotlin.contains("From Kotlin."));

    let index = fs::read_to_string(out.path().join("index.md")).unwrap();
    assert!(index.contains("(./A.md)"));
    assert!(index.contains("(./A.kt.md)"));
}

#[cfg(unix)]
#[test]
fn unreadable_directory_is_recorded() {
    use std::os::unix::fs::PermissionsExt;

    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(src.path(), "A.java", b"/** A. */\nclass A {}\n");
    write(src.path(), "locked/B.java", b"/** B. */\nclass B {}\n");
    let locked = src.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // Permissions are not enforced for this user.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let summary = Processor::new(src.path(), config(out.path())).process();
    let strict = Processor::new(
        src.path(),
        Config {
            fail_fast: true,
            ..config(out.path())
        },
    )
    .process();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let summary = summary.unwrap();
    assert_eq!(summary.processed.len(), 1);
    assert_eq!(summary.skipped.len(), 1);
    match &summary.skipped[0] {
        Error::UnreadableFile { path, .. } => assert!(path.ends_with("locked")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(strict, Err(Error::UnreadableFile { .. })));
}
