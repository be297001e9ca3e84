use flatcat::filter::{Selection, SkipReason, classify, is_ignored_dir, matches_extension};
use flatcat::output::{RULE_WIDTH, success_notice, write_body, write_header, write_read_error};
use flatcat::{BundleBuilder, BundleOptions, BundleReport, BundledFile, DEFAULT_OUTPUT_NAME};
use std::path::{Path, PathBuf};
#[test]
fn test_default_options() {
    let options = BundleOptions::default();
    assert_eq!(options.output_name, "all_react_code.txt");
    assert_eq!(options.extensions.len(), 7);
    for ext in [".js", ".jsx", ".ts", ".tsx", ".css", ".html", ".json"] {
        assert!(options.extensions.contains(ext));
    }
    for dir in ["node_modules", ".git", ".next", "build", "dist", "coverage"] {
        assert!(options.ignore_dirs.contains(dir));
    }
    assert!(options.self_name.is_none());
    assert!(!options.follow_links);
}
#[test]
fn test_output_path_is_inside_root() {
    let options = BundleBuilder::new("/srv/project").build();
    assert_eq!(
        options.output_path(),
        PathBuf::from("/srv/project").join(DEFAULT_OUTPUT_NAME)
    );
}
#[test]
fn test_builder_replaces_sets() {
    let options = BundleBuilder::new(".")
        .extensions([".rs"])
        .ignore_dirs(["target"])
        .build();
    assert!(matches_extension("main.rs", &options));
    assert!(!matches_extension("app.tsx", &options));
    assert!(is_ignored_dir("target", &options));
    assert!(!is_ignored_dir("node_modules", &options));
}
#[test]
fn test_plain_suffix_matching() {
    let options = BundleOptions::default();
    assert!(matches_extension("component.test.tsx", &options));
    assert!(matches_extension(".tsx", &options));
    assert!(matches_extension("package.json", &options));
    assert!(!matches_extension("App.TSX", &options));
    assert!(!matches_extension("app.tsx.bak", &options));
    assert!(!matches_extension("notes.txt", &options));
}
#[test]
fn test_classify_self_reference() {
    let options = BundleBuilder::new(".")
        .output_name("bundle.json")
        .self_name(Some("bundle.js".to_string()))
        .build();
    assert_eq!(
        classify("bundle.json", &options),
        Selection::Skip(SkipReason::OutputFile)
    );
    assert_eq!(
        classify("bundle.js", &options),
        Selection::Skip(SkipReason::SelfSource)
    );
    assert_eq!(
        classify("README.md", &options),
        Selection::Skip(SkipReason::Extension)
    );
    assert!(classify("index.js", &options).is_included());
}
#[test]
fn test_ignored_dir_is_exact_name() {
    let options = BundleOptions::default();
    assert!(is_ignored_dir("node_modules", &options));
    assert!(!is_ignored_dir("node_modules_backup", &options));
    assert!(!is_ignored_dir("Build", &options));
}
#[test]
fn test_section_format() {
    let mut out = Vec::new();
    write_header(&mut out, Path::new("src/app.tsx")).unwrap();
    write_body(&mut out, "const x=1;").unwrap();
    let rule = "=".repeat(50);
    assert_eq!(RULE_WIDTH, 50);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("\n{rule}\nFILE: src/app.tsx\n{rule}\nconst x=1;\n")
    );
}
#[test]
fn test_read_error_placeholder() {
    let mut out = Vec::new();
    write_read_error(&mut out, &"permission denied").unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[Error reading file: permission denied]\n"
    );
}
#[test]
fn test_success_notice_names_output() {
    assert_eq!(
        success_notice("all_react_code.txt"),
        "✅ Success! Check the file: all_react_code.txt"
    );
}
#[test]
fn test_report_json_omits_missing_error() {
    let report = BundleReport {
        output: Some(PathBuf::from("out.txt")),
        files: vec![
            BundledFile {
                relative_path: PathBuf::from("a.ts"),
                bytes: 3,
                error: None,
            },
            BundledFile {
                relative_path: PathBuf::from("b.ts"),
                bytes: 0,
                error: Some("bad".into()),
            },
        ],
    };
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["files"][0].get("error").is_none());
    assert_eq!(json["files"][1]["error"], "bad");
    assert_eq!(report.failed().count(), 1);
}
