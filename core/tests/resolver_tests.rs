use std::fs;
use std::path::PathBuf;

use smartlog::args::{resolve_names, resolve_names_checked};

fn fixture(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("smartlog_args_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn simple_identifiers_come_back_verbatim() {
    let path = fixture(
        "idents.js",
        "function demo() {\n  smartLog(userName, age, isActive);\n}\n",
    );
    let names = resolve_names(&path, 2, "smartLog");
    assert_eq!(names, vec!["userName", "age", "isActive"]);
}

#[test]
fn dollar_underscore_and_digits_are_identifier_material() {
    let path = fixture("exotic.js", "smartLog($el, _private, v2);\n");
    assert_eq!(resolve_names(&path, 1, "smartLog"), vec!["$el", "_private", "v2"]);
}

#[test]
fn literals_become_empty_placeholders() {
    let path = fixture("literals.js", "smartLog(a, \"hi\", 42);\n");
    let names = resolve_names(&path, 1, "smartLog");
    assert_eq!(names, vec!["a".to_string(), String::new(), String::new()]);
}

#[test]
fn member_and_index_expressions_become_placeholders() {
    let path = fixture("members.js", "smartLog(user.name, items[0]);\n");
    let names = resolve_names(&path, 1, "smartLog");
    assert_eq!(names, vec![String::new(), String::new()]);
}

#[test]
fn nested_call_truncates_at_its_close_paren() {
    let path = fixture("nested.js", "smartLog(a, foo(b));\n");
    let names = resolve_names(&path, 1, "smartLog");
    assert_eq!(names, vec!["a".to_string(), String::new()]);
}

#[test]
fn zero_arguments_yield_one_empty_slot() {
    let path = fixture("empty.js", "smartLog();\n");
    assert_eq!(resolve_names(&path, 1, "smartLog"), vec![String::new()]);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let path = fixture("spaced.js", "smartLog( spacious ,  names );\n");
    assert_eq!(resolve_names(&path, 1, "smartLog"), vec!["spacious", "names"]);
}

#[test]
fn space_before_the_paren_still_matches() {
    let path = fixture("gap.js", "smartLog (a);\n");
    assert_eq!(resolve_names(&path, 1, "smartLog"), vec!["a"]);
}

#[test]
fn carriage_return_line_endings_do_not_break_matching() {
    let path = fixture("crlf.js", "smartLog(a);\r\nsmartLog(b);\r\n");
    assert_eq!(resolve_names(&path, 2, "smartLog"), vec!["b"]);
}

#[test]
fn missing_file_resolves_to_nothing() {
    let path = std::env::temp_dir().join("smartlog_args_no_such_file.js");
    let _ = fs::remove_file(&path);
    assert!(resolve_names(&path, 1, "smartLog").is_empty());

    let err = resolve_names_checked(&path, 1, "smartLog")
        .expect_err("missing file should be reported");
    assert!(err.to_string().contains("could not read"));
}

#[test]
fn out_of_range_lines_resolve_to_nothing() {
    let path = fixture("short.js", "smartLog(a);\n");
    assert!(resolve_names(&path, 0, "smartLog").is_empty());
    assert!(resolve_names(&path, 99, "smartLog").is_empty());

    let err = resolve_names_checked(&path, 99, "smartLog")
        .expect_err("out-of-range line should be reported");
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn line_without_the_call_resolves_to_nothing() {
    let path = fixture("other.js", "const x = compute();\n");
    assert!(resolve_names(&path, 1, "smartLog").is_empty());

    let err = resolve_names_checked(&path, 1, "smartLog")
        .expect_err("missing call should be reported");
    assert!(err.to_string().contains("no call to 'smartLog'"));
}

#[test]
fn call_split_across_lines_resolves_to_nothing() {
    let path = fixture("multiline.js", "smartLog(\n  a,\n  b\n);\n");
    assert!(resolve_names(&path, 1, "smartLog").is_empty());
}

#[test]
fn resolving_twice_gives_the_same_answer() {
    let path = fixture("twice.js", "smartLog(first, second);\n");
    assert_eq!(
        resolve_names(&path, 1, "smartLog"),
        resolve_names(&path, 1, "smartLog")
    );
}
