use difflib_attrs::ErrorKind;
use difflib_error::Error;

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", name),
    labels = ["this variable"],
    help = "bind it after a semicolon, like `; y = 2`",
)]
struct Undefined {
    name: String,
}

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "something went wrong")]
struct Unlabeled;

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "mismatched parentheses",
    labels = [format!("this `{}`", opening), String::new()],
)]
struct Mismatched {
    opening: char,
}

fn render(err: &Error, input: &str) -> String {
    let mut out = Vec::new();
    err.write_report("input", input, &mut out).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(out)).unwrap()
}

#[test]
fn report_contains_message_label_and_help() {
    let err = Error::new(vec![4..5], Undefined { name: "y".to_string() });
    let report = render(&err, "x + y");

    assert!(report.contains("`y` is not defined"), "{report}");
    assert!(report.contains("this variable"), "{report}");
    assert!(report.contains("; y = 2"), "{report}");
}

#[test]
fn report_without_labels() {
    let err = Error::new(vec![0..3], Unlabeled);
    let report = render(&err, "abc");
    assert!(report.contains("something went wrong"), "{report}");
}

#[test]
fn labels_pair_up_with_spans() {
    // the second label is empty, and the third span has no label
    let err = Error::new(vec![0..1, 4..5, 6..7], Mismatched { opening: '(' });
    let report = render(&err, "(x + ) y");
    assert!(report.contains("mismatched parentheses"), "{report}");
    assert!(report.contains("this `(`"), "{report}");
    assert_eq!(report.matches("this").count(), 1, "{report}");
}
