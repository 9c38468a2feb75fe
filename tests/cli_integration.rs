// End-to-end runs of the transatlantic binary
// WHY: Output formats, stdin handling and TOML overlays only meet in main()

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output, Stdio};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::TestFixture;

fn run_cli(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_transatlantic"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run transatlantic");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for transatlantic")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "transatlantic failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_blank_input_reports_error_and_fails() {
    let output = run_cli(&["   "], None);
    assert!(!output.status.success(), "blank input must exit non-zero");
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: No text to translate."),
        "unexpected stderr: {stderr}"
    );

    let output = run_cli(&[], Some("\n  \n"));
    assert!(!output.status.success(), "blank stdin must exit non-zero");
}

#[test]
fn test_markup_is_default_format() {
    let output = run_cli(&["Mangoes are my favorite fruit."], None);
    assert_eq!(
        stdout_of(&output),
        "Mangoes are my <span class=\"highlight\">favourite</span> fruit.\n"
    );

    let output = run_cli(&["True", "Colour"], None);
    assert_eq!(stdout_of(&output), "Everything looks good to me!\n");
}

#[test]
fn test_stdin_plain_british_to_american() {
    let output = run_cli(
        &["-d", "british-to-american", "--format", "plain"],
        Some("Tea time is usually around 4 or 4.30.\n"),
    );
    assert_eq!(stdout_of(&output), "Tea time is usually around 4 or 4:30.\n");
}

#[test]
fn test_json_output_field_names() {
    let output = run_cli(
        &["--format", "json", "Dr. Grosh will see you at 12:15."],
        None,
    );
    let json: Value = serde_json::from_str(&stdout_of(&output)).expect("stdout is JSON");

    let obj = json.as_object().expect("JSON object");
    assert_eq!(obj.len(), 2, "only translatedText and translatedSpans: {obj:?}");
    assert_eq!(obj["translatedText"], "Dr Grosh will see you at 12.15.");
    assert_eq!(obj["translatedSpans"], serde_json::json!(["12.15", "Dr"]));
}

#[test]
fn test_invalid_direction_rejected_by_parser() {
    let output = run_cli(&["-d", "canadian", "colour"], None);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("canadian"));
}

#[test]
fn test_input_file_translated_line_by_line() {
    let fixture = TestFixture::new();
    let input = fixture.create_text_file(
        "letters.txt",
        "The parking lot was full.\n\nNothing to change here.\n",
    );
    let input = input.to_str().expect("UTF-8 temp path");

    let output = run_cli(&["--input", input, "--format", "json"], None);
    let lines: Vec<Value> = stdout_of(&output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["line"], 1);
    assert_eq!(lines[0]["translatedText"], "The car park was full.");
    assert_eq!(lines[1]["line"], 3);
    assert_eq!(lines[1]["translatedSpans"], serde_json::json!([]));
}

#[test]
fn test_missing_input_file_fails() {
    let fixture = TestFixture::new();
    let missing = fixture.root_path.join("missing.txt");
    let output = run_cli(&["--input", missing.to_str().expect("UTF-8 temp path")], None);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open file"));
}

#[test]
fn test_config_file_changes_markers_and_caps() {
    let fixture = TestFixture::new();
    let config = fixture.create_text_file(
        "transatlantic.toml",
        "preserve_all_caps = true\n\n[highlight]\nopen = \"<mark>\"\nclose = \"</mark>\"\n",
    );

    let output = run_cli(
        &["--config", config.to_str().expect("UTF-8 temp path"), "THE PARKING LOT"],
        None,
    );
    assert_eq!(stdout_of(&output), "THE <mark>CAR PARK</mark>\n");
}

#[test]
fn test_dictionaries_file_adds_entries() {
    let fixture = TestFixture::new();
    let dictionaries = fixture.create_text_file(
        "extra.toml",
        "[american_only]\n\"fall\" = \"autumn\"\n\n[british_only]\n\"autumn\" = \"fall\"\n",
    );
    let dictionaries = dictionaries.to_str().expect("UTF-8 temp path");

    let output = run_cli(
        &["--dictionaries", dictionaries, "--format", "plain", "I love the fall colors."],
        None,
    );
    assert_eq!(stdout_of(&output), "I love the autumn colours.\n");

    let output = run_cli(
        &["--dictionaries", dictionaries, "-d", "american", "--format", "plain", "Autumn leaves"],
        None,
    );
    assert_eq!(stdout_of(&output), "Fall leaves\n");
}

#[test]
fn test_malformed_config_file_fails() {
    let fixture = TestFixture::new();
    let config = fixture.create_text_file("broken.toml", "time_policy = \"sometimes\"\n");
    let output = run_cli(
        &["--config", config.to_str().expect("UTF-8 temp path"), "color"],
        None,
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid config file"));
}
