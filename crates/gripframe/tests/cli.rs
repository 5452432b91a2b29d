use std::path::Path;
use std::process::Command;

fn gripframe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gripframe"))
}

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = gripframe();
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute gripframe");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("frameless tile windows"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = gripframe();
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute gripframe");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("gripframe"));
}

#[test]
fn classify_reports_corner() {
    // Arrange
    let mut cmd = gripframe();
    cmd.args([
        "classify", "--x", "398", "--y", "1", "--width", "400", "--height", "300",
    ]);

    // Act
    let output = cmd.output().expect("failed to execute gripframe");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("top_right_corner"));
}

#[test]
fn quantize_prints_grid_size() {
    // Arrange
    let mut cmd = gripframe();
    cmd.args([
        "quantize",
        "--width",
        "400",
        "--height",
        "300",
        "--width-factor",
        "2",
        "--height-factor",
        "2",
        "--to-width",
        "420",
        "--to-height",
        "310",
    ]);

    // Act
    let output = cmd.output().expect("failed to execute gripframe");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("416x312"));
}

#[test]
fn quantize_rejects_non_positive_size() {
    let output = gripframe()
        .args([
            "quantize",
            "--width",
            "400",
            "--height",
            "300",
            "--to-width",
            "0",
            "--to-height",
            "10",
        ])
        .output()
        .expect("failed to execute gripframe");

    assert!(!output.status.success());
}

#[test]
fn replay_json_emits_one_line_per_event() {
    // Arrange
    let mut cmd = gripframe();
    cmd.args(["replay", "--json", &fixture("corner_drag.toml")]);

    // Act
    let output = cmd.output().expect("failed to execute gripframe");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid json line"))
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["state"], "top_right_corner");
    assert_eq!(lines[1]["frame"]["width"], 416);
    assert_eq!(lines[1]["frame"]["y"], 90);
    assert_eq!(lines[2]["outcome"]["value"]["kind"], "rejected");
    assert_eq!(lines[2]["frame"]["width"], 416);
    assert_eq!(lines[3]["outcome"]["value"], "resized");
}

#[test]
fn replay_table_summarises_events() {
    let output = gripframe()
        .args(["replay", &fixture("corner_drag.toml")])
        .output()
        .expect("failed to execute gripframe");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("resizing to 416x312"));
    assert!(stdout.contains("4 events replayed"));
}

#[test]
fn replay_missing_script_fails() {
    let output = gripframe()
        .args(["replay", "no-such-script.toml"])
        .output()
        .expect("failed to execute gripframe");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-script.toml"));
}

#[test]
fn paint_json_lists_title_bar_commands() {
    // Arrange
    let mut cmd = gripframe();
    cmd.args(["paint", "--json", "--title", "Tile", "--active", "--hovered", "--margin", "24"]);

    // Act
    let output = cmd.output().expect("failed to execute gripframe");

    // Assert
    assert!(output.status.success());
    let painted: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    let ops: Vec<&str> = painted["commands"]
        .as_array()
        .expect("command list")
        .iter()
        .filter_map(|c| c["op"].as_str())
        .collect();
    assert_eq!(ops, ["fill", "gradient", "text", "text"]);
    assert_eq!(painted["commands"][2]["text"], "Tile");
    assert_eq!(painted["menu_button"]["height"], 20);
}

#[test]
fn paint_table_hides_menu_without_hover() {
    let output = gripframe()
        .args(["paint", "--margin", "0", "--manager"])
        .output()
        .expect("failed to execute gripframe");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#b3b4ba"));
    assert!(stdout.contains("menu button: hidden"));
}
