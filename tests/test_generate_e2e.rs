mod common;

use common::TappadGenProcess;

/// Splits the emitted document into per-tappad segments keyed by the
/// annotation that opens each block.
fn segments(document: &str) -> Vec<&str> {
    document.split("<!-- TapPad ").skip(1).collect()
}

// ============================================================================
// generate: default 3x3x3 document
// ============================================================================

#[test]
fn generate_emits_27_blocks() {
    let output = TappadGenProcess::spawn_command(&["generate"]);
    assert!(
        output.status.success(),
        "generate should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(segments(&stdout).len(), 27);
    assert_eq!(stdout.matches("</Rectangle>").count(), 27);
}

#[test]
fn generate_starts_at_origin() {
    let output = TappadGenProcess::spawn_command(&["generate"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("\n<!-- TapPad 0,0,0 -->\n\n<Rectangle Tap=\"nut_Tap\"\n"),
        "unexpected document head: {:?}",
        &stdout[..stdout.len().min(80)]
    );
}

#[test]
fn generate_visits_cells_in_x_major_order() {
    let output = TappadGenProcess::spawn_command(&["generate"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let mut expected = Vec::new();
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                expected.push(format!("{x},{y},{z} -->"));
            }
        }
    }

    let actual: Vec<&str> = segments(&stdout)
        .iter()
        .map(|s| &s[..s.find('\n').expect("annotation line")])
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn generate_uses_literal_margins() {
    let output = TappadGenProcess::spawn_command(&["generate"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    for (cell, margin) in [
        ("0,0,0", "40,402,0,0"),
        ("1,2,1", "206,70,0,0"),
        ("2,2,2", "364,25,0,0"),
    ] {
        let segment = segments(&stdout)
            .into_iter()
            .find(|s| s.starts_with(&format!("{cell} -->")))
            .unwrap_or_else(|| panic!("no block for {cell}"));
        assert!(
            segment.contains(&format!("Margin=\"{margin}\"")),
            "cell {cell} should carry margin {margin}"
        );
        assert!(segment.contains(&format!(
            "p:Name=\"tappad_{}\"",
            cell.replace(',', "_")
        )));
    }
}

#[test]
fn generate_embeds_home_resources() {
    let output = TappadGenProcess::spawn_command(&["generate"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let segment = segments(&stdout)
        .into_iter()
        .find(|s| s.starts_with("1,2,1 -->"))
        .expect("block for 1,2,1");
    assert!(segment.contains("<System:Int32 x:Key=\"HomeX\">1</System:Int32>"));
    assert!(segment.contains("<System:Int32 x:Key=\"HomeY\">2</System:Int32>"));
    assert!(segment.contains("<System:Int32 x:Key=\"HomeZ\">1</System:Int32>"));
}

#[test]
fn generate_is_byte_identical_across_runs() {
    let first = TappadGenProcess::spawn_command(&["generate"]);
    let second = TappadGenProcess::spawn_command(&["generate"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// ============================================================================
// generate: parameterized grid
// ============================================================================

#[test]
fn generate_smaller_grid() {
    let output = TappadGenProcess::spawn_command(&["generate", "--n", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(segments(&stdout).len(), 8);
    assert!(!stdout.contains("TapPad 2,"));
}

#[test]
fn generate_larger_grid_fails_without_margins() {
    let output = TappadGenProcess::spawn_command(&["generate", "--n", "4"]);
    assert_eq!(output.status.code(), Some(10), "emit error exit code");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no margin entry for tappad 0,0,3"),
        "diagnostic should name the first uncovered cell: {stderr}"
    );
    assert!(
        output.stdout.is_empty(),
        "no markup may be emitted when coverage fails"
    );
}

// ============================================================================
// generate: file output
// ============================================================================

#[test]
fn generate_to_file_matches_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tappads.xaml");

    let to_file =
        TappadGenProcess::spawn_command(&["generate", "--output", path.to_str().unwrap()]);
    assert!(
        to_file.status.success(),
        "generate --output should exit 0: {}",
        String::from_utf8_lossy(&to_file.stderr)
    );
    assert!(to_file.stdout.is_empty());

    let to_stdout = TappadGenProcess::spawn_command(&["generate"]);
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, to_stdout.stdout);
}

// ============================================================================
// generate: margin files
// ============================================================================

#[test]
fn generate_honors_margin_file_grid_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("margins.yaml");
    std::fs::write(&path, "grid:\n  size: 2\nmargins: []\n").unwrap();

    let output =
        TappadGenProcess::spawn_command(&["generate", "--margins", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(segments(&stdout).len(), 8);
}

#[test]
fn generate_with_replacement_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("margins.yaml");
    std::fs::write(
        &path,
        r#"
grid:
  size: 1
replace: true
margins:
  - cell: [0, 0, 0]
    margin: "7,8,9,10"
"#,
    )
    .unwrap();

    let output =
        TappadGenProcess::spawn_command(&["generate", "--margins", path.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(segments(&stdout).len(), 1);
    assert!(stdout.contains("Margin=\"7,8,9,10\""));
}

#[test]
fn generate_extended_grid_with_margin_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("margins.yaml");

    // Cover the 37 cells the built-in table lacks for n = 4.
    let mut yaml = String::from("grid:\n  size: 4\nmargins:\n");
    for x in 0..4u8 {
        for y in 0..4u8 {
            for z in 0..4u8 {
                if x > 2 || y > 2 || z > 2 {
                    yaml.push_str(&format!(
                        "  - cell: [{x}, {y}, {z}]\n    margin: \"0,0,0,0\"\n"
                    ));
                }
            }
        }
    }
    std::fs::write(&path, yaml).unwrap();

    let output =
        TappadGenProcess::spawn_command(&["generate", "--margins", path.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(segments(&stdout).len(), 64);
}

#[test]
fn generate_missing_margin_file_is_config_error() {
    let output = TappadGenProcess::spawn_command(&[
        "generate",
        "--margins",
        "/no/such/margins.yaml",
    ]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("file not found"));
}
