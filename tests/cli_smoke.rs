use std::path::PathBuf;

use scrollax::{Scene, SceneElement, ViewportSize};

fn scrollax_exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_scrollax")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "scrollax.exe"
            } else {
                "scrollax"
            });
            p
        })
}

fn write_scene(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let scene = Scene {
        viewport: ViewportSize {
            width: 1440.0,
            height: 1000.0,
        },
        elements: vec![SceneElement {
            top: 1000.0,
            height: 200.0,
            classes: vec!["js-parallax".to_owned()],
            speed: None,
            transform: None,
        }],
        scroll_offset: 0.0,
    };

    let path = dir.join(name);
    let f = std::fs::File::create(&path).unwrap();
    serde_json::to_writer_pretty(f, &scene).unwrap();
    path
}

#[test]
fn cli_trace_reports_gate_and_emits_json_lines() {
    let scene_path = write_scene("trace_scene.json");
    let scene_arg = scene_path.to_string_lossy().to_string();

    let output = std::process::Command::new(scrollax_exe())
        .args([
            "trace",
            "--in",
            scene_arg.as_str(),
            "--to",
            "900",
            "--step",
            "300",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());

    // Same gate diagnostic as `inspect`, on stderr.
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("effect enabled at width 1440"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let steps: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(steps.len(), 4);
    // scroll=900 is the entering-view step of the positioning law.
    assert_eq!(steps[3]["scroll"], 900.0);
    assert_eq!(steps[3]["offsets"][0]["y"], 375);
}

#[test]
fn cli_inspect_reports_targets() {
    let scene_path = write_scene("inspect_scene.json");
    let scene_arg = scene_path.to_string_lossy().to_string();

    let output = std::process::Command::new(scrollax_exe())
        .args(["inspect", "--in", scene_arg.as_str()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("1 target(s)"));
    assert!(stderr.contains("effect enabled at width 1440"));

    let targets: Vec<serde_json::Value> =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0]["speed"], -5);
}