//! Shared fixture builder: writes a complete, passing training site
//! into a directory so individual tests can break one thing at a time.

// Not every test target uses every fixture constant.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const FIXTURE_MARKUP: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Conveyor Bypass Training</title>
  <link rel="stylesheet" href="style.css">
</head>
<body>
  <h1>Conveyor Bypass Training</h1>
  <div id="controls">
    <button id="startButton">Start Simulation</button>
    <button id="newScenarioButton">New Scenario</button>
    <label>Playback rate
      <select id="playbackRateSelector">
        <option value="1">1x</option>
        <option value="2">2x</option>
      </select>
    </label>
  </div>
  <div id="panel-container" class="panel-container"></div>
  <div id="feedback" class="feedback"></div>
  <video id="trainingVideo" controls>
    <source src="Logic_of_the_Silent_Conveyor.mp4" type="video/mp4">
  </video>
  <script src="script.js"></script>
</body>
</html>
"#;

pub const FIXTURE_SCRIPT: &str = r#"const NUM_CHILDREN = 15;

function initGame() {
  startSimulation();
}

function startSimulation() {
  provideFeedback(0);
}

function provideFeedback(index) {
  return index;
}
"#;

pub const FIXTURE_STYLESHEET: &str = r#".panel {
  border: 1px solid #444;
}

.panel-container {
  display: grid;
}

.feedback {
  color: #0a0;
}
"#;

/// Write every file of a passing site into `root`.
pub fn write_fixture_site(root: &Path) {
  fs::write(root.join("index.html"), FIXTURE_MARKUP).unwrap();
  fs::write(root.join("script.js"), FIXTURE_SCRIPT).unwrap();
  fs::write(root.join("style.css"), FIXTURE_STYLESHEET).unwrap();
  // Existence is all the checker looks at for the video; a stub is enough.
  fs::write(
    root.join("Logic_of_the_Silent_Conveyor.mp4"),
    b"\x00\x00\x00\x18ftypmp42",
  )
  .unwrap();
}
