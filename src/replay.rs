use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use crate::config::ViewerConfig;
use crate::core::{attach, CameraTransform, InputHub, OrbitCameraController, Placement};
use crate::traits::InputEvent;

/// Recorded input: a JSON array of tagged events
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplayScript {
    pub events: Vec<InputEvent>,
}

impl ReplayScript {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse replay script")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read replay script: {:?}", path))?;
        let script = Self::from_json(&text)?;
        log::info!("Loaded {} input events from {:?}", script.events.len(), path);
        Ok(script)
    }
}

/// Feed every event through an input hub into a fresh controller.
/// Returns the placement after each event.
pub fn run(config: &ViewerConfig, script: &ReplayScript) -> Vec<Placement> {
    let hub = InputHub::new();
    let controller = Rc::new(RefCell::new(OrbitCameraController::new(
        CameraTransform::new(),
        config.target,
        config.orbit_config(),
    )));
    let subscription = attach(&controller, &hub);

    let placements = script
        .events
        .iter()
        .map(|event| {
            hub.dispatch(event);
            controller.borrow().placement()
        })
        .collect();

    drop(subscription);
    placements
}

/// Placement of a freshly constructed controller, before any input
pub fn initial(config: &ViewerConfig) -> Placement {
    OrbitCameraController::new(CameraTransform::new(), config.target, config.orbit_config())
        .placement()
}

/// Write placements as JSON lines
pub fn write_placements<W: Write>(mut out: W, placements: &[Placement]) -> Result<()> {
    for placement in placements {
        serde_json::to_writer(&mut out, placement).context("Failed to encode placement")?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn test_empty_script() {
        let script = ReplayScript::from_json("[]").unwrap();
        assert!(run(&ViewerConfig::default(), &script).is_empty());
    }

    #[test]
    fn test_initial_matches_config() {
        let mut config = ViewerConfig::default();
        config.target = Vec3::new(0.0, 2.0, 0.0);
        config.camera.distance = 3.0;

        let placement = initial(&config);
        assert_eq!(placement.target, Vec3::new(0.0, 2.0, 0.0));
        assert!((placement.position - Vec3::new(0.0, 2.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn test_bad_script_errors() {
        let err = ReplayScript::from_json(r#"[{"type":"teleport"}]"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse replay script"));
    }

    #[test]
    fn test_write_json_lines() {
        let script = ReplayScript::from_json(r#"[{"type":"pointer_up"},{"type":"pointer_leave"}]"#)
            .unwrap();
        let placements = run(&ViewerConfig::default(), &script);

        let mut out = Vec::new();
        write_placements(&mut out, &placements).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.starts_with(r#"{"position":"#)));
    }
}
