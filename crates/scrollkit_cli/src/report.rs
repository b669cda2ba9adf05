//! Report output model for headless viewport runs

use anyhow::Result;
use scrollkit_viewport::InteractionState;
use serde::Serialize;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Viewport state observed after one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub kind: &'static str,
    pub time_ms: u64,
    pub offset_x: i32,
    pub offset_y: i32,
    pub state: InteractionState,
    pub focused: Option<String>,
    /// Whether the viewport consumed the request, for steps that report it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handled: Option<bool>,
}

/// Machine-readable result of a scenario run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub steps: Vec<StepRecord>,
}

impl ScenarioReport {
    pub fn passed(steps: Vec<StepRecord>, elapsed_frames: u64, elapsed_ms: u64) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            elapsed_frames,
            elapsed_ms,
            steps,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        steps: Vec<StepRecord>,
        elapsed_frames: u64,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            elapsed_frames,
            elapsed_ms,
            steps,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == ReportStatus::Failed
    }

    pub fn write_json<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn write_text<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(writer, "{self}")?;
        Ok(())
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:>3}] {:<14} t={:<6} offset=({}, {}) state={:?} focus={}",
            self.index,
            self.kind,
            self.time_ms,
            self.offset_x,
            self.offset_y,
            self.state,
            self.focused.as_deref().unwrap_or("-"),
        )?;
        if let Some(handled) = self.handled {
            write!(f, " handled={handled}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        match self.status {
            ReportStatus::Passed => writeln!(
                f,
                "PASSED ({} steps, {} frames, {} ms)",
                self.steps.len(),
                self.elapsed_frames,
                self.elapsed_ms
            ),
            ReportStatus::Failed => writeln!(
                f,
                "FAILED at step {} ({}): {}",
                self.failed_step_index.unwrap_or_default(),
                self.assertion.as_deref().unwrap_or("?"),
                self.message.as_deref().unwrap_or(""),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize) -> StepRecord {
        StepRecord {
            index,
            kind: "scroll_to",
            time_ms: 0,
            offset_x: 0,
            offset_y: 120,
            state: InteractionState::Idle,
            focused: None,
            handled: Some(true),
        }
    }

    #[test]
    fn test_text_report() {
        let report = ScenarioReport::failed(
            "assert_offset",
            1,
            "expected (0, 100), got (0, 120)".to_string(),
            vec![record(0)],
            3,
            48,
        );
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("offset=(0, 120)"));
        assert!(text.contains("handled=true"));
        assert!(text.contains("FAILED at step 1 (assert_offset)"));
    }

    #[test]
    fn test_json_report() {
        let report = ScenarioReport::passed(vec![record(0)], 0, 0);
        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "passed");
        assert_eq!(value["steps"][0]["state"], "idle");
        assert_eq!(value["steps"][0]["offset_y"], 120);
        assert!(value["failed_step_index"].is_null());
    }
}
