//! Scenario runner that replays steps against a viewport controller

use anyhow::{bail, Context, Result};
use scrollkit_core::events::{KeyCode, KeyEvent, Modifiers, PointerEvent};
use scrollkit_core::geometry::{Point, Size, Viewport};
use scrollkit_viewport::{FocusHost, InteractionState, ViewportConfig, ViewportController};

use crate::host::SimulatedHost;
use crate::report::{ScenarioReport, StepRecord};
use crate::scenario::{Scenario, ScenarioStep};

/// Replay `scenario` with `config`
///
/// Malformed scenarios (unknown element or key names) are errors. Failed
/// assertions are reported in the returned report.
pub fn run_scenario(scenario: &Scenario, config: ViewportConfig) -> Result<ScenarioReport> {
    let mut host = SimulatedHost::new();
    for focusable in &scenario.focusables {
        host.insert(focusable.name.clone(), focusable.rect());
    }
    if let Some(name) = &scenario.focus {
        let id = host
            .find(name)
            .with_context(|| format!("initial focus names unknown element '{name}'"))?;
        host.request_focus(id, None);
    }

    let viewport = Viewport::new(scenario.viewport.width, scenario.viewport.height);
    let content = Size::new(scenario.content.width, scenario.content.height);
    let mut controller = ViewportController::new(config)?;
    controller.attach_child(content)?;
    controller.layout(viewport, content, &mut host);

    let mut now_ms = 0u64;
    let mut frames = 0u64;
    let mut records = Vec::with_capacity(scenario.steps.len());

    for (index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(index, kind = step.kind(), "step");
        let mut handled = None;
        let mut failure = None;

        match step {
            ScenarioStep::Pointer {
                action,
                x,
                y,
                t,
                edge_flags,
            } => {
                now_ms = now_ms.max(*t);
                let event = PointerEvent::new(*action, *x, *y, *t).with_edge_flags(*edge_flags);
                handled = Some(controller.on_pointer_event(&event, &mut host).is_some());
            }
            ScenarioStep::Tick { until_ms, frame_ms } => {
                let frame_ms = (*frame_ms).max(1);
                while now_ms < *until_ms {
                    now_ms = (now_ms + frame_ms).min(*until_ms);
                    let frame = controller.tick(now_ms);
                    frames += 1;
                    if let Some(long_press) = frame.long_press {
                        tracing::info!(?long_press, "long press");
                    }
                }
            }
            ScenarioStep::Key { key, shift, alt } => {
                let code = KeyCode::from_name(key);
                if code == KeyCode::UNKNOWN {
                    bail!("step {index}: unknown key '{key}'");
                }
                let event = KeyEvent::with_modifiers(code, Modifiers::new(*shift, false, *alt));
                handled = Some(controller.execute_key_event(&event, &mut host));
            }
            ScenarioStep::ScrollTo { x, y } => {
                handled = Some(controller.scroll_to(*x, *y));
            }
            ScenarioStep::SlideTo { x, y } => {
                handled = Some(controller.slide_to(*x, *y));
            }
            ScenarioStep::Fling { vx, vy } => {
                handled = Some(controller.fling(*vx, *vy, &mut host));
            }
            ScenarioStep::Arrow { direction } => {
                handled = Some(controller.arrow_scroll(*direction, &mut host));
            }
            ScenarioStep::Page { direction } => {
                handled = Some(controller.page_scroll(*direction, &mut host));
            }
            ScenarioStep::Full { direction } => {
                handled = Some(controller.full_scroll(*direction, &mut host));
            }
            ScenarioStep::Focus { name } => {
                let id = lookup(&host, index, name)?;
                if host.request_focus(id, None) {
                    handled = Some(controller.on_child_focused(id, &mut host));
                }
            }
            ScenarioStep::Remove { name } => {
                let id = lookup(&host, index, name)?;
                host.remove(id);
            }
            ScenarioStep::RequestLayout => controller.request_layout(),
            ScenarioStep::Layout { width, height } => {
                controller.layout(viewport, Size::new(*width, *height), &mut host);
            }
            ScenarioStep::AssertOffset { x, y } => {
                let expected = Point::new(*x, *y);
                let actual = controller.offset();
                if actual != expected {
                    failure = Some(format!(
                        "expected offset ({}, {}), got ({}, {})",
                        expected.x, expected.y, actual.x, actual.y
                    ));
                }
            }
            ScenarioStep::AssertIdle => {
                let state = controller.state();
                if state != InteractionState::Idle {
                    failure = Some(format!("expected idle, viewport is {state:?}"));
                }
            }
            ScenarioStep::AssertFocus { name } => {
                let actual = host.focused_name();
                if actual != name.as_deref() {
                    failure = Some(format!(
                        "expected focus on {}, got {}",
                        name.as_deref().unwrap_or("the viewport"),
                        actual.unwrap_or("the viewport"),
                    ));
                }
            }
        }

        let offset = controller.offset();
        records.push(StepRecord {
            index,
            kind: step.kind(),
            time_ms: now_ms,
            offset_x: offset.x,
            offset_y: offset.y,
            state: controller.state(),
            focused: host.focused_name().map(str::to_string),
            handled,
        });

        if let Some(message) = failure {
            tracing::warn!(index, %message, "assertion failed");
            return Ok(ScenarioReport::failed(
                step.kind(),
                index,
                message,
                records,
                frames,
                now_ms,
            ));
        }
    }

    Ok(ScenarioReport::passed(records, frames, now_ms))
}

fn lookup(host: &SimulatedHost, index: usize, name: &str) -> Result<scrollkit_viewport::FocusId> {
    host.find(name)
        .with_context(|| format!("step {index}: unknown element '{name}'"))
}
