use yew::prelude::*;

use crate::components::widgets::{CircleGauge, ProgressBar};
use crate::content;

pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[derive(Properties, PartialEq)]
pub struct PresenterHudProps {
    pub elapsed_secs: u64,
    pub progress: f64,
    pub section_id: &'static str,
}

#[function_component(PresenterHud)]
pub fn presenter_hud(props: &PresenterHudProps) -> Html {
    let minutes = content::minutes_for(props.section_id);
    html! {
        <aside class="hud">
            <div class="hud-row">
                <span class="hud-clock">{format_clock(props.elapsed_secs)}</span>
                <span class="hud-section">{content::section_label(props.section_id)}</span>
            </div>
            if let Some(minutes) = minutes {
                <div class="hud-budget">
                    <CircleGauge value={minutes} max={50} label="分" />
                </div>
            }
            <ProgressBar fraction={props.progress} />
            <div class="hud-keys">
                {"Shift+P: HUD / S: スライド / N: メモ / G·I·R·T: ジャンプ"}
            </div>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotesOverlayProps {
    pub section_id: &'static str,
}

#[function_component(NotesOverlay)]
pub fn notes_overlay(props: &NotesOverlayProps) -> Html {
    let label = content::section_label(props.section_id);
    let label = if label.is_empty() { "メモ" } else { label };
    html! {
        <aside class="notes-overlay">
            <p class="notes-title">{label}</p>
            <p class="notes-body">{content::notes_for(props.section_id)}</p>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(3600), "60:00");
    }
}
