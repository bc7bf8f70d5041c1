use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{ChartSpec, Fact, TableSpec, TimelineEntry};

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub text: &'static str,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class="badge">{props.text}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillProps {
    pub text: &'static str,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html! {
        <span class="pill">{props.text}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Fill fraction in [0, 1]; out-of-range values are clamped.
    pub fraction: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let pct = (props.fraction.clamp(0.0, 1.0) * 100.0).round();
    html! {
        <div class="progress-track">
            <div class="progress-fill" style={format!("width: {pct}%;")}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CircleGaugeProps {
    pub value: u32,
    pub max: u32,
    pub label: &'static str,
}

#[function_component(CircleGauge)]
pub fn circle_gauge(props: &CircleGaugeProps) -> Html {
    // r=45 in a 100x100 viewBox, circumference ~282.7
    let circumference = 282.7;
    let fraction = if props.max == 0 {
        0.0
    } else {
        (props.value as f64 / props.max as f64).clamp(0.0, 1.0)
    };
    let dash = fraction * circumference;
    html! {
        <div class="gauge">
            <svg viewBox="0 0 100 100">
                <circle class="gauge-track" cx="50" cy="50" r="45" />
                <circle
                    class="gauge-fill"
                    cx="50" cy="50" r="45"
                    stroke-dasharray={format!("{dash:.1} {circumference}")}
                    transform="rotate(-90 50 50)"
                />
            </svg>
            <div class="gauge-center">
                <span class="gauge-value">{props.value}</span>
                <span class="gauge-label">{props.label}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub spec: ChartSpec,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let spec = props.spec;
    let max = spec.max.max(1) as f64;
    html! {
        <div class="bar-chart">
            <p class="bar-chart-title">{spec.title}</p>
            { for spec.bars.iter().map(|bar| {
                let pct = ((bar.value as f64 / max) * 100.0).clamp(0.0, 100.0);
                html! {
                    <div class="bar-row">
                        <span class="bar-label">{bar.label}</span>
                        <div class="bar-track">
                            <div class="bar-fill" style={format!("width: {pct:.1}%;")}></div>
                        </div>
                        <span class="bar-value">{format!("{}{}", bar.value, spec.unit)}</span>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub entries: &'static [TimelineEntry],
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <ol class="timeline">
            { for props.entries.iter().map(|entry| html! {
                <li class="timeline-entry">
                    <span class="timeline-at">{entry.at}</span>
                    <span class="timeline-rule"></span>
                    <span class="timeline-label">{entry.label}</span>
                </li>
            }) }
        </ol>
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub spec: TableSpec,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    let spec = props.spec;
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    { for spec.headers.iter().map(|h| html! { <th>{*h}</th> }) }
                </tr>
            </thead>
            <tbody>
                { for spec.rows.iter().map(|row| html! {
                    <tr>
                        { for row.iter().map(|cell| html! { <td>{*cell}</td> }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
pub struct FactCardProps {
    pub fact: Fact,
}

#[function_component(FactCard)]
pub fn fact_card(props: &FactCardProps) -> Html {
    html! {
        <div class="fact-card">
            <span class="fact-value">{props.fact.value}</span>
            <span class="fact-label">{props.fact.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InfoPanelProps {
    pub summary: &'static str,
    pub children: Children,
}

#[function_component(InfoPanel)]
pub fn info_panel(props: &InfoPanelProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(!*open);
        })
    };
    html! {
        <div class={classes!("info-panel", if *open { "open" } else { "" })}>
            <button class="info-panel-summary" onclick={toggle}>
                <span>{props.summary}</span>
                <span class="info-panel-icon">{if *open { "−" } else { "+" }}</span>
            </button>
            if *open {
                <div class="info-panel-body">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}
