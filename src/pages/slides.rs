use yew::prelude::*;

use crate::components::compare::CompareSlider;
use crate::components::hud::{format_clock, NotesOverlay};
use crate::components::widgets::{BarChart, DataTable, FactCard, InfoPanel, ProgressBar, Timeline};
use crate::content::{Media, Slide, SLIDES};

#[derive(Properties, PartialEq)]
pub struct SlideOverlayProps {
    pub index: usize,
    pub notes_open: bool,
    pub elapsed_secs: u64,
}

#[function_component(SlideOverlay)]
pub fn slide_overlay(props: &SlideOverlayProps) -> Html {
    let index = props.index.min(SLIDES.len() - 1);
    let slide = &SLIDES[index];
    let fraction = (index + 1) as f64 / SLIDES.len() as f64;

    html! {
        <div class={classes!("slide-overlay", slide.background.map(|b| format!("bg-{b}")))}>
            // Keyed so per-slide widget state (the compare handle) resets on
            // every slide change.
            <div class="slide-stage" key={slide.id}>
                { slide_body(slide) }
            </div>
            <div class="slide-footer">
                <span class="slide-clock">{format_clock(props.elapsed_secs)}</span>
                <ProgressBar {fraction} />
                <span class="slide-count">{format!("{} / {}", index + 1, SLIDES.len())}</span>
            </div>
            if props.notes_open {
                <NotesOverlay section_id={slide.chapter.unwrap_or(slide.id)} />
            }
        </div>
    }
}

fn slide_body(slide: &Slide) -> Html {
    html! {
        <>
            if let Some(subtitle) = slide.subtitle {
                <p class="slide-subtitle">{subtitle}</p>
            }
            if let Some(title) = slide.title {
                <h1 class="slide-title">{title}</h1>
            }
            if let Some(goal) = slide.goal {
                <p class="slide-goal">{goal}</p>
            }
            if !slide.lines.is_empty() {
                <ul class="slide-lines">
                    { for slide.lines.iter().map(|line| html! { <li>{*line}</li> }) }
                </ul>
            }
            if !slide.facts.is_empty() {
                <div class="fact-row">
                    { for slide.facts.iter().map(|fact| html! { <FactCard fact={*fact} /> }) }
                </div>
            }
            { media_block(slide) }
            if let Some(chart) = slide.chart {
                <BarChart spec={chart} />
            }
            if let Some(table) = slide.table {
                <DataTable spec={table} />
            }
            if !slide.timeline.is_empty() {
                <Timeline entries={slide.timeline} />
            }
            if !slide.toggles.is_empty() {
                <div class="slide-toggles">
                    { for slide.toggles.iter().map(|toggle| html! {
                        <InfoPanel summary={toggle.summary}>
                            <p>{toggle.body}</p>
                        </InfoPanel>
                    }) }
                </div>
            }
            if !slide.footnotes.is_empty() {
                <div class="slide-footnotes">
                    { for slide.footnotes.iter().map(|note| html! { <p>{*note}</p> }) }
                </div>
            }
        </>
    }
}

fn media_block(slide: &Slide) -> Html {
    match slide.media {
        None => html! {},
        Some(Media::Compare { before, after }) => html! {
            <CompareSlider {before} {after} />
        },
        Some(Media::Stack(figures)) => html! {
            <div class="figure-stack">
                { for figures.iter().map(figure) }
            </div>
        },
        Some(Media::Grid(figures)) => html! {
            <div class="figure-grid">
                { for figures.iter().map(figure) }
            </div>
        },
    }
}

fn figure(fig: &crate::content::Figure) -> Html {
    html! {
        <figure class="figure">
            <img src={fig.src} alt={fig.caption} loading="lazy" />
            <figcaption>{fig.caption}</figcaption>
        </figure>
    }
}
