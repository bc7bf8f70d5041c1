use gloo_console::log;
use gloo_timers::callback::Interval;
use js_sys::Date;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::hud::{NotesOverlay, PresenterHud};
use crate::content::{SECTION_IDS, SLIDES};
use crate::nav::{self, key_action, NavAction, NavState};
use crate::pages::sections::{
    ChapterCards, ChapterIndex, FooterBar, Hero, Highlights, Program, Resources, Showcase,
    SpeakersSection, Voices,
};
use crate::pages::slides::SlideOverlay;

/// Smooth-scroll a section into view. A missing element is a no-op.
fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    if let Some(element) = document.get_element_by_id(id) {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(SeminarLanding)]
pub fn seminar_landing() -> Html {
    let nav = use_state(NavState::new);
    let elapsed = use_state(|| 0u64);
    let progress = use_state(|| 0.0f64);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Elapsed time since mount, recomputed from the start timestamp each
    // tick so it self-corrects after tab throttling.
    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |_| {
                let start = Date::now();
                let interval = Interval::new(1_000, move || {
                    elapsed.set(((Date::now() - start) / 1000.0).max(0.0) as u64);
                });
                move || drop(interval)
            },
            (),
        );
    }

    // Global keyboard and scroll listeners. Re-registered whenever the nav
    // state changes so each handler sees the state it transitions from;
    // both are removed in the destructor.
    {
        let nav = nav.clone();
        let progress = progress.clone();
        let deps = (*nav).clone();
        use_effect_with_deps(
            move |state: &NavState| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let keydown = Closure::<dyn Fn(KeyboardEvent)>::new({
                        let nav = nav.clone();
                        let state = state.clone();
                        move |e: KeyboardEvent| {
                            // Keys typed into the gate input stay in the gate.
                            let typing = e
                                .target()
                                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                                .is_some();
                            if typing {
                                return;
                            }
                            let Some(action) = key_action(&state, &e.key(), e.shift_key()) else {
                                return;
                            };
                            e.prevent_default();
                            let next = state.apply(action, SLIDES.len());
                            match action {
                                NavAction::Print => {
                                    if let Some(window) = web_sys::window() {
                                        let _ = window.print();
                                    }
                                }
                                NavAction::Next | NavAction::Prev if !state.slide_mode => {
                                    scroll_to_section(SECTION_IDS[next.section_index]);
                                }
                                NavAction::JumpTo(id) => scroll_to_section(id),
                                NavAction::ToggleSlideMode if !state.slide_mode => {
                                    log!("slide mode: on");
                                }
                                _ => {}
                            }
                            nav.set(next);
                        }
                    });

                    let scroll = Closure::<dyn Fn()>::new({
                        let nav = nav.clone();
                        let state = state.clone();
                        let progress = progress.clone();
                        move || {
                            let Some(window) = web_sys::window() else { return };
                            let Some(document) = window.document() else { return };

                            // Re-derive the active section from the live
                            // element positions on every event.
                            let mut positions = Vec::with_capacity(SECTION_IDS.len());
                            for id in SECTION_IDS.iter().copied() {
                                if let Some(element) = document.get_element_by_id(id) {
                                    positions.push((id, element.get_bounding_client_rect().top()));
                                }
                            }
                            if let Some(current) = nav::nearest_section(&positions) {
                                if let Some(index) =
                                    SECTION_IDS.iter().position(|s| *s == current)
                                {
                                    if index != state.section_index {
                                        nav.set(state.with_section(index));
                                    }
                                }
                            }

                            if let (Ok(offset), Some(root)) =
                                (window.scroll_y(), document.document_element())
                            {
                                let viewport = window
                                    .inner_height()
                                    .ok()
                                    .and_then(|v| v.as_f64())
                                    .unwrap_or(0.0);
                                let max = root.scroll_height() as f64 - viewport;
                                progress.set(nav::scroll_fraction(offset, max));
                            }
                        }
                    });

                    let _ = window.add_event_listener_with_callback(
                        "keydown",
                        keydown.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll.as_ref().unchecked_ref(),
                    );

                    Box::new(move || {
                        if let Some(window) = web_sys::window() {
                            let _ = window.remove_event_listener_with_callback(
                                "keydown",
                                keydown.as_ref().unchecked_ref(),
                            );
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            deps,
        );
    }

    if nav.slide_mode {
        return html! {
            <SlideOverlay
                index={nav.slide_index}
                notes_open={nav.notes_open}
                elapsed_secs={*elapsed}
            />
        };
    }

    let current = nav.current_section();
    let on_select = {
        let nav = nav.clone();
        Callback::from(move |id: &'static str| {
            let next = (*nav).apply(NavAction::JumpTo(id), SLIDES.len());
            scroll_to_section(id);
            nav.set(next);
        })
    };

    html! {
        <div class="page">
            <Hero />
            <Highlights />
            <Program />
            <Voices />
            <SpeakersSection />
            <ChapterIndex {current} {on_select} />
            <ChapterCards />
            <Showcase />
            <Resources />
            <FooterBar />
            <div class="scroll-rail">
                <div
                    class="scroll-rail-fill"
                    style={format!("height: {:.1}%;", *progress * 100.0)}
                ></div>
            </div>
            if nav.presenter {
                <PresenterHud
                    elapsed_secs={*elapsed}
                    progress={*progress}
                    section_id={current}
                />
            }
            if nav.notes_open {
                <NotesOverlay section_id={current} />
            }
        </div>
    }
}
