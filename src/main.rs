use gloo_console::log;

mod components;
mod config;
mod content;
mod gate;
mod nav;
mod pages;

use pages::seminar::SeminarLanding;

fn main() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(config::PAGE_TITLE);
    }

    // The gate runs outside the component tree and may redirect before the
    // page becomes interactive.
    gate::check_access();

    log!("seminar landing: mounting");
    yew::Renderer::<SeminarLanding>::new().render();
}
