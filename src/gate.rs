//! Invite gate. Runs outside the Yew tree, before the page is interactive.
//!
//! This is access obfuscation, not security: the code ships in the bundle
//! and the check is trivially bypassed. Wrong input gets a blocking alert
//! and the form stays up, unlimited retries.

use gloo_console::{error, log};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::config::{INVITE_CODE, PATH_SLUG, UNLOCK_KEY};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GateDecision {
    /// Path lacks the slug: rewrite the location and stop.
    Redirect,
    /// Slug is fine but the unlock flag is missing: show the overlay.
    ShowOverlay,
    /// Unlocked and on the right path.
    Open,
}

pub fn decide(unlocked: bool, slug_ok: bool) -> GateDecision {
    if !slug_ok {
        GateDecision::Redirect
    } else if !unlocked {
        GateDecision::ShowOverlay
    } else {
        GateDecision::Open
    }
}

pub fn slug_satisfied(pathname: &str) -> bool {
    path_ends_with_slug(pathname, PATH_SLUG)
}

fn path_ends_with_slug(pathname: &str, slug: &str) -> bool {
    !slug.is_empty()
        && (pathname.ends_with(&format!("/{slug}")) || pathname.ends_with(&format!("/{slug}/")))
}

pub fn code_accepted(input: &str) -> bool {
    input.trim() == INVITE_CODE
}

/// Entry point called once at startup.
pub fn check_access() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    let unlocked = match window.local_storage() {
        Ok(Some(storage)) => matches!(storage.get_item(UNLOCK_KEY), Ok(Some(flag)) if flag == "1"),
        _ => false,
    };
    let slug_ok = window
        .location()
        .pathname()
        .map(|p| slug_satisfied(&p))
        .unwrap_or(false);

    match decide(unlocked, slug_ok) {
        GateDecision::Redirect => {
            let _ = window.location().set_pathname(&format!("/{PATH_SLUG}/"));
        }
        GateDecision::ShowOverlay => render_gate(&document),
        GateDecision::Open => {}
    }
}

fn render_gate(document: &Document) {
    let Some(wrap) = document.get_element_by_id("app-gate") else {
        error!("gate: container not found");
        return;
    };

    wrap.class_list().remove_1("hidden").ok();
    wrap.set_inner_html(
        r#"
        <div class="gate-panel">
            <div class="gate-card">
                <div class="gate-label">Invite Code</div>
                <input id="gate-code" class="gate-input" placeholder="コードを入力" />
                <button id="gate-submit" class="gate-submit">開く</button>
                <div class="gate-hint">受講者限定。第三者共有は不可。</div>
            </div>
        </div>"#,
    );

    let Some(button) = document.get_element_by_id("gate-submit") else { return };
    let document = document.clone();
    let on_click = Closure::<dyn Fn()>::new(move || {
        let value = document
            .get_element_by_id("gate-code")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        submit_code(&value);
    });
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    // The gate lives for the page lifetime, so the listener does too.
    on_click.forget();
}

/// Compare the submitted code; unlock and drop the overlay on match,
/// alert and keep it on mismatch.
pub fn submit_code(value: &str) {
    let Some(window) = web_sys::window() else { return };

    if code_accepted(value) {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(UNLOCK_KEY, "1");
        }
        if let Some(wrap) = window.document().and_then(|d| d.get_element_by_id("app-gate")) {
            wrap.remove();
        }
        log!("gate: invite code accepted");
    } else {
        let _ = window.alert_with_message("コードが違います");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matches_exactly_after_trimming() {
        assert!(code_accepted(INVITE_CODE));
        assert!(code_accepted("  AP-2025-SEMINAR  "));
        assert!(!code_accepted("ap-2025-seminar"));
        assert!(!code_accepted("1234"));
        assert!(!code_accepted(""));
    }

    #[test]
    fn slug_must_terminate_the_path() {
        assert!(path_ends_with_slug("/aixarch-20250928-8dC2p", "aixarch-20250928-8dC2p"));
        assert!(path_ends_with_slug("/seminar/aixarch-20250928-8dC2p/", "aixarch-20250928-8dC2p"));
        assert!(!path_ends_with_slug("/", "aixarch-20250928-8dC2p"));
        assert!(!path_ends_with_slug("/aixarch-20250928-8dC2p/extra", "aixarch-20250928-8dC2p"));
        assert!(!path_ends_with_slug("/anything", ""));
    }

    #[test]
    fn missing_slug_redirects_before_anything_else() {
        assert_eq!(decide(false, false), GateDecision::Redirect);
        assert_eq!(decide(true, false), GateDecision::Redirect);
    }

    #[test]
    fn overlay_only_when_locked_on_the_right_path() {
        assert_eq!(decide(false, true), GateDecision::ShowOverlay);
        assert_eq!(decide(true, true), GateDecision::Open);
    }
}
