//! Before/after image comparison. The handle position is local to the
//! widget; parents key the component by slide id so a fresh slide mounts
//! with the handle centered again.

use web_sys::{HtmlElement, PointerEvent, TouchEvent};
use yew::prelude::*;

use crate::content::Figure;

#[derive(Properties, PartialEq)]
pub struct CompareSliderProps {
    pub before: Figure,
    pub after: Figure,
}

/// Horizontal pointer position as a percentage of the container, in [0, 100].
fn handle_position(client_x: f64, rect_left: f64, rect_width: f64) -> f64 {
    if rect_width <= 0.0 {
        return 50.0;
    }
    ((client_x - rect_left) / rect_width * 100.0).clamp(0.0, 100.0)
}

#[function_component(CompareSlider)]
pub fn compare_slider(props: &CompareSliderProps) -> Html {
    let position = use_state(|| 50.0f64);
    let dragging = use_state(|| false);
    let container = use_node_ref();

    let update_from_x = {
        let position = position.clone();
        let container = container.clone();
        Callback::from(move |client_x: f64| {
            if let Some(el) = container.cast::<HtmlElement>() {
                let rect = el.get_bounding_client_rect();
                position.set(handle_position(client_x, rect.left(), rect.width()));
            }
        })
    };

    let onpointerdown = {
        let dragging = dragging.clone();
        let update = update_from_x.clone();
        Callback::from(move |e: PointerEvent| {
            e.prevent_default();
            dragging.set(true);
            update.emit(e.client_x() as f64);
        })
    };
    let onpointermove = {
        let dragging = dragging.clone();
        let update = update_from_x.clone();
        Callback::from(move |e: PointerEvent| {
            if *dragging {
                update.emit(e.client_x() as f64);
            }
        })
    };
    let release = {
        let dragging = dragging.clone();
        Callback::from(move |_: PointerEvent| dragging.set(false))
    };
    let ontouchmove = {
        let update = update_from_x;
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                update.emit(touch.client_x() as f64);
            }
        })
    };

    let pct = *position;
    html! {
        <div class="compare">
            <div
                class="compare-frame"
                ref={container}
                {onpointerdown}
                {onpointermove}
                onpointerup={release.clone()}
                onpointerleave={release}
                {ontouchmove}
            >
                <img class="compare-after" src={props.after.src} alt={props.after.caption} />
                <div class="compare-before-clip" style={format!("width: {pct:.1}%;")}>
                    <img class="compare-before" src={props.before.src} alt={props.before.caption} />
                </div>
                <div class="compare-handle" style={format!("left: {pct:.1}%;")}>
                    <span class="compare-grip">{"⇔"}</span>
                </div>
            </div>
            <div class="compare-captions">
                <span>{props.before.caption}</span>
                <span>{props.after.caption}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::handle_position;

    #[test]
    fn position_is_a_clamped_percentage_of_width() {
        assert_eq!(handle_position(150.0, 100.0, 200.0), 25.0);
        assert_eq!(handle_position(300.0, 100.0, 200.0), 100.0);
        assert_eq!(handle_position(500.0, 100.0, 200.0), 100.0);
        assert_eq!(handle_position(50.0, 100.0, 200.0), 0.0);
    }

    #[test]
    fn degenerate_width_recenters_the_handle() {
        assert_eq!(handle_position(120.0, 100.0, 0.0), 50.0);
    }
}
