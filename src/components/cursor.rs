use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::config;

const CURSOR_STYLE: &str = "position: fixed; width: 10px; height: 10px; \
    border-radius: 50%; background: rgba(212, 165, 116, 0.6); \
    pointer-events: none; z-index: 9999; transition: transform 0.15s ease; \
    display: none;";

/// Renders nothing itself; on desktop-sized viewports it appends a follower
/// dot to the body and wires the pointer listeners. The width check happens
/// once at mount and is not revisited on resize.
#[function_component(CursorEffect)]
pub fn cursor_effect() -> Html {
    use_effect_with_deps(
        |_| {
            init_cursor();
            || ()
        },
        (),
    );

    html! {}
}

fn init_cursor() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    if width <= config::CURSOR_MIN_VIEWPORT_PX {
        return;
    }
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(cursor) = document.create_element("div") else {
        return;
    };
    cursor.set_class_name("custom-cursor");
    let _ = cursor.set_attribute("style", CURSOR_STYLE);
    let Ok(cursor) = cursor.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let _ = body.append_child(&cursor);

    // Hidden until the pointer first moves, then tracks it directly.
    let move_target = cursor.clone();
    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
        let style = move_target.style();
        let _ = style.set_property("display", "block");
        let _ = style.set_property("left", &format!("{}px", e.client_x() - 5));
        let _ = style.set_property("top", &format!("{}px", e.client_y() - 5));
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let enter_target = cursor.clone();
    let on_enter = Closure::wrap(Box::new(move || {
        let style = enter_target.style();
        let _ = style.set_property("transform", "scale(3)");
        let _ = style.set_property("background", "rgba(212, 165, 116, 0.3)");
    }) as Box<dyn FnMut()>);

    let leave_target = cursor;
    let on_leave = Closure::wrap(Box::new(move || {
        let style = leave_target.style();
        let _ = style.set_property("transform", "scale(1)");
        let _ = style.set_property("background", "rgba(212, 165, 116, 0.6)");
    }) as Box<dyn FnMut()>);

    let selector = "a, button, .feature-card, .testimonial-card, .pricing-card";
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                let _ = node
                    .add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref());
                let _ = node
                    .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
            }
        }
    }
    on_enter.forget();
    on_leave.forget();
}
