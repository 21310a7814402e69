use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::scrolling;

const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("features", "The Peaks"),
    ("testimonials", "Owners"),
    ("pricing", "Ownership"),
    ("contact", "Contact"),
];

fn set_scroll_lock(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_section = use_state(|| None::<String>);

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                // The highlight outlives any single sample: off-band offsets
                // leave the previous link marked.
                let mut highlighted: Option<String> = None;
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.page_y_offset().unwrap_or(0.0);
                    is_scrolled.set(scrolling::header_is_scrolled(offset));

                    let sections = scrolling::collect_sections(&document);
                    highlighted = scrolling::apply_highlight(highlighted.take(), offset, &sections);
                    active_section.set(highlighted.clone());
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let open = !*menu_open;
            menu_open.set(open);
            set_scroll_lock(open);
        })
    };

    // Closes the menu unconditionally, then routes the click to the section.
    let nav_link_click = {
        let menu_open = menu_open.clone();
        move |section: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                set_scroll_lock(false);
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    scrolling::scroll_to_section(&document, section);
                }
            })
        }
    };

    let header_cta_click = Callback::from(move |_: MouseEvent| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            scrolling::scroll_to_section(&document, "contact");
        }
    });

    // The logo only scrolls; it is not a nav link and does not touch the menu.
    let logo_click = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            scrolling::scroll_to_section(&document, "home");
        }
    });

    html! {
        <header id="header" class={classes!("header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-inner">
                <a href="#home" class="logo" onclick={logo_click}>
                    {"Peak Acquisitions"}
                </a>

                <nav id="nav" class={classes!("nav", (*menu_open).then(|| "active"))}>
                    {
                        NAV_SECTIONS.iter().map(|&(id, label)| {
                            let active = active_section.as_deref() == Some(id);
                            html! {
                                <a
                                    href={format!("#{}", id)}
                                    class={classes!("nav-link", active.then(|| "active"))}
                                    onclick={nav_link_click(id)}
                                >
                                    {label}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </nav>

                <button class="header-cta" onclick={header_cta_click}>
                    {"Private Consultation"}
                </button>

                <button
                    id="menuToggle"
                    class={classes!("menu-toggle", (*menu_open).then(|| "active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}
