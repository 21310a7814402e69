use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    HtmlElement, HtmlSelectElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use gloo_timers::callback::Timeout;

use crate::components::contact::ContactForm;
use crate::components::cursor::CursorEffect;
use crate::config;
use crate::scrolling;

const PEAKS: [(&str, &str, &str); 3] = [
    (
        "Mount Auric",
        "3,842 m — Western Alps",
        "A south-facing giant with two glacial lakes, a private approach road \
         and year-round snow cover above 3,200 metres.",
    ),
    (
        "The Silverhorn",
        "3,106 m — Northern Range",
        "Famous for its mirrored east face at dawn. Includes grazing rights in \
         the lower meadows and a restored nineteenth-century refuge.",
    ),
    (
        "Denhall Peak",
        "2,744 m — Coastal Massif",
        "The only peak in our portfolio with a sea view. Old-growth forest on \
         the lower slopes, bare granite above the treeline.",
    ),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "We looked at islands, vineyards, even a lighthouse. Nothing compares \
         to standing on a summit that is legally yours.",
        "Margaux D., owner of Col du Brevent",
    ),
    (
        "The acquisition team handled everything from the survey flights to \
         the mineral rights. Six weeks, door to summit.",
        "Henrik S., owner of Store Vasstind",
    ),
    (
        "My children ski on their own mountain. That sentence still does not \
         feel real.",
        "Amara O., owner of Pico Alondra",
    ),
];

struct PricingTier {
    title: &'static str,
    price: &'static str,
    features: [&'static str; 4],
}

const TIERS: [PricingTier; 3] = [
    PricingTier {
        title: "Standard",
        price: "$2.4M",
        features: [
            "Peaks up to 2,000 m",
            "Summit naming rights",
            "Annual geological survey",
            "Dedicated acquisition agent",
        ],
    },
    PricingTier {
        title: "Premium",
        price: "$7.8M",
        features: [
            "Peaks up to 3,500 m",
            "Glacier and lake parcels",
            "Private helicopter pad permit",
            "Concierge expedition planning",
        ],
    },
    PricingTier {
        title: "Elite",
        price: "$18M+",
        features: [
            "Unrestricted altitude",
            "Full mineral and water rights",
            "Resident mountain keeper",
            "Bespoke refuge construction",
        ],
    },
];

/// Reveal targets start transparent and offset; the observer flips each one
/// to its resting state the first time it enters the viewport. Elements stay
/// observed afterwards, which is harmless: the transition is one-way.
fn init_reveal_observer() -> Option<IntersectionObserver> {
    let document = web_sys::window()?.document()?;

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                    let style = target.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", "translateY(0)");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    if let Ok(list) = document.query_selector_all(".feature-card, .testimonial-card, .pricing-card")
    {
        for i in 0..list.length() {
            let Some(node) = list.get(i) else { continue };
            if let Ok(el) = node.dyn_into::<HtmlElement>() {
                let style = el.style();
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("transform", "translateY(30px)");
                let _ =
                    style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
                observer.observe(&el);
            }
        }
    }
    callback.forget();
    Some(observer)
}

fn scroll_to_contact() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        scrolling::scroll_to_section(&document, "contact");
    }
}

fn card_inquiry_click(title: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "Thank you for your interest in {}. Our specialists will contact \
                 you shortly with detailed information about this exceptional property.",
                title
            ));
        }
    })
}

fn pricing_click(tier: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let contact = document.get_element_by_id("contact");
        let interest = document
            .get_element_by_id("interest")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
        let (Some(_contact), Some(interest)) = (contact, interest) else {
            return;
        };

        interest.set_value(&tier.to_lowercase());
        scrolling::scroll_to_section(&document, "contact");

        // The smooth scroll has no completion event; after a rough settle
        // time, move focus to the name field.
        let timeout = Timeout::new(config::SCROLL_FOCUS_DELAY_MS, move || {
            let focus_target = document
                .get_element_by_id("name")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(name) = focus_target {
                let _ = name.focus();
            }
        });
        timeout.forget();
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Load fade-in, one shot.
    use_effect_with_deps(
        move |_| {
            let body = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body());
            if let Some(body) = body {
                let _ = body.style().set_property("opacity", "0");
                let timeout = Timeout::new(config::LOAD_FADE_DELAY_MS, move || {
                    let style = body.style();
                    let _ = style.set_property("transition", "opacity 0.5s ease");
                    let _ = style.set_property("opacity", "1");
                });
                timeout.forget();
            }
            || ()
        },
        (),
    );

    // Scroll-triggered card reveals.
    use_effect_with_deps(
        move |_| {
            let observer = init_reveal_observer();
            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
            }
        },
        (),
    );

    // Hero parallax; only wired when a hero exists at mount.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let hero = document
                .query_selector(".hero")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());

            let mut listener = None;
            if let Some(hero) = hero {
                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.page_y_offset().unwrap_or(0.0);
                    let translate = scrolling::parallax_translate(offset);
                    let _ = hero
                        .style()
                        .set_property("transform", &format!("translateY({}px)", translate));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                listener = Some(scroll_callback);
            }

            move || {
                if let Some(callback) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );

    let cta_primary_click = Callback::from(move |_: MouseEvent| scroll_to_contact());

    let cta_secondary_click = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(
                "Our exclusive documentary film showcasing the majesty of mountain \
                 ownership will be available soon. We will notify you when it premieres.",
            );
        }
    });

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Own a Mountain"}</h1>
                    <p class="hero-subtitle">
                        {"Peak Acquisitions brokers the world's last truly private \
                          summits. Surveyed, titled, and yours in perpetuity."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="cta-primary" onclick={cta_primary_click}>
                            {"Begin Your Ascent"}
                        </button>
                        <button class="cta-secondary" onclick={cta_secondary_click}>
                            {"Watch the Film"}
                        </button>
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <h2 class="section-title">{"Featured Peaks"}</h2>
                <div class="card-grid">
                    {
                        PEAKS.iter().map(|&(title, elevation, description)| html! {
                            <div class="feature-card">
                                <h3 class="card-title">{title}</h3>
                                <p class="card-elevation">{elevation}</p>
                                <p class="card-description">{description}</p>
                                <button class="card-button" onclick={card_inquiry_click(title)}>
                                    {"Request Details"}
                                </button>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <h2 class="section-title">{"From Our Owners"}</h2>
                <div class="card-grid">
                    {
                        TESTIMONIALS.iter().map(|&(quote, author)| html! {
                            <div class="testimonial-card">
                                <p class="testimonial-quote">{quote}</p>
                                <p class="testimonial-author">{author}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="pricing" class="pricing">
                <h2 class="section-title">{"Ownership Tiers"}</h2>
                <div class="card-grid">
                    {
                        TIERS.iter().map(|tier| html! {
                            <div class="pricing-card">
                                <h3 class="pricing-title">{tier.title}</h3>
                                <p class="pricing-price">{tier.price}</p>
                                <ul class="pricing-features">
                                    {
                                        tier.features.iter().map(|feature| html! {
                                            <li>{*feature}</li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                                <button class="pricing-button" onclick={pricing_click(tier.title)}>
                                    {"Begin Acquisition"}
                                </button>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">{"Private Consultation"}</h2>
                <p class="contact-lead">
                    {"Tell us what you are looking for. A specialist will respond \
                      within one business day."}
                </p>
                <ContactForm />
            </section>

            <footer class="footer">
                <p>{"© 2026 Peak Acquisitions. All summits subject to survey."}</p>
            </footer>

            <CursorEffect />
        </div>
    }
}
