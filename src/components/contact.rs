use yew::prelude::*;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use serde::Serialize;
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::config;
use crate::validation;

/// Captured for diagnostic output only; nothing is sent anywhere yet.
#[derive(Serialize)]
struct ContactSubmission {
    name: String,
    email: String,
    phone: String,
    interest: String,
    message: String,
}

const ERROR_BORDER: &str = "border-color: #c0392b";

fn input_value(node_ref: &NodeRef) -> String {
    node_ref
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let interest_ref = use_node_ref();
    let message_ref = use_node_ref();

    let name_error = use_state(|| None::<&'static str>);
    let email_error = use_state(|| None::<&'static str>);
    let message_error = use_state(|| None::<&'static str>);
    let submitted = use_state(|| false);

    let on_name_blur = {
        let name_ref = name_ref.clone();
        let name_error = name_error.clone();
        Callback::from(move |_: FocusEvent| {
            let valid = validation::validate_name(&input_value(&name_ref));
            name_error.set((!valid).then(|| validation::NAME_ERROR));
        })
    };

    let on_email_blur = {
        let email_ref = email_ref.clone();
        let email_error = email_error.clone();
        Callback::from(move |_: FocusEvent| {
            let valid = validation::validate_email(&input_value(&email_ref));
            email_error.set((!valid).then(|| validation::EMAIL_ERROR));
        })
    };

    let on_message_blur = {
        let message_ref = message_ref.clone();
        let message_error = message_error.clone();
        Callback::from(move |_: FocusEvent| {
            let value = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default();
            let valid = validation::validate_message(&value);
            message_error.set((!valid).then(|| validation::MESSAGE_ERROR));
        })
    };

    let onsubmit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let interest_ref = interest_ref.clone();
        let message_ref = message_ref.clone();
        let name_error = name_error.clone();
        let email_error = email_error.clone();
        let message_error = message_error.clone();
        let submitted = submitted.clone();

        Callback::from(move |e: SubmitEvent| {
            // Always prevented: submission is a client-side acknowledgment.
            e.prevent_default();

            let name = input_value(&name_ref);
            let email = input_value(&email_ref);
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default();

            let name_ok = validation::validate_name(&name);
            let email_ok = validation::validate_email(&email);
            let message_ok = validation::validate_message(&message);

            name_error.set((!name_ok).then(|| validation::NAME_ERROR));
            email_error.set((!email_ok).then(|| validation::EMAIL_ERROR));
            message_error.set((!message_ok).then(|| validation::MESSAGE_ERROR));

            if !(name_ok && email_ok && message_ok) {
                return;
            }

            submitted.set(true);

            let submission = ContactSubmission {
                name,
                email,
                phone: input_value(&phone_ref),
                interest: interest_ref
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default(),
                message,
            };
            log!(
                "Form submitted:",
                serde_json::to_string(&submission).unwrap_or_default()
            );

            // Fire-and-forget reset. A second submission inside the window
            // schedules a second, independent reset.
            let form = form_ref.cast::<HtmlFormElement>();
            let submitted = submitted.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::FORM_RESET_DELAY_MS).await;
                if let Some(form) = form {
                    form.reset();
                }
                submitted.set(false);
            });
        })
    };

    let submit_label = if *submitted {
        "Inquiry Submitted ✓"
    } else {
        "Submit Inquiry"
    };

    html! {
        <form id="contactForm" class="contact-form" ref={form_ref} onsubmit={onsubmit}>
            <div class="form-group">
                <label for="name">{"Full Name"}</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    placeholder="Your full name"
                    ref={name_ref}
                    onblur={on_name_blur}
                    style={name_error.is_some().then(|| ERROR_BORDER)}
                />
                <span id="nameError" class="form-error">
                    { name_error.unwrap_or("") }
                </span>
            </div>

            <div class="form-group">
                <label for="email">{"Email Address"}</label>
                <input
                    type="text"
                    id="email"
                    name="email"
                    placeholder="you@example.com"
                    ref={email_ref}
                    onblur={on_email_blur}
                    style={email_error.is_some().then(|| ERROR_BORDER)}
                />
                <span id="emailError" class="form-error">
                    { email_error.unwrap_or("") }
                </span>
            </div>

            <div class="form-group">
                <label for="phone">{"Phone (optional)"}</label>
                <input
                    type="tel"
                    id="phone"
                    name="phone"
                    placeholder="+1 555 000 0000"
                    ref={phone_ref}
                />
            </div>

            <div class="form-group">
                <label for="interest">{"Ownership Tier"}</label>
                <select id="interest" name="interest" ref={interest_ref}>
                    <option value="" selected={true}>{"Select a tier"}</option>
                    <option value="standard">{"Standard"}</option>
                    <option value="premium">{"Premium"}</option>
                    <option value="elite">{"Elite"}</option>
                </select>
            </div>

            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    placeholder="Tell us which peak caught your eye"
                    ref={message_ref}
                    onblur={on_message_blur}
                    style={message_error.is_some().then(|| ERROR_BORDER)}
                ></textarea>
                <span id="messageError" class="form-error">
                    { message_error.unwrap_or("") }
                </span>
            </div>

            <button
                type="submit"
                class="form-submit"
                style={(*submitted).then(|| "background: #27ae60")}
            >
                { submit_label }
            </button>
        </form>
    }
}
