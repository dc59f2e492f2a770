use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::{BookingDraft, ServiceCategory};

#[derive(Clone, PartialEq)]
enum FormNotice {
    None,
    Missing(Vec<&'static str>),
    Noted,
}

/// Consultation request form. Submitting only validates and logs the draft;
/// there is no booking backend behind it.
#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let draft = use_state(BookingDraft::default);
    let notice = use_state(|| FormNotice::None);
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.name = input.value();
            draft.set(next);
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.email = input.value();
            draft.set(next);
        })
    };

    let on_service = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.service = ServiceCategory::from_value(&select.value());
            draft.set(next);
        })
    };

    let on_date = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.preferred_date = BookingDraft::parse_date(&input.value());
            draft.set(next);
        })
    };

    let on_notes = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.notes = area.value();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let missing = draft.missing_fields();
            if !missing.is_empty() {
                debug!("booking form incomplete: {:?}", missing);
                notice.set(FormNotice::Missing(missing));
                return;
            }
            match serde_json::to_string(&*draft) {
                Ok(json) => info!("consultation request captured locally: {}", json),
                Err(err) => warn!("could not serialize booking draft: {}", err),
            }
            notice.set(FormNotice::Noted);
        })
    };

    html! {
        <form class="booking-form" onsubmit={on_submit}>
            <div class="form-row">
                <div class="form-field">
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" placeholder="Your Name" value={draft.name.clone()} oninput={on_name} />
                </div>
                <div class="form-field">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" placeholder="your@email.com" value={draft.email.clone()} oninput={on_email} />
                </div>
            </div>
            <div class="form-field">
                <label for="service">{"Service Interested In"}</label>
                <select id="service" onchange={on_service}>
                    <option value="" selected={draft.service.is_none()}>{"Select a service"}</option>
                    { for ServiceCategory::ALL.iter().map(|category| html! {
                        <option value={category.value()} selected={draft.service == Some(*category)}>
                            {category.label()}
                        </option>
                    }) }
                </select>
            </div>
            <div class="form-field">
                <label for="date">{"Preferred Date"}</label>
                <input type="date" id="date" min={today} onchange={on_date} />
            </div>
            <div class="form-field">
                <label for="message">{"Tell me about your vision"}</label>
                <textarea
                    id="message"
                    rows="4"
                    placeholder="Describe your event, style preferences, or any special requests..."
                    value={draft.notes.clone()}
                    oninput={on_notes}
                ></textarea>
            </div>
            {
                match &*notice {
                    FormNotice::Missing(fields) => html! {
                        <p class="form-notice warning">{format!("Please fill in: {}", fields.join(", "))}</p>
                    },
                    FormNotice::Noted => html! {
                        <p class="form-notice">{"Thank you! For the quickest reply, send me a message on WhatsApp or call the studio."}</p>
                    },
                    FormNotice::None => html! {},
                }
            }
            <button type="submit" class="gold-button wide">
                <span>{"Book Consultation"}</span>
            </button>
            <style>
                {r#"
                    .booking-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        margin-bottom: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid var(--input-border);
                        background: var(--input-bg);
                        color: var(--fg);
                        font: inherit;
                        transition: border-color 0.3s, box-shadow 0.3s;
                    }
                    .form-field input:focus,
                    .form-field select:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #facc15;
                        box-shadow: 0 0 0 2px rgba(250, 204, 21, 0.3);
                    }
                    .form-field textarea {
                        resize: none;
                    }
                    .form-notice {
                        margin: 0;
                        color: #facc15;
                    }
                    .form-notice.warning {
                        color: #f87171;
                    }
                "#}
            </style>
        </form>
    }
}
