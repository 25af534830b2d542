use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::magnetic_button::MagneticButton;
use crate::components::notification::{Notification, NotificationKind};
use crate::contact::{self, ContactMessage, SubmitGate};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Replaces the built-in submitter. Called only with validated input.
    #[prop_or_default]
    pub on_submit: Option<Callback<ContactMessage>>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_state(ContactMessage::default);
    let error = use_state(|| None::<String>);
    let sending = use_state(|| false);
    let toast = use_state(|| None::<(String, NotificationKind)>);
    let gate = use_mut_ref(SubmitGate::default);

    let input_handler = |update: fn(&mut ContactMessage, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        })
    };
    let on_name = input_handler(|m, v| m.name = v);
    let on_email = input_handler(|m, v| m.email = v);
    let on_company = input_handler(|m, v| m.company = v);
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*form).clone();
            next.message = value;
            form.set(next);
        })
    };

    let submit = {
        let form = form.clone();
        let error = error.clone();
        let sending = sending.clone();
        let toast = toast.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = (*form).clone();
            if let Err(e) = message.validate() {
                error.set(Some(e.to_string()));
                return;
            }
            if !gate.borrow_mut().try_begin() {
                debug!("Ignoring submit while one is in flight");
                return;
            }
            error.set(None);

            if let Some(on_submit) = &on_submit {
                on_submit.emit(message.trimmed());
                gate.borrow_mut().finish();
                form.set(ContactMessage::default());
                toast.set(Some(("Thanks! We'll be in touch shortly.".to_string(), NotificationKind::Success)));
                return;
            }

            sending.set(true);
            let form = form.clone();
            let error = error.clone();
            let sending = sending.clone();
            let toast = toast.clone();
            let gate = gate.clone();
            spawn_local(async move {
                match contact::submit(&message).await {
                    Ok(()) => {
                        info!("Contact form accepted");
                        form.set(ContactMessage::default());
                        toast.set(Some((
                            "Thanks! We'll be in touch within one business day.".to_string(),
                            NotificationKind::Success,
                        )));
                    }
                    Err(e) => {
                        warn!("Contact form failed: {}", e);
                        error.set(Some(e.to_string()));
                        toast.set(Some((e.to_string(), NotificationKind::Error)));
                    }
                }
                gate.borrow_mut().finish();
                sending.set(false);
            });
        })
    };

    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    html! {
        <form class="contact-form" onsubmit={submit} novalidate=true>
            <div class="form-row">
                <label>
                    <span>{"Name"}</span>
                    <input type="text" value={form.name.clone()} oninput={on_name} placeholder="Jane Doe" />
                </label>
                <label>
                    <span>{"Email"}</span>
                    <input type="email" value={form.email.clone()} oninput={on_email} placeholder="jane@company.com" />
                </label>
            </div>
            <label>
                <span>{"Company "}<em>{"(optional)"}</em></span>
                <input type="text" value={form.company.clone()} oninput={on_company} placeholder="Acme Inc." />
            </label>
            <label>
                <span>{"What would you like to automate?"}</span>
                <textarea rows="5" value={form.message.clone()} oninput={on_message}
                    placeholder="Tell us about the busywork eating your week." />
            </label>
            if let Some(message) = (*error).as_ref() {
                <div class="form-error">{message}</div>
            }
            <MagneticButton class="primary-cta" button_type="submit" disabled={*sending}>
                { if *sending { "Sending..." } else { "Send message" } }
            </MagneticButton>
            if let Some((message, kind)) = (*toast).clone() {
                <Notification message={message} kind={kind} on_dismiss={on_dismiss} />
            }
        </form>
    }
}
