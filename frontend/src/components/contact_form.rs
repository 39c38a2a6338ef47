use shared::ContactForm;
use skyway_backend::{Action, ActionOutcome};
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_action: Callback<Action, ActionOutcome>,
}

#[function_component(ContactFormSection)]
pub fn contact_form_section(props: &ContactFormProps) -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let on_submit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input_value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let form = ContactForm {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };

            // On failure the fields are left as typed
            let outcome = on_action.emit(Action::submit_contact(form));
            if outcome.reset_form {
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
            }
        })
    };

    html! {
        <form class="contact-form" ref={form_ref} onsubmit={on_submit}>
            <h2>{"Contact us"}</h2>
            <input id="contactName" ref={name_ref} type="text" placeholder="Your name" />
            <input id="contactEmail" ref={email_ref} type="text" placeholder="you@example.com" />
            <textarea id="contactMessage" ref={message_ref} placeholder="How can we help?" />
            <button type="submit" class="btn btn-primary">{"Send message"}</button>
        </form>
    }
}
