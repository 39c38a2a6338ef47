use skyway_backend::{Action, ActionOutcome};
use web_sys::HtmlFormElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CheckoutFormProps {
    pub total: String,
    pub on_action: Callback<Action, ActionOutcome>,
}

/// Traveler details are collected for show only; the booking is simulated
#[function_component(CheckoutForm)]
pub fn checkout_form(props: &CheckoutFormProps) -> Html {
    let form_ref = use_node_ref();

    let on_submit = {
        let form_ref = form_ref.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = on_action.emit(Action::checkout());
            if outcome.reset_form {
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
            }
        })
    };

    html! {
        <form class="checkout-form" ref={form_ref} onsubmit={on_submit}>
            <h2>{"Billing"}</h2>
            <input type="text" name="fullName" placeholder="Full name" />
            <input type="email" name="billingEmail" placeholder="Email" />
            <input type="tel" name="phone" placeholder="Phone" />
            <p class="checkout-total">{format!("Amount due: {}", props.total)}</p>
            <button type="submit" class="btn btn-primary">{"Complete booking"}</button>
        </form>
    }
}
