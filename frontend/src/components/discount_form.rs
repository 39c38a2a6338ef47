use shared::DiscountFeedback;
use skyway_backend::{Action, ActionOutcome};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DiscountFormProps {
    pub feedback: Option<DiscountFeedback>,
    pub active_code: Option<String>,
    pub on_action: Callback<Action, ActionOutcome>,
}

#[function_component(DiscountForm)]
pub fn discount_form(props: &DiscountFormProps) -> Html {
    let input_ref = use_node_ref();

    // Uncontrolled input: only show a code once it is active (applied or
    // restored). A rejected code stays in the field as typed.
    {
        let input_ref = input_ref.clone();
        use_effect_with(props.active_code.clone(), move |active_code| {
            if let (Some(code), Some(input)) = (active_code, input_ref.cast::<HtmlInputElement>()) {
                input.set_value(code);
            }
            || ()
        });
    }

    let on_apply = {
        let input_ref = input_ref.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            let code = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            on_action.emit(Action::apply_discount(code));
        })
    };

    let on_remove = {
        let input_ref = input_ref.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            on_action.emit(Action::remove_discount());
        })
    };

    let feedback_class = match &props.feedback {
        Some(feedback) => format!("discount-message {}", feedback.kind),
        None => "discount-message".to_string(),
    };

    html! {
        <div class="discount">
            <label class="discount-label">{"Discount code"}</label>
            <input
                id="discountCode"
                ref={input_ref}
                type="text"
                placeholder="e.g. SKY10"
            />
            <button class="btn" onclick={on_apply}>{"Apply"}</button>
            <button class="btn btn-secondary" onclick={on_remove}>{"Remove"}</button>
            <p class={feedback_class}>
                {props.feedback.as_ref().map(|f| f.message.clone()).unwrap_or_default()}
            </p>
        </div>
    }
}
