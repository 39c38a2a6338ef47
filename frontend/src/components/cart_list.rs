use shared::CartView;
use skyway_backend::{Action, ActionOutcome};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CartListProps {
    pub view: CartView,
    pub on_action: Callback<Action, ActionOutcome>,
}

#[function_component(CartList)]
pub fn cart_list(props: &CartListProps) -> Html {
    let view = &props.view;

    html! {
        <section class="cart">
            <h2>{"Your Cart "}<span class="cart-count">{view.item_count}</span></h2>

            {if view.is_empty {
                html! { <p class="cart-empty">{"Your cart is empty. Add a trip to get started."}</p> }
            } else {
                html! {}
            }}

            <div class="cart-items">
                {for view.lines.iter().map(|line| {
                    let emit = |action: Action| {
                        let on_action = props.on_action.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_action.emit(action.clone());
                        })
                    };
                    html! {
                        <div class="cart-item" key={line.id.clone()}>
                            <div class="cart-item-main">
                                <div class="cart-item-title">{line.name.clone()}</div>
                                <div class="cart-item-meta">{line.meta.clone()}</div>
                            </div>
                            <div class="cart-item-actions">
                                <div class="qty-control">
                                    <button class="qty-btn" onclick={emit(Action::decrease(line.id.clone()))}>{"−"}</button>
                                    <span class="qty-value">{line.quantity}</span>
                                    <button class="qty-btn" onclick={emit(Action::increase(line.id.clone()))}>{"+"}</button>
                                </div>
                                <div class="cart-item-price">{line.line_total.clone()}</div>
                                <button class="cart-remove" onclick={emit(Action::remove(line.id.clone()))}>{"Remove"}</button>
                            </div>
                        </div>
                    }
                })}
            </div>

            <div class="cart-totals">
                <div><span>{"Subtotal"}</span><span>{view.subtotal.clone()}</span></div>
                <div><span>{"Discount"}</span><span>{view.discount.clone()}</span></div>
                <div class="cart-total"><span>{"Total"}</span><span>{view.total.clone()}</span></div>
            </div>
        </section>
    }
}
