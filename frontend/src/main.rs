use log::{info, LevelFilter};
use shared::Product;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::cart_list::CartList;
use components::checkout_form::CheckoutForm;
use components::contact_form::ContactFormSection;
use components::discount_form::DiscountForm;
use components::package_catalog::PackageCatalog;
use components::toast::Toast;
use hooks::use_cart::use_cart;

fn packages() -> Vec<Product> {
    vec![
        Product::new("bali-escape", "Bali Escape", 45999.0),
        Product::new("swiss-alps", "Swiss Alps Explorer", 129999.0),
        Product::new("kerala-backwaters", "Kerala Backwaters", 18499.0),
        Product::new("dubai-nights", "Dubai City Nights", 38999.0),
    ]
}

#[function_component(App)]
fn app() -> Html {
    let cart = use_cart();
    let packages = use_memo((), |_| packages());

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"SkyWay Travels"}</h1>
                    <div class="cart-badge">
                        <span class="cart-badge-label">{"Cart"}</span>
                        <span class="cart-count">{cart.view.item_count}</span>
                    </div>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <PackageCatalog packages={(*packages).clone()} on_action={cart.dispatch.clone()} />
                    <CartList view={cart.view.clone()} on_action={cart.dispatch.clone()} />
                    <DiscountForm
                        feedback={cart.discount_feedback.clone()}
                        active_code={cart.view.discount_code.clone()}
                        on_action={cart.dispatch.clone()}
                    />
                    <CheckoutForm total={cart.view.total.clone()} on_action={cart.dispatch.clone()} />
                    <ContactFormSection on_action={cart.dispatch.clone()} />
                </div>
            </main>

            <Toast notification={cart.toast.clone()} />
        </>
    }
}

fn main() {
    services::logging::init(LevelFilter::Info);
    info!("Starting SkyWay Travels cart");
    yew::Renderer::<App>::new().render();
}
