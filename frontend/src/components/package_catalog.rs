use shared::Product;
use skyway_backend::domain::format_currency;
use skyway_backend::{Action, ActionOutcome};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PackageCatalogProps {
    pub packages: Vec<Product>,
    pub on_action: Callback<Action, ActionOutcome>,
}

#[function_component(PackageCatalog)]
pub fn package_catalog(props: &PackageCatalogProps) -> Html {
    html! {
        <section class="packages">
            <h2>{"Popular Packages"}</h2>
            <div class="package-grid">
                {for props.packages.iter().map(|package| {
                    let on_add = {
                        let on_action = props.on_action.clone();
                        let package = package.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_action.emit(Action::add_item(package.clone()));
                        })
                    };
                    html! {
                        <div class="package-card" key={package.id.clone()}>
                            <h3>{package.name.clone()}</h3>
                            <p class="package-price">{format!("{} per traveler", format_currency(package.price))}</p>
                            <button class="add-to-cart" onclick={on_add}>{"Add to cart"}</button>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
