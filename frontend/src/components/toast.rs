use shared::Notification;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Option<Notification>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    match &props.notification {
        Some(notification) => html! {
            <div class={classes!("toast", "visible", notification.kind.to_string())}>
                {notification.message.clone()}
            </div>
        },
        None => html! { <div class="toast"></div> },
    }
}
