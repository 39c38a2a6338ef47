use shared::{CartView, DiscountFeedback, Notification};
use skyway_backend::{Action, ActionOutcome, CartConfig, CartSession, Dispatcher};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use super::use_toast::use_toast;
use crate::services::download;
use crate::services::local_storage::LocalStorageStore;

/// Pushes each fresh view into Yew state
pub type ViewSink = Box<dyn FnMut(&CartView)>;
pub type BrowserSession = CartSession<LocalStorageStore, ViewSink>;

#[derive(Clone, PartialEq)]
pub struct CartHandle {
    pub view: CartView,
    pub discount_feedback: Option<DiscountFeedback>,
    pub toast: Option<Notification>,
    /// Run an action through the dispatch table
    pub dispatch: Callback<Action, ActionOutcome>,
}

/// Hook owning the browser cart session.
///
/// The session is created once, restored from localStorage, and re-renders the
/// component through a `ViewSink` after every committed action.
#[hook]
pub fn use_cart() -> CartHandle {
    let view = use_state(CartView::default);
    let discount_feedback = use_state(|| Option::<DiscountFeedback>::None);

    let view_setter = view.setter();
    let session: Rc<RefCell<BrowserSession>> = use_mut_ref(move || {
        let sink: ViewSink = Box::new(move |view: &CartView| view_setter.set(view.clone()));
        CartSession::open(CartConfig::default(), LocalStorageStore::new(), sink)
    });
    let dispatcher = use_memo((), |_| Dispatcher::<LocalStorageStore, ViewSink>::new());

    let dismiss_ms = CartConfig::default().notification_dismiss_ms;
    let on_expire = {
        let session = session.clone();
        Callback::from(move |ticket: u64| session.borrow_mut().dismiss_notification(ticket))
    };
    let toast = use_toast(dismiss_ms, on_expire);

    let dispatch = {
        let session = session.clone();
        let dispatcher = dispatcher.clone();
        let feedback_setter = discount_feedback.setter();
        let toast = toast.clone();
        Callback::from(move |action: Action| {
            let result = dispatcher.dispatch(&mut session.borrow_mut(), action);
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::warn!("Ignoring UI action: {}", e);
                    return ActionOutcome::default();
                }
            };

            if let Some(feedback) = outcome.discount_feedback.clone() {
                feedback_setter.set(Some(feedback));
            }
            if let Some(artifact) = &outcome.artifact {
                if let Err(e) = download::save_text_file(artifact) {
                    log::error!("Failed to download {}: {}", artifact.file_name, e);
                }
            }
            if let Some(notification) = outcome.notification.clone() {
                toast.show(notification);
            }
            outcome
        })
    };

    CartHandle {
        view: (*view).clone(),
        discount_feedback: (*discount_feedback).clone(),
        toast: toast.current.clone(),
        dispatch,
    }
}
