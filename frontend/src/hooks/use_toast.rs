use gloo::timers::callback::Timeout;
use shared::Notification;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub current: Option<Notification>,
    show: Callback<Notification>,
}

impl ToastHandle {
    pub fn show(&self, notification: Notification) {
        self.show.emit(notification);
    }
}

/// Hook for the single transient toast.
///
/// Showing a toast (re)starts a `dismiss_ms` timer. The previous timer is
/// dropped, which cancels it, so only the newest toast's timer can fire.
/// When it fires, `on_expire` receives the toast's ticket and decides whether
/// the toast may be hidden.
#[hook]
pub fn use_toast(dismiss_ms: u32, on_expire: Callback<u64, bool>) -> ToastHandle {
    let current = use_state(|| Option::<Notification>::None);
    let timer = use_mut_ref(|| Option::<Timeout>::None);

    let show = {
        let setter = current.setter();
        let timer = timer.clone();
        Callback::from(move |notification: Notification| {
            let ticket = notification.ticket;
            setter.set(Some(notification));

            let setter = setter.clone();
            let on_expire = on_expire.clone();
            let timeout = Timeout::new(dismiss_ms, move || {
                if on_expire.emit(ticket) {
                    setter.set(None);
                }
            });
            *timer.borrow_mut() = Some(timeout);
        })
    };

    ToastHandle {
        current: (*current).clone(),
        show,
    }
}
