use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::TOAST_TIMEOUT_MS;
use crate::state::{Notification, Toast, ToastAction, ToastList};

pub struct UseToastsResult {
    pub toasts: Vec<Toast>,
    pub notify: Callback<Notification>,
    pub dismiss: Callback<u32>,
}

/// Hook owning the notification stack. Each toast removes itself after
/// `TOAST_TIMEOUT_MS`.
#[hook]
pub fn use_toasts() -> UseToastsResult {
    let toast_list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let notify = {
        let dispatcher = toast_list.dispatcher();
        use_callback((), move |notification: Notification, _| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                let id = *next_id;
                *next_id = next_id.wrapping_add(1);
                id
            };
            dispatcher.dispatch(ToastAction::Push(Toast { id, notification }));

            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                dispatcher.dispatch(ToastAction::Dismiss(id));
            });
        })
    };

    let dismiss = {
        let dispatcher = toast_list.dispatcher();
        use_callback((), move |id: u32, _| {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
    };

    UseToastsResult {
        toasts: toast_list.toasts.clone(),
        notify,
        dismiss,
    }
}
