use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

/// Top-right stack of transient notifications. Clicking one dismisses it.
#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div class="toast-container">
            {for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_dismiss = props.on_dismiss.clone();
                html! {
                    <div
                        key={id}
                        class={toast.notification.level.css_class()}
                        role="status"
                        onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(id))}
                    >
                        {&toast.notification.message}
                    </div>
                }
            })}
        </div>
    }
}
