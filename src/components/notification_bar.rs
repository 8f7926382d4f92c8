//! Transient notification bar with an "OK" dismiss action.

use leptos::prelude::*;

use crate::state::notification::NotificationState;

/// Show `message` and schedule its dismissal after `dismiss_after_ms`.
///
/// The timer only exists in the browser; elsewhere the message stays until
/// dismissed by hand.
pub fn show_notification(notice: RwSignal<NotificationState>, message: &str, dismiss_after_ms: u64) {
    let Some(seq) = notice.try_update(|n| n.show(message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(dismiss_after_ms)).await;
            let _ = notice.try_update(|n| n.dismiss(seq));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (seq, dismiss_after_ms);
    }
}

/// Renders the current notification, if any.
#[component]
pub fn NotificationBar() -> impl IntoView {
    let notice = expect_context::<RwSignal<NotificationState>>();

    move || {
        notice.get().current.map(|current| {
            let seq = current.seq;
            view! {
                <div class="snackbar" role="status">
                    <span class="snackbar__message">{current.message}</span>
                    <button class="btn snackbar__action" on:click=move |_| notice.update(|n| n.dismiss(seq))>
                        "OK"
                    </button>
                </div>
            }
        })
    }
}
