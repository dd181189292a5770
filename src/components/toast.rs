//! Transient notice rendering with timed expiry.

use leptos::prelude::*;

use crate::state::notify::{NoticeLevel, NotifyState};

/// Renders queued notices and expires the oldest every few seconds.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if notify.get_untracked().notices.is_empty() {
                    continue;
                }
                notify.update(|n| {
                    n.notices.remove(0);
                });
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="toast-stack">
            {move || {
                notify
                    .get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id.clone();
                        let level_class = match notice.level {
                            NoticeLevel::Success => "toast toast--success",
                            NoticeLevel::Error => "toast toast--error",
                        };
                        view! {
                            <div class=level_class>
                                <span class="toast__text">{notice.text}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| notify.update(|n| n.dismiss(&id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
