use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Transient notifications; every handler error ends here instead of
/// crashing the page.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

const TOAST_LIFETIME_MS: u32 = 4000;

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn show(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                level,
                message: message.into(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastLevel::Error, message);
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-container">
            {move || {
                toast
                    .toasts
                    .get()
                    .into_iter()
                    .map(|t| {
                        let class = match t.level {
                            ToastLevel::Info => "toast toast-info",
                            ToastLevel::Success => "toast toast-success",
                            ToastLevel::Error => "toast toast-error",
                        };
                        view! { <div class=class>{t.message.clone()}</div> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
