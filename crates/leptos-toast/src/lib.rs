//! Leptos Toast Utilities
//!
//! Transient notifications for Leptos. A toast stays visible for a fixed
//! delay, then gets the `fade-out` class; it is removed once its fade
//! transition finishes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay before a toast starts fading
pub const DEFAULT_DISPLAY_MS: u32 = 3000;

/// Toast identifier, unique within one `ToastList`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

/// Toast lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Shown, fade not started yet
    Visible,
    /// `fade-out` applied, waiting for the transition to end
    Fading,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    /// CSS class for the current phase
    pub fn class(&self) -> &'static str {
        match self.phase {
            ToastPhase::Visible => "toast",
            ToastPhase::Fading => "toast fade-out",
        }
    }
}

/// Live toasts in creation order
#[derive(Clone, Debug, Default)]
pub struct ToastList {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visible toast
    pub fn push(&mut self, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            phase: ToastPhase::Visible,
        });
        id
    }

    /// Move a visible toast to `Fading`. Returns false if the toast is gone
    /// or already fading.
    pub fn begin_fade(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Fading;
                true
            }
            _ => false,
        }
    }

    /// Remove a toast whose fade has started. Returns true at most once per toast.
    pub fn remove_faded(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts
            .retain(|t| !(t.id == id && t.phase == ToastPhase::Fading));
        self.toasts.len() != before
    }

    pub fn is_fading(&self, id: ToastId) -> bool {
        self.get(id).map_or(false, |t| t.phase == ToastPhase::Fading)
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Toast timing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastOptions {
    /// Time a toast stays fully visible
    pub display_ms: u32,
    /// Remove a fading toast after this long even if no `transitionend`
    /// arrives. `None` waits for the transition only.
    pub fade_fallback_ms: Option<u32>,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            display_ms: DEFAULT_DISPLAY_MS,
            fade_fallback_ms: None,
        }
    }
}

/// Handle for showing toasts; cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct Toaster {
    list: RwSignal<ToastList>,
    options: ToastOptions,
}

impl Toaster {
    pub fn new(options: ToastOptions) -> Self {
        Self {
            list: RwSignal::new(ToastList::new()),
            options,
        }
    }

    pub fn options(&self) -> ToastOptions {
        self.options
    }

    /// Show a toast and schedule its fade
    pub fn show(&self, message: impl Into<String>) -> ToastId {
        let id = self.push(message);
        let toaster = *self;

        spawn_local(async move {
            TimeoutFuture::new(toaster.options.display_ms).await;
            if !toaster.begin_fade(id) {
                return;
            }
            if let Some(fallback_ms) = toaster.options.fade_fallback_ms {
                TimeoutFuture::new(fallback_ms).await;
                if toaster.list.try_update(|l| l.remove_faded(id)).unwrap_or(false) {
                    log::debug!("[Toast] {:?} removed by fallback timer", id);
                }
            }
        });

        id
    }

    /// Add a visible toast without scheduling its fade
    pub fn push(&self, message: impl Into<String>) -> ToastId {
        self.list.write().push(message)
    }

    /// Apply `fade-out` to a visible toast
    pub fn begin_fade(&self, id: ToastId) -> bool {
        self.list.try_update(|l| l.begin_fade(id)).unwrap_or(false)
    }

    /// Remove a toast once its fade transition has ended
    pub fn dismiss(&self, id: ToastId) {
        // transitionend fires per animated property; only the first one counts
        if !self.list.with_untracked(|l| l.is_fading(id)) {
            return;
        }
        self.list.update(|l| {
            l.remove_faded(id);
        });
    }

    pub fn list(&self) -> ReadSignal<ToastList> {
        self.list.read_only()
    }
}

/// Renders every live toast as a `div.toast` at the mount point
#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
    let list = toaster.list();

    view! {
        <For
            each=move || list.with(|l| l.iter().map(|t| (t.id, t.message.clone())).collect::<Vec<_>>())
            key=|(id, _)| *id
            children=move |(id, message)| {
                let class = move || {
                    list.with(|l| l.get(id).map(Toast::class).unwrap_or("toast fade-out"))
                };
                view! {
                    <div
                        class=class
                        role="status"
                        on:transitionend=move |_ev: web_sys::TransitionEvent| toaster.dismiss(id)
                    >
                        {message}
                    </div>
                }
            }
        />
    }
}
