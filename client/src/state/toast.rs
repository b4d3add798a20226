//! Toast notification queue.
//!
//! Collaborators (network, auth) report outcomes here instead of rendering
//! their own errors. `components::toast_host` renders the queue and schedules
//! auto-dismissal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id. Blank messages are ignored.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Option<u64> {
        let message = message.into();
        if message.trim().is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message });
        Some(id)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
