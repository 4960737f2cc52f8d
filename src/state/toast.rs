//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! A toast walks `Entering -> Visible -> Leaving` and is then removed. The
//! state only records phases; the `ToastStack` component drives the timers.
//! Toasts are independent: any number may coexist and duplicates are kept.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Entering,
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

impl Toast {
    /// CSS classes: `toast <severity>` plus `show` while on screen.
    pub fn class(&self) -> String {
        match self.phase {
            ToastPhase::Visible => format!("toast {} show", self.severity.as_str()),
            ToastPhase::Entering | ToastPhase::Leaving => format!("toast {}", self.severity.as_str()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            severity,
            phase: ToastPhase::Entering,
        });
        id
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.items.iter().find(|t| t.id == id)
    }

    fn set_phase(&mut self, id: u64, phase: ToastPhase) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.phase = phase;
        }
    }

    pub fn show(&mut self, id: u64) {
        self.set_phase(id, ToastPhase::Visible);
    }

    /// Start the exit animation.
    pub fn dismiss(&mut self, id: u64) {
        self.set_phase(id, ToastPhase::Leaving);
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
