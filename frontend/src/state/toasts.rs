use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

/// Outcome message raised by a data operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: ToastLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: ToastLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: ToastLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: ToastLevel::Error, message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

/// Stack of visible notifications, newest last
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl ToastList {
    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(toast) => {
                self.toasts.push(toast);
            }
            ToastAction::Dismiss(id) => {
                self.toasts.retain(|toast| toast.id != id);
            }
        }
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
