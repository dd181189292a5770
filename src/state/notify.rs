//! Transient user-facing notices (toasts).
//!
//! SYSTEM CONTEXT
//! ==============
//! Data operations return values and errors; the caller decides whether to
//! surface a notice. This keeps notification a composable effect instead of
//! a side effect buried in the network layer.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Severity of a notice; drives styling only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One transient notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub text: String,
}

/// Queue of visible notices, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyState {
    pub notices: Vec<Notice>,
}

impl NotifyState {
    fn push(&mut self, level: NoticeLevel, text: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.notices.push(Notice { id: id.clone(), level, text: text.into() });
        id
    }

    /// Queue a success notice; returns its id for dismissal.
    pub fn success(&mut self, text: impl Into<String>) -> String {
        self.push(NoticeLevel::Success, text)
    }

    /// Queue an error notice; returns its id for dismissal.
    pub fn error(&mut self, text: impl Into<String>) -> String {
        self.push(NoticeLevel::Error, text)
    }

    /// Remove a notice by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.notices.retain(|n| n.id != id);
    }
}
