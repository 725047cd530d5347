//! Notification surface: plain messages plus warnings carrying one action.

/// Follow-up a warning can offer. Accepting it is reported back through
/// `TimeTracker::perform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StopBreak,
    TakeBreak,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::StopBreak => "Stop break",
            Action::TakeBreak => "Take a break",
        }
    }
}

pub trait Notifier {
    fn info(&mut self, msg: &str);
    fn warning(&mut self, msg: &str);
    fn warning_with_action(&mut self, msg: &str, action: Action);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Offer(String, Action),
}

/// Keeps every message; used by tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::Warning(m) | Notice::Offer(m, _) => Some(m.as_str()),
                Notice::Info(_) => None,
            })
            .collect()
    }

    pub fn offered_actions(&self) -> Vec<Action> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::Offer(_, a) => Some(*a),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn info(&mut self, msg: &str) {
        self.notices.push(Notice::Info(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.notices.push(Notice::Warning(msg.to_string()));
    }

    fn warning_with_action(&mut self, msg: &str, action: Action) {
        self.notices.push(Notice::Offer(msg.to_string(), action));
    }
}
