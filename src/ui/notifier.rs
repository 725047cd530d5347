use crate::core::notify::{Action, Notifier};
use crate::ui::messages::{info, warning};

/// Prints through `ui::messages`. An offered action stays pending until the
/// host collects it with `take_pending`.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    pending: Option<Action>,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<Action> {
        self.pending
    }

    pub fn take_pending(&mut self) -> Option<Action> {
        self.pending.take()
    }
}

impl Notifier for TerminalNotifier {
    fn info(&mut self, msg: &str) {
        info(msg);
    }

    fn warning(&mut self, msg: &str) {
        warning(msg);
    }

    fn warning_with_action(&mut self, msg: &str, action: Action) {
        warning(format!("{msg}  [type 'yes' to {}]", action.label().to_lowercase()));
        self.pending = Some(action);
    }
}
