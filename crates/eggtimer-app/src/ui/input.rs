use eframe::egui::{InputState, Key, Modifiers};

use crate::action::{Action, ActionRequestQueue, TimerAction};

struct Trigger {
    key: Key,
    modifiers: Modifiers,
}

impl Trigger {
    const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: TimerAction,
}

impl Shortcut {
    const fn command(key: Key, action: TimerAction) -> Self {
        Self {
            trigger: Trigger::new(key, Modifiers::COMMAND),
            action,
        }
    }

    const fn plain(key: Key, action: TimerAction) -> Self {
        Self {
            trigger: Trigger::new(key, Modifiers::NONE),
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 2] = [
    Shortcut::command(Key::R, TimerAction::Reset),
    Shortcut::plain(Key::Enter, TimerAction::ToggleBoiling),
];

/// Queues the action for the first shortcut pressed this frame.
///
/// The key press is consumed, so a focused button does not also treat it as
/// a click.
pub(crate) fn handle_input(i: &mut InputState, action_queue: &mut ActionRequestQueue) {
    // `Modifiers::COMMAND` matches Ctrl (Windows/Linux) or Cmd (Mac)
    for shortcut in SHORTCUTS {
        if i.consume_key(shortcut.trigger.modifiers, shortcut.trigger.key) {
            action_queue.request(Action::Timer(shortcut.action));
            return;
        }
    }
}
