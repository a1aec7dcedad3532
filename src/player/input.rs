//! Keyboard input handling for the terminal player.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::playback::PlaybackController;
use crate::player::sink::PresentationSink;
use crate::player::state::InputResult;
use crate::store::TelemetryStore;

/// Process one key event against the playback controller.
pub fn handle_key_event(
    key: KeyEvent,
    controller: &mut PlaybackController,
    store: &TelemetryStore,
    sink: &mut dyn PresentationSink,
) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Playback controls ===
        KeyCode::Char(' ') => {
            // The player only opens with telemetry loaded, so toggling
            // cannot hit the empty-telemetry error.
            let _ = controller.toggle(store);
            InputResult::Continue
        }
        KeyCode::Char('r') => {
            controller.rewind(store, sink);
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            controller.state_mut().speed_up();
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            controller.state_mut().speed_down();
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
