use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::StudyState;

pub fn handle_key(state: &mut StudyState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            state.quit = true;
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            state.flip();
        }
        KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => {
            state.next_card();
        }
        KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left => {
            state.prev_card();
        }
        _ => {}
    }
}
