use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, ModeKind};
use crate::cursor::CursorBuffer;
use crate::dispatch::Command;
use crate::error::VaultError;

/// Processes one terminal event. Errors are fatal; everything recoverable is reported in-app.
pub fn handle_event(app: &mut App, event: Event) -> Result<(), VaultError> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Resize(width, height) => {
            app.resize(width, height);
            Ok(())
        }
        _ => Ok(()),
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), VaultError> {
    app.status_message = None;

    if let Some(command) = Command::from_event(&key)
        && run_command(app, command)?
    {
        return Ok(());
    }

    match app.mode_kind() {
        ModeKind::Idle => {}
        ModeKind::PromptingNewFile => {
            handle_text_key(&mut app.prompt, key);
        }
        ModeKind::Editing => handle_edit_key(app, key),
        ModeKind::Listing => handle_list_key(app, key),
    }
    Ok(())
}

/// Returns false when the key should fall through to the active widget.
fn run_command(app: &mut App, command: Command) -> Result<bool, VaultError> {
    match command {
        Command::Quit => app.quit(),
        Command::NewFile => app.start_new_file(),
        Command::List => app.show_list()?,
        Command::Delete => app.delete_selected()?,
        Command::Save => app.save_current(),
        Command::Cancel => app.cancel(),
        Command::Confirm => {
            return match app.mode_kind() {
                ModeKind::Listing => Ok(app.open_selected()),
                ModeKind::PromptingNewFile => app.create_from_prompt(),
                ModeKind::Idle | ModeKind::Editing => Ok(false),
            };
        }
    }
    Ok(true)
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    if let Some(session) = app.session_mut() {
        session.editor_mut().input(key);
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if let Some(buffer) = app.notes.filter_buffer_mut() {
        match key.code {
            KeyCode::Enter => app.notes.apply_filter(),
            KeyCode::Up => app.notes.move_up(),
            KeyCode::Down => app.notes.move_down(),
            _ => {
                if handle_text_key(buffer, key) {
                    app.notes.filter_changed();
                }
            }
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.notes.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.notes.move_down(),
        KeyCode::Home | KeyCode::Char('g') => app.notes.jump_to_first(),
        KeyCode::End | KeyCode::Char('G') => app.notes.jump_to_last(),
        KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h') => app.notes.page_up(),
        KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l') => app.notes.page_down(),
        KeyCode::Char('/') => app.notes.start_filter(),
        _ => {}
    }
}

/// Single-line editing shared by the new-file prompt and the list filter.
/// Returns true when the content changed.
fn handle_text_key(buffer: &mut CursorBuffer, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let before = buffer.content().len();

    match key.code {
        KeyCode::Char('a') if ctrl => buffer.move_to_start(),
        KeyCode::Char('e') if ctrl => buffer.move_to_end(),
        KeyCode::Char('w') if ctrl => buffer.delete_word_before(),
        KeyCode::Char('u') if ctrl => buffer.delete_to_start(),
        KeyCode::Char('k') if ctrl => buffer.delete_to_end(),
        KeyCode::Char('b') if alt => buffer.move_word_left(),
        KeyCode::Char('f') if alt => buffer.move_word_right(),
        KeyCode::Char(c) if !ctrl && !alt => {
            buffer.insert_char(c);
        }
        KeyCode::Backspace if alt => buffer.delete_word_before(),
        KeyCode::Backspace => {
            buffer.delete_char_before();
        }
        KeyCode::Delete => {
            buffer.delete_char_after();
        }
        KeyCode::Left if ctrl || alt => buffer.move_word_left(),
        KeyCode::Right if ctrl || alt => buffer.move_word_right(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Home => buffer.move_to_start(),
        KeyCode::End => buffer.move_to_end(),
        _ => {}
    }

    buffer.content().len() != before
}
