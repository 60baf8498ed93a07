use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::camera::DOTS_PER_COL;
use crate::camera::DOTS_PER_ROW;
use crate::events::Button;
use crate::events::InputEvent;
use crate::events::KeyCommand;
use crate::view::Pixel;

/// Terminal rows kept below the grid for the status line
pub const STATUS_ROWS: u16 = 1;

/// Size in pixels of the grid area of a `cols` x `rows` terminal
pub fn viewport(cols: u16, rows: u16) -> (u32, u32) {
    let rows = rows.saturating_sub(STATUS_ROWS);

    (
        cols as u32 * DOTS_PER_COL as u32,
        rows as u32 * DOTS_PER_ROW as u32,
    )
}

/// The pixel at the middle of terminal character `(col, row)`
fn pixel_at(col: u16, row: u16) -> Pixel {
    Pixel::new(
        col as i64 * DOTS_PER_COL as i64 + (DOTS_PER_COL / 2) as i64,
        row as i64 * DOTS_PER_ROW as i64 + (DOTS_PER_ROW / 2) as i64,
    )
}

/// Converts crossterm events into [`InputEvent`]s.
///
/// The terminal reports drags as absolute positions, so the last position of the primary button
/// is kept to turn them into relative motion.
#[derive(Debug, Default)]
pub struct TerminalInput {
    drag_from: Option<(u16, u16)>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn convert(&mut self, event: CrossTermEvent) -> Option<InputEvent> {
        match event {
            CrossTermEvent::Key(key_event) => convert_key(key_event),
            CrossTermEvent::Mouse(mouse_event) => self.convert_mouse(mouse_event),
            CrossTermEvent::Resize(cols, rows) => {
                let (width, height) = viewport(cols, rows);

                Some(InputEvent::Resize { width, height })
            }
            _ => None,
        }
    }

    fn convert_mouse(&mut self, event: MouseEvent) -> Option<InputEvent> {
        let MouseEvent {
            kind, column, row, ..
        } = event;

        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_from = Some((column, row));

                Some(InputEvent::ButtonDown {
                    button: Button::Primary,
                    pos: pixel_at(column, row),
                })
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (from_col, from_row) = self.drag_from.replace((column, row))?;

                let delta = Pixel::new(
                    (column as i64 - from_col as i64) * DOTS_PER_COL as i64,
                    (row as i64 - from_row as i64) * DOTS_PER_ROW as i64,
                );

                Some(InputEvent::Motion { delta })
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag_from = None;

                None
            }
            MouseEventKind::ScrollUp => Some(InputEvent::ButtonDown {
                button: Button::ScrollUp,
                pos: pixel_at(column, row),
            }),
            MouseEventKind::ScrollDown => Some(InputEvent::ButtonDown {
                button: Button::ScrollDown,
                pos: pixel_at(column, row),
            }),
            _ => None,
        }
    }
}

fn convert_key(key_event: KeyEvent) -> Option<InputEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let command = match key_event {
        KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return Some(InputEvent::Quit),
        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => KeyCommand::ToggleRunning,
        KeyEvent {
            code: KeyCode::Char('c'),
            ..
        } => KeyCommand::Clear,
        KeyEvent {
            code: KeyCode::Char('r'),
            ..
        } => KeyCommand::Reset,
        KeyEvent {
            code: KeyCode::Char('g'),
            ..
        } => KeyCommand::ToggleGridlines,
        KeyEvent {
            code: KeyCode::Char('n'),
            ..
        } => KeyCommand::Advance,
        KeyEvent {
            code: KeyCode::Char('0'),
            ..
        } => KeyCommand::ResetView,
        _ => return None,
    };

    Some(InputEvent::Key(command))
}
