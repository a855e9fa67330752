//! Terminal application state and event loop.
//!
//! The app owns a [`GameSession`] and a little navigation state of its
//! own (selected square, selected history entry, pane focus). Every
//! game mutation goes through [`Input`] events; the app never touches
//! the board directly.

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use crate::core::{Square, SIZE};
use crate::rules::Status;
use crate::session::{GameSession, Input, MoveError, SortOrder};
use crate::view::RenderView;

/// Which pane keyboard input is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Board,
    History,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

pub struct App {
    session: GameSession,
    selected: Square,
    history_sel: usize,
    focus: Focus,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            session: GameSession::new(),
            selected: Square::from_coords(1, 1), // Start near the middle
            history_sel: 0,
            focus: Focus::Board,
            message: None,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggled();
            }
            KeyCode::Char('s') => {
                let _ = self.session.handle(Input::SortToggle);
            }
            KeyCode::Char('r') => {
                self.session = GameSession::new();
                self.selected = Square::from_coords(1, 1);
                self.history_sel = 0;
                self.focus = Focus::Board;
                self.message = Some("New game started!".to_string());
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key.code),
                Focus::History => self.handle_history_key(key.code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.move_selection(-1, 0),
            KeyCode::Down => self.move_selection(1, 0),
            KeyCode::Left => self.move_selection(0, -1),
            KeyCode::Right => self.move_selection(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_selected(),
            _ => {}
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.move_history_selection(true),
            KeyCode::Down => self.move_history_selection(false),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let _ = self.session.handle(Input::HistoryClick(self.history_sel));
            }
            _ => {}
        }
    }

    fn move_selection(&mut self, drow: isize, dcol: isize) {
        let row = self.selected.row() as isize + drow;
        let col = self.selected.col() as isize + dcol;
        if (0..SIZE as isize).contains(&row) && (0..SIZE as isize).contains(&col) {
            self.selected = Square::from_coords(row as usize, col as usize);
        }
    }

    /// Move the history selection one entry in display order.
    fn move_history_selection(&mut self, up: bool) {
        let towards_start = match self.session.sort() {
            SortOrder::Ascending => up,
            SortOrder::Descending => !up,
        };
        if towards_start {
            self.history_sel = self.history_sel.saturating_sub(1);
        } else {
            self.history_sel = (self.history_sel + 1).min(self.session.ledger().last_step());
        }
    }

    /// Play the active mark on the selected square
    fn play_selected(&mut self) {
        match self.session.handle(Input::CellClick(self.selected)) {
            Ok(()) => {
                // Follow the game: select the entry just recorded.
                self.history_sel = self.session.cursor();
                match self.session.status() {
                    Status::Won(win) => {
                        self.message = Some(format!("Player {} wins!", win.mark));
                    }
                    Status::Draw => {
                        self.message = Some("It's a draw!".to_string());
                    }
                    Status::Next(_) => {}
                }
            }
            Err(MoveError::SquareTaken) => {
                self.message = Some("Square is already taken!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let view = RenderView::new(&self.session);
        super::game_view::render(
            frame,
            &view,
            self.selected,
            self.history_sel,
            self.focus,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
