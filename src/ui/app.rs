use crate::ai::MoveSelector;
use crate::game::{GameState, GameStatus, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::describe_choice;

pub struct App {
    game_state: GameState,
    selector: MoveSelector,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(selector: MoveSelector) -> Self {
        let mut app = App {
            game_state: GameState::initial(),
            selector,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        };
        app.start_game();
        app
    }

    /// The colour the person at the keyboard plays
    pub fn human(&self) -> Player {
        self.selector.ai_player().other()
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
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

    /// Reset the board; the AI opens if it plays Red
    fn start_game(&mut self) {
        self.game_state = GameState::initial();
        self.selected_column = 3;
        self.message = Some("New game started!".to_string());
        if self.game_state.current_player() == self.selector.ai_player() {
            self.ai_turn();
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                // Columns are shown 1-indexed
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.start_game();
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column, then let the AI answer
    fn drop_piece(&mut self) {
        if self.game_state.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if !self.game_state.board().is_column_open(self.selected_column) {
            self.message = Some(format!("Column {} is full!", self.selected_column + 1));
            return;
        }

        if let Err(err) = self.game_state.apply_move(self.selected_column) {
            self.message = Some(format!("Move rejected: {err}"));
            return;
        }

        if self.game_state.is_over() {
            self.announce_result();
        } else {
            self.ai_turn();
        }
    }

    fn ai_turn(&mut self) {
        match self.selector.choose_ai_move(self.game_state.board()) {
            Ok(choice) => match self.game_state.apply_move(choice.column) {
                Ok(_) => {
                    self.message = Some(describe_choice(&choice));
                    if self.game_state.is_over() {
                        self.announce_result();
                    }
                }
                Err(err) => {
                    tracing::error!(column = choice.column, %err, "AI move rejected");
                    self.message = Some(format!("AI move rejected: {err}"));
                }
            },
            Err(err) => {
                tracing::error!(%err, "AI could not choose a move");
                self.message = Some(format!("AI error: {err}"));
            }
        }
    }

    fn announce_result(&mut self) {
        let status = self.game_state.status();
        tracing::info!(?status, moves = self.game_state.move_count(), "game over");
        self.message = Some(match status {
            GameStatus::Winner(player) if player == self.human() => "You win!".to_string(),
            GameStatus::Winner(_) => "The AI wins!".to_string(),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::Ongoing => return,
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.human(),
        );
    }
}
