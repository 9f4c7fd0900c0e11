//! Main TUI application state and logic

use crate::engine::engine::{PunchOutcome, Simulator};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Folds,
    Paper,
    Punch,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Folds => FocusedPane::Paper,
            FocusedPane::Paper => FocusedPane::Punch,
            FocusedPane::Punch => FocusedPane::Folds,
        }
    }
}

/// The main application state
pub struct App {
    /// The completed simulation with its fold history
    pub simulator: Simulator,

    /// Punch outcome computed from the final folded state
    pub outcome: PunchOutcome,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Scroll offset for the fold list
    pub folds_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app from a completed simulation
    pub fn new(simulator: Simulator, outcome: PunchOutcome) -> Self {
        App {
            simulator,
            outcome,
            focused_pane: FocusedPane::Folds,
            folds_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= Duration::from_secs(1) {
                    if self.simulator.step_forward().is_ok() {
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, one-line status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: fold list; right column: paper over punch result
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let punch = self.simulator.scenario().punch;

        super::panes::render_folds_pane(
            frame,
            columns[0],
            self.simulator.snapshots(),
            self.simulator.history_position(),
            self.focused_pane == FocusedPane::Folds,
            &mut self.folds_scroll,
        );

        if let Some(snapshot) = self.simulator.current_snapshot() {
            super::panes::render_paper_pane(
                frame,
                right_rows[0],
                snapshot,
                punch,
                self.focused_pane == FocusedPane::Paper,
            );
        }

        super::panes::render_punch_pane(
            frame,
            right_rows[1],
            punch,
            &self.outcome,
            self.focused_pane == FocusedPane::Punch,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.simulator.history_position(),
            self.simulator.total_snapshots(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap() as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.simulator.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Folds {
                    self.folds_scroll = self.folds_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Folds {
                    self.folds_scroll = self.folds_scroll.saturating_add(1);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to the final folded state
                self.is_playing = false;
                while self.simulator.step_forward().is_ok() {}
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Jump back to the unfolded sheet
                self.is_playing = false;
                self.simulator.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Step forward through the fold history
    fn step_forward(&mut self) {
        match self.simulator.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    /// Step backward through the fold history
    fn step_backward(&mut self) {
        match self.simulator.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }
}
