use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};
use tracing::info;

use crate::form::Registration;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{RegistrationState, draw_registration};

/// Top-level application state.
pub struct App {
    screen: RegistrationState,
    registration: Option<Registration>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` with a freshly loaded registration form.
    pub fn new() -> Self {
        Self {
            screen: RegistrationState::new(),
            registration: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        draw_registration(&self.screen, frame, frame.area());
    }

    /// Handles a key press and applies the resulting [`Action`].
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.screen.handle_key(key) {
            Action::None => {}
            Action::Submit(registration) => {
                info!(email = %registration.email, total = registration.total, "registration accepted");
                self.registration = Some(registration);
                self.should_quit = true;
            }
            Action::Quit => {
                info!("registration abandoned");
                self.should_quit = true;
            }
        }
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the registration screen.
    pub fn screen(&self) -> &RegistrationState {
        &self.screen
    }

    /// Takes the accepted registration, if the form was submitted.
    pub fn take_registration(&mut self) -> Option<Registration> {
        self.registration.take()
    }
}
