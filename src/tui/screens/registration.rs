//! Registration screen: binds key presses to form events and draws the result.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::trace;

use crate::form::{Effect, Element, FormController, FormEvent, FormState, Registration, TextField};
use crate::model::{Activity, ColorOption, Design, JobRole, PaymentMethod};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormRow, RowKind, draw_form};
use crate::tui::widgets::status_bar::{StatusBarContext, draw_status_bar};

fn rows() -> Vec<FormRow> {
    let mut rows = vec![
        FormRow::new(Element::Name, "Name", RowKind::Text(TextField::Name)),
        FormRow::new(
            Element::Email,
            "Email Address",
            RowKind::Text(TextField::Email),
        ),
        FormRow::new(Element::JobRole, "Job Role", RowKind::Select),
        FormRow::new(
            Element::OtherJobRole,
            "Other Job Role",
            RowKind::Text(TextField::OtherJobRole),
        ),
        FormRow::new(Element::Design, "Design", RowKind::Select),
        FormRow::new(Element::Color, "Color", RowKind::Select),
    ];
    rows.extend(Activity::all().iter().enumerate().map(|(i, activity)| {
        FormRow::new(Element::Activity(i), activity.label, RowKind::Checkbox(i))
    }));
    rows.extend([
        FormRow::new(Element::Payment, "I'm going to pay with", RowKind::Select),
        FormRow::new(
            Element::CardNumber,
            "Card Number",
            RowKind::Text(TextField::CardNumber),
        ),
        FormRow::new(Element::ZipCode, "Zip Code", RowKind::Text(TextField::ZipCode)),
        FormRow::new(Element::Cvv, "CVV", RowKind::Text(TextField::Cvv)),
    ]);
    rows
}

/// Picks the value after (or before) `current` in `values`, wrapping around.
///
/// An unknown `current` starts from the first (or last) value.
fn cycle<'a>(values: &[&'a str], current: &str, forward: bool) -> Option<&'a str> {
    let len = values.len();
    if len == 0 {
        return None;
    }
    let next = match values.iter().position(|v| *v == current) {
        Some(pos) if forward => (pos + 1) % len,
        Some(pos) => (pos + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    values.get(next).copied()
}

/// State for the registration screen.
#[derive(Debug, Clone)]
pub struct RegistrationState {
    controller: FormController,
    form: Form,
    /// Invalid regions after the last submit attempt.
    invalid_regions: Option<usize>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationState {
    /// Creates the screen and fires the load event.
    pub fn new() -> Self {
        let mut state = Self {
            controller: FormController::new(),
            form: Form::new(rows(), ColorOption::all().len()),
            invalid_regions: None,
        };
        state.dispatch(FormEvent::Loaded);
        state
    }

    /// Returns the presentation model.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the engine's form state.
    pub fn state(&self) -> &FormState {
        self.controller.state()
    }

    pub fn invalid_regions(&self) -> Option<usize> {
        self.invalid_regions
    }

    pub fn status_context(&self) -> StatusBarContext {
        StatusBarContext {
            total: self.form.total().to_string(),
            payment: self.state().payment_method(),
            invalid_regions: self.invalid_regions,
        }
    }

    fn dispatch(&mut self, event: FormEvent) -> Vec<Effect> {
        let effects = self.controller.dispatch(event);
        for effect in &effects {
            trace!(?effect, "applying effect");
        }
        self.form.apply_all(&effects);
        effects
    }

    fn focused_element(&self) -> Option<Element> {
        self.form.focused_row().map(|r| r.element)
    }

    fn focused_kind(&self) -> Option<RowKind> {
        self.form.focused_row().map(|r| r.kind)
    }

    /// Moves focus and reports focus changes on activity checkboxes.
    fn move_focus(&mut self, forward: bool) {
        let before = self.focused_element();
        if forward {
            self.form.focus_next();
        } else {
            self.form.focus_prev();
        }
        let after = self.focused_element();
        if before == after {
            return;
        }
        if let Some(Element::Activity(i)) = before {
            self.dispatch(FormEvent::ActivityBlurred(i));
        }
        if let Some(Element::Activity(i)) = after {
            self.dispatch(FormEvent::ActivityFocused(i));
        }
    }

    fn edit_text(&mut self, field: TextField, edit: impl FnOnce(&mut String)) {
        let mut value = self.state().text(field).value.clone();
        edit(&mut value);
        self.dispatch(FormEvent::Input(field, value));
    }

    fn handle_char(&mut self, ch: char) {
        match self.focused_kind() {
            Some(RowKind::Text(field)) => self.edit_text(field, |v| v.push(ch)),
            Some(RowKind::Checkbox(i)) if ch == ' ' => self.toggle_activity(i),
            _ => {}
        }
    }

    fn toggle_activity(&mut self, index: usize) {
        let checked = self
            .state()
            .activities
            .items()
            .get(index)
            .is_some_and(|s| s.checked);
        self.dispatch(FormEvent::ActivityToggled {
            index,
            checked: !checked,
        });
    }

    /// Steps the focused select to its next or previous option.
    fn cycle_select(&mut self, forward: bool) {
        let Some(element) = self.focused_element() else {
            return;
        };
        let event = match element {
            Element::JobRole => {
                let values: Vec<&str> = JobRole::all().iter().map(|r| r.value()).collect();
                cycle(&values, &self.state().job_role.value, forward)
                    .map(|v| FormEvent::JobRoleChanged(v.to_string()))
            }
            Element::Design => {
                let values: Vec<&str> = Design::all().iter().map(|d| d.value()).collect();
                cycle(&values, &self.state().design.value, forward)
                    .map(|v| FormEvent::DesignChanged(v.to_string()))
            }
            Element::Color => {
                let values: Vec<&str> = ColorOption::all()
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| self.form.color_visible(*i))
                    .map(|(_, c)| c.value)
                    .collect();
                cycle(&values, &self.state().color.value, forward)
                    .map(|v| FormEvent::ColorChanged(v.to_string()))
            }
            Element::Payment => {
                let values: Vec<&str> = PaymentMethod::all().iter().map(|m| m.value()).collect();
                cycle(&values, &self.state().payment.value, forward)
                    .map(|v| FormEvent::PaymentChanged(v.to_string()))
            }
            _ => None,
        };
        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    /// Runs validation; on success builds the registration to send.
    fn submit(&mut self) -> Action {
        let effects = self.dispatch(FormEvent::Submit);
        let invalid = effects
            .iter()
            .filter(|e| matches!(e, Effect::MarkInvalid(..)))
            .count();
        self.invalid_regions = Some(invalid);

        if effects.contains(&Effect::CancelSubmission) {
            Action::None
        } else {
            Action::Submit(Registration::from_state(self.state(), Utc::now()))
        }
    }
}

impl ScreenState for RegistrationState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.move_focus(true);
                Action::None
            }
            KeyCode::BackTab => {
                self.move_focus(false);
                Action::None
            }
            KeyCode::Left => {
                self.cycle_select(false);
                Action::None
            }
            KeyCode::Right => {
                self.cycle_select(true);
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(RowKind::Text(field)) = self.focused_kind() {
                    self.edit_text(field, |v| {
                        v.pop();
                    });
                }
                Action::None
            }
            KeyCode::Char(ch) => {
                self.handle_char(ch);
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the registration screen.
#[mutants::skip]
pub fn draw_registration(state: &RegistrationState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Conference Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, status_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), state.state(), frame, form_area);
    draw_status_bar(&state.status_context(), frame, status_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  \u{2190}/\u{2192}: choose  Space: check  Enter: register  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
