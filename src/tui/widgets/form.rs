//! Host-side presentation of the registration form.
//!
//! A [`Form`] never decides anything: it only records the [`Effect`]s handed
//! back by the form engine and draws them.

use std::collections::BTreeMap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::form::{Effect, Element, FormState, Region, TextField};
use crate::model::{ColorOption, Design, JobRole, PaymentMethod};

/// How a row takes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Text(TextField),
    Select,
    /// Activity checkbox, by catalog index.
    Checkbox(usize),
}

/// One focusable control in the form.
#[derive(Debug, Clone)]
pub struct FormRow {
    pub element: Element,
    pub label: String,
    pub kind: RowKind,
    pub visible: bool,
    pub enabled: bool,
    /// Accessibility focus ring.
    pub highlighted: bool,
}

impl FormRow {
    /// Creates a visible, enabled row.
    pub fn new(element: Element, label: impl Into<String>, kind: RowKind) -> Self {
        Self {
            element,
            label: label.into(),
            kind,
            visible: true,
            enabled: true,
            highlighted: false,
        }
    }
}

/// Validity marker of a region as last rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Valid,
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OptionFlags {
    visible: bool,
    selected: bool,
}

/// Rows plus every presentation flag the engine can toggle.
#[derive(Debug, Clone)]
pub struct Form {
    rows: Vec<FormRow>,
    focus: usize,
    color_options: Vec<OptionFlags>,
    panels: BTreeMap<PaymentMethod, bool>,
    total: String,
    markers: BTreeMap<Region, Marker>,
}

/// The region whose marker is drawn on `element`'s row.
fn region_of(element: Element) -> Option<Region> {
    match element {
        Element::Name => Some(Region::Name),
        Element::Email => Some(Region::Email),
        Element::Activity(_) => Some(Region::Activities),
        Element::CardNumber | Element::ZipCode | Element::Cvv => Some(Region::Payment),
        _ => None,
    }
}

impl Form {
    /// Creates a form with the given rows. Focus starts on the first row.
    pub fn new(rows: Vec<FormRow>, color_count: usize) -> Self {
        Self {
            rows,
            focus: 0,
            color_options: vec![
                OptionFlags {
                    visible: true,
                    selected: false,
                };
                color_count
            ],
            panels: PaymentMethod::all().iter().map(|&m| (m, true)).collect(),
            total: String::new(),
            markers: BTreeMap::new(),
        }
    }

    /// Records one effect.
    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::Focus(element) => self.set_focus(*element),
            Effect::SetVisible(Element::ColorOption(i), visible) => {
                if let Some(flags) = self.color_options.get_mut(*i) {
                    flags.visible = *visible;
                }
            }
            Effect::SetVisible(Element::PaymentPanel(method), visible) => {
                self.panels.insert(*method, *visible);
            }
            Effect::SetVisible(element, visible) => {
                if let Some(row) = self.row_mut(*element) {
                    row.visible = *visible;
                }
            }
            Effect::SetEnabled(element, enabled) => {
                if let Some(row) = self.row_mut(*element) {
                    row.enabled = *enabled;
                }
            }
            Effect::SetSelected(Element::ColorOption(i), selected) => {
                if let Some(flags) = self.color_options.get_mut(*i) {
                    flags.selected = *selected;
                }
            }
            Effect::SetSelected(..) => {}
            Effect::SetText(Element::ActivitiesCost, text) => self.total = text.clone(),
            Effect::SetText(..) => {}
            Effect::SetHighlight(element, on) => {
                if let Some(row) = self.row_mut(*element) {
                    row.highlighted = *on;
                }
            }
            Effect::MarkValid(region) => {
                self.markers.insert(*region, Marker::Valid);
            }
            Effect::MarkInvalid(region, message) => {
                self.markers.insert(*region, Marker::Invalid(message.clone()));
            }
            Effect::CancelSubmission => {}
        }
    }

    pub fn apply_all(&mut self, effects: &[Effect]) {
        for effect in effects {
            self.apply(effect);
        }
    }

    fn row_mut(&mut self, element: Element) -> Option<&mut FormRow> {
        self.rows.iter_mut().find(|r| r.element == element)
    }

    /// Returns `true` if the row is drawn: visible itself and inside a shown panel.
    pub fn is_shown(&self, index: usize) -> bool {
        let Some(row) = self.rows.get(index) else {
            return false;
        };
        let in_card_panel = matches!(
            row.element,
            Element::CardNumber | Element::ZipCode | Element::Cvv
        );
        row.visible && (!in_card_panel || self.panel_visible(PaymentMethod::CreditCard))
    }

    fn is_navigable(&self, index: usize) -> bool {
        self.is_shown(index) && self.rows[index].enabled
    }

    /// Returns the index of the focused row.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_row(&self) -> Option<&FormRow> {
        self.rows.get(self.focus)
    }

    /// Moves focus to the row for `element`, if there is one.
    pub fn set_focus(&mut self, element: Element) {
        if let Some(index) = self.rows.iter().position(|r| r.element == element) {
            self.focus = index;
        }
    }

    /// Moves focus to the next navigable row, wrapping around.
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    /// Moves focus to the previous navigable row, wrapping around.
    pub fn focus_prev(&mut self) {
        let len = self.rows.len();
        self.step_focus(len.saturating_sub(1));
    }

    fn step_focus(&mut self, step: usize) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let mut index = self.focus;
        for _ in 0..len {
            index = (index + step) % len;
            if self.is_navigable(index) {
                self.focus = index;
                return;
            }
        }
    }

    pub fn rows(&self) -> &[FormRow] {
        &self.rows
    }

    pub fn color_visible(&self, index: usize) -> bool {
        self.color_options.get(index).is_some_and(|f| f.visible)
    }

    /// Index of the selected color option, if any.
    pub fn selected_color(&self) -> Option<usize> {
        self.color_options.iter().position(|f| f.selected)
    }

    pub fn panel_visible(&self, method: PaymentMethod) -> bool {
        self.panels.get(&method).copied().unwrap_or(false)
    }

    /// The running-total text, as last set.
    pub fn total(&self) -> &str {
        &self.total
    }

    pub fn marker(&self, region: Region) -> Option<&Marker> {
        self.markers.get(&region)
    }

    /// Number of regions currently marked invalid.
    pub fn invalid_count(&self) -> usize {
        self.markers
            .values()
            .filter(|m| matches!(m, Marker::Invalid(_)))
            .count()
    }
}

fn select_text(row: &FormRow, form: &Form, state: &FormState) -> String {
    match row.element {
        Element::JobRole => JobRole::from_value(&state.job_role.value)
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| state.job_role.value.clone()),
        Element::Design => Design::from_value(&state.design.value)
            .map(|d| d.label().to_string())
            .unwrap_or_else(|| "Select Theme".to_string()),
        Element::Color => form
            .selected_color()
            .and_then(|i| ColorOption::all().get(i))
            .map(|c| c.label.to_string())
            .unwrap_or_else(|| "Select a design theme above".to_string()),
        Element::Payment => state
            .payment_method()
            .map(|m| m.label().to_string())
            .unwrap_or_else(|| "Select Payment Method".to_string()),
        _ => String::new(),
    }
}

fn row_line(row: &FormRow, focused: bool, form: &Form, state: &FormState) -> Line<'static> {
    let marker = region_of(row.element).and_then(|r| form.marker(r));
    let mut style = match marker {
        Some(Marker::Invalid(_)) => Style::default().fg(Color::Red),
        Some(Marker::Valid) => Style::default().fg(Color::Green),
        None => Style::default(),
    };
    if !row.enabled {
        style = Style::default().fg(Color::DarkGray);
    }
    if focused {
        style = style.fg(Color::Yellow);
    }
    if row.highlighted {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let prefix = if focused { "> " } else { "  " };
    let body = match row.kind {
        RowKind::Text(field) => {
            let cursor = if focused { "\u{2588}" } else { "" };
            format!("{}: {}{cursor}", row.label, state.text(field).value)
        }
        RowKind::Select => format!("{}: < {} >", row.label, select_text(row, form, state)),
        RowKind::Checkbox(i) => {
            let item = state.activities.items().get(i);
            let checked = item.is_some_and(|s| s.checked);
            let detail = item
                .map(|s| match s.activity.schedule {
                    Some(when) => format!(" ({when}) ${}", s.activity.cost),
                    None => format!(" ${}", s.activity.cost),
                })
                .unwrap_or_default();
            let mark = if checked { "x" } else { " " };
            format!("[{mark}] {}{detail}", row.label)
        }
    };
    Line::from(Span::styled(format!("{prefix}{body}"), style))
}

fn message_line(form: &Form, region: Region) -> Option<Line<'static>> {
    match form.marker(region) {
        Some(Marker::Invalid(message)) => Some(Line::from(Span::styled(
            format!("    {message}"),
            Style::default().fg(Color::Red),
        ))),
        _ => None,
    }
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Renders the form: rows read values from `state`, flags from `form`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, state: &FormState, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let last_activity = form
        .rows
        .iter()
        .rposition(|r| matches!(r.kind, RowKind::Checkbox(_)));

    for (i, row) in form.rows.iter().enumerate() {
        match row.element {
            Element::Name => lines.push(heading("Basic Info")),
            Element::Design => lines.push(heading("T-Shirt Info")),
            Element::Activity(0) => lines.push(heading("Register for Activities")),
            Element::Payment => lines.push(heading("Payment Info")),
            _ => {}
        }

        if form.is_shown(i) {
            lines.push(row_line(row, i == form.focus, form, state));
        }

        match row.element {
            Element::Name => lines.extend(message_line(form, Region::Name)),
            Element::Email => lines.extend(message_line(form, Region::Email)),
            Element::Payment => {
                if form.panel_visible(PaymentMethod::Paypal) {
                    lines.push(Line::from(
                        "    You will be taken to PayPal to complete your payment.",
                    ));
                }
                if form.panel_visible(PaymentMethod::Bitcoin) {
                    lines.push(Line::from(
                        "    You will be taken to Coinbase to complete your payment.",
                    ));
                }
            }
            Element::Cvv => lines.extend(message_line(form, Region::Payment)),
            _ => {}
        }

        if Some(i) == last_activity {
            lines.push(Line::from(format!("  {}", form.total)));
            lines.extend(message_line(form, Region::Activities));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> Form {
        Form::new(
            vec![
                FormRow::new(Element::Name, "Name", RowKind::Text(TextField::Name)),
                FormRow::new(Element::Color, "Color", RowKind::Select),
                FormRow::new(Element::Activity(0), "Main", RowKind::Checkbox(0)),
                FormRow::new(
                    Element::CardNumber,
                    "Card",
                    RowKind::Text(TextField::CardNumber),
                ),
            ],
            2,
        )
    }

    mod focus {
        use super::*;

        #[test]
        fn starts_at_zero() {
            assert_eq!(make_form().focus(), 0);
        }

        #[test]
        fn next_wraps() {
            let mut form = make_form();
            for _ in 0..4 {
                form.focus_next();
            }
            assert_eq!(form.focus(), 0);
        }

        #[test]
        fn prev_wraps() {
            let mut form = make_form();
            form.focus_prev();
            assert_eq!(form.focus(), 3);
        }

        #[test]
        fn skips_disabled_rows() {
            let mut form = make_form();
            form.apply(&Effect::SetEnabled(Element::Color, false));
            form.focus_next();
            assert_eq!(form.focus(), 2);
        }

        #[test]
        fn skips_rows_in_hidden_panel() {
            let mut form = make_form();
            form.apply(&Effect::SetVisible(
                Element::PaymentPanel(PaymentMethod::CreditCard),
                false,
            ));
            form.set_focus(Element::Activity(0));
            form.focus_next();
            assert_eq!(form.focus(), 0);
        }

        #[test]
        fn focus_effect_moves_focus() {
            let mut form = make_form();
            form.apply(&Effect::Focus(Element::CardNumber));
            assert_eq!(form.focused_row().map(|r| r.element), Some(Element::CardNumber));
        }

        #[test]
        fn empty_form_is_noop() {
            let mut form = Form::new(vec![], 0);
            form.focus_next();
            form.focus_prev();
            assert_eq!(form.focus(), 0);
        }
    }

    mod effects {
        use super::*;

        #[test]
        fn color_option_flags() {
            let mut form = make_form();
            form.apply_all(&[
                Effect::SetVisible(Element::ColorOption(0), false),
                Effect::SetSelected(Element::ColorOption(1), true),
            ]);
            assert!(!form.color_visible(0));
            assert!(form.color_visible(1));
            assert_eq!(form.selected_color(), Some(1));
        }

        #[test]
        fn out_of_range_option_is_ignored() {
            let mut form = make_form();
            form.apply(&Effect::SetVisible(Element::ColorOption(9), false));
            assert!(!form.color_visible(9));
            assert!(form.color_visible(0));
        }

        #[test]
        fn total_text() {
            let mut form = make_form();
            form.apply(&Effect::SetText(Element::ActivitiesCost, "Total: $100".into()));
            assert_eq!(form.total(), "Total: $100");
        }

        #[test]
        fn markers_replace_each_other() {
            let mut form = make_form();
            form.apply(&Effect::MarkInvalid(Region::Name, "Name cannot be blank".into()));
            assert_eq!(form.invalid_count(), 1);
            form.apply(&Effect::MarkValid(Region::Name));
            assert_eq!(form.marker(Region::Name), Some(&Marker::Valid));
            assert_eq!(form.invalid_count(), 0);
        }

        #[test]
        fn highlight_sets_row_flag() {
            let mut form = make_form();
            form.apply(&Effect::SetHighlight(Element::Activity(0), true));
            assert!(form.rows()[2].highlighted);
        }

        #[test]
        fn hidden_row_is_not_shown() {
            let mut form = make_form();
            form.apply(&Effect::SetVisible(Element::Name, false));
            assert!(!form.is_shown(0));
            assert!(!form.is_shown(99));
        }
    }

    #[test]
    fn region_mapping() {
        assert_eq!(region_of(Element::ZipCode), Some(Region::Payment));
        assert_eq!(region_of(Element::Activity(4)), Some(Region::Activities));
        assert_eq!(region_of(Element::Design), None);
    }
}
