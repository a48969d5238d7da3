//! Status bar widget: one-line summary of the registration in progress.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::PaymentMethod;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// The running-total text, e.g. `Total: $300`.
    pub total: String,
    /// The selected payment method, if the select holds a known value.
    pub payment: Option<PaymentMethod>,
    /// Invalid regions after the last submit attempt; `None` before the first.
    pub invalid_regions: Option<usize>,
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// - Before any submit:   `Total: $300  Credit Card`
/// - After a failed one:  `Total: $300  Credit Card  2 fields need attention` (count in Red)
/// - All regions valid:   `Total: $300  Credit Card  Ready` (Ready in Green)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);
    let red = Style::default().fg(Color::Red);

    let mut spans: Vec<Span> = vec![Span::styled(ctx.total.clone(), cyan)];
    if let Some(method) = ctx.payment {
        spans.push(Span::styled(format!("  {}", method.label()), cyan));
    }

    match ctx.invalid_regions {
        None => {}
        Some(0) => spans.push(Span::styled("  Ready", green)),
        Some(1) => spans.push(Span::styled("  1 field needs attention", red)),
        Some(n) => spans.push(Span::styled(format!("  {n} fields need attention"), red)),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
