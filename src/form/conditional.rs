//! Dependent-field rules: the "other" job-role box and the design-filtered color list.

use tracing::{debug, warn};

use crate::model::{ColorOption, JobRole};

use super::effect::{Effect, Element};
use super::state::FormState;

/// Desired presentation of one color option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorProjection {
    pub visible: bool,
    pub selected: bool,
}

/// Whether the free-text role box is shown for a job-role value.
pub fn shows_other_job_role(job_role: &str) -> bool {
    job_role == JobRole::Other.value()
}

/// Computes which color options are shown and selected for `design`.
///
/// Options tagged with `design` are shown and the first of them is selected;
/// every other option is hidden and deselected.
pub fn project_colors(options: &[ColorOption], design: &str) -> Vec<ColorProjection> {
    let first = options.iter().position(|o| o.theme == design);
    options
        .iter()
        .enumerate()
        .map(|(i, option)| ColorProjection {
            visible: option.theme == design,
            selected: first == Some(i),
        })
        .collect()
}

pub(crate) fn job_role_changed(state: &mut FormState, value: String) -> Vec<Effect> {
    let visible = shows_other_job_role(&value);
    state.job_role.value = value;
    state.other_job_role.visible = visible;
    vec![Effect::SetVisible(Element::OtherJobRole, visible)]
}

pub(crate) fn design_changed(state: &mut FormState, value: String) -> Vec<Effect> {
    let enabled = !value.is_empty();
    let options: Vec<ColorOption> = state.color_options.iter().map(|c| c.option).collect();
    let projection = project_colors(&options, &value);

    let mut effects = Vec::with_capacity(1 + 2 * projection.len());
    state.color.enabled = enabled;
    effects.push(Effect::SetEnabled(Element::Color, enabled));

    for (i, (choice, wanted)) in state.color_options.iter_mut().zip(&projection).enumerate() {
        choice.visible = wanted.visible;
        choice.selected = wanted.selected;
        effects.push(Effect::SetVisible(Element::ColorOption(i), wanted.visible));
        effects.push(Effect::SetSelected(Element::ColorOption(i), wanted.selected));
    }

    state.color.value = state
        .selected_color()
        .map(|c| c.value.to_string())
        .unwrap_or_default();
    debug!(design = %value, color = %state.color.value, "color options filtered");
    state.design.value = value;
    effects
}

pub(crate) fn color_changed(state: &mut FormState, value: String) -> Vec<Effect> {
    let target = state
        .color_options
        .iter()
        .position(|c| c.visible && c.option.value == value);
    let Some(target) = target.filter(|_| state.color.enabled) else {
        warn!(color = %value, "ignoring pick of unavailable color");
        return Vec::new();
    };

    let mut effects = Vec::new();
    for (i, choice) in state.color_options.iter_mut().enumerate() {
        let selected = i == target;
        if choice.selected != selected {
            choice.selected = selected;
            effects.push(Effect::SetSelected(Element::ColorOption(i), selected));
        }
    }
    state.color.value = value;
    effects
}
