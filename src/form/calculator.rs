//! Running total of the selected activities.

use tracing::warn;

use crate::model::Activity;

use super::effect::{Effect, Element};
use super::state::FormState;

/// Formats the total the way the cost node displays it.
pub fn total_label(total: u32) -> String {
    format!("Total: ${total}")
}

/// An activity checkbox and whether it is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectable {
    pub activity: Activity,
    pub checked: bool,
}

/// The activity checkboxes plus an incrementally maintained total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<Selectable>,
    total: u32,
}

impl SelectionSet {
    /// Creates a set with every activity unchecked.
    pub fn new(activities: &[Activity]) -> Self {
        Self {
            items: activities
                .iter()
                .map(|&activity| Selectable {
                    activity,
                    checked: false,
                })
                .collect(),
            total: 0,
        }
    }

    /// Applies a checkbox change and returns the new total.
    ///
    /// Returns `None` when `index` is unknown or the item is already in the
    /// requested state; the total is left untouched in both cases.
    pub fn toggle(&mut self, index: usize, checked: bool) -> Option<u32> {
        let item = self.items.get_mut(index)?;
        if item.checked == checked {
            return None;
        }
        item.checked = checked;
        // Only items counted in the total are ever subtracted.
        if checked {
            self.total += item.activity.cost;
        } else {
            self.total -= item.activity.cost;
        }
        Some(self.total)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Activities currently checked, in document order.
    pub fn checked(&self) -> impl Iterator<Item = &Activity> {
        self.items.iter().filter(|i| i.checked).map(|i| &i.activity)
    }

    pub fn items(&self) -> &[Selectable] {
        &self.items
    }
}

/// Handles an activity checkbox change.
pub(crate) fn activity_toggled(state: &mut FormState, index: usize, checked: bool) -> Vec<Effect> {
    match state.activities.toggle(index, checked) {
        Some(total) => vec![Effect::SetText(Element::ActivitiesCost, total_label(total))],
        None => {
            warn!(index, checked, "ignoring activity toggle that changes nothing");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn priced(costs: &[u32]) -> Vec<Activity> {
        costs
            .iter()
            .map(|&cost| Activity {
                name: "item",
                label: "Item",
                schedule: None,
                cost,
            })
            .collect()
    }

    fn recomputed(set: &SelectionSet) -> u32 {
        set.checked().map(|a| a.cost).sum()
    }

    #[test]
    fn label_format() {
        insta::assert_snapshot!(total_label(0), @"Total: $0");
        insta::assert_snapshot!(total_label(300), @"Total: $300");
    }

    #[test]
    fn check_check_uncheck_sequence() {
        let mut state = FormState {
            activities: SelectionSet::new(&priced(&[5, 10])),
            ..FormState::default()
        };
        assert_eq!(
            activity_toggled(&mut state, 0, true),
            vec![Effect::SetText(Element::ActivitiesCost, "Total: $5".into())]
        );
        assert_eq!(
            activity_toggled(&mut state, 1, true),
            vec![Effect::SetText(Element::ActivitiesCost, "Total: $15".into())]
        );
        assert_eq!(
            activity_toggled(&mut state, 0, false),
            vec![Effect::SetText(Element::ActivitiesCost, "Total: $10".into())]
        );
        assert_eq!(state.activities.total(), 10);
    }

    #[test]
    fn redundant_toggle_is_ignored() {
        let mut set = SelectionSet::new(&priced(&[5]));
        assert_eq!(set.toggle(0, false), None);
        assert_eq!(set.toggle(0, true), Some(5));
        assert_eq!(set.toggle(0, true), None);
        assert_eq!(set.total(), 5);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut state = FormState::default();
        assert!(activity_toggled(&mut state, 99, true).is_empty());
        assert_eq!(state.activities.total(), 0);
    }

    #[test]
    fn catalog_totals() {
        let mut set = SelectionSet::new(Activity::all());
        set.toggle(0, true);
        set.toggle(3, true);
        assert_eq!(set.total(), 300);
        assert_eq!(set.checked_count(), 2);
        let names: Vec<&str> = set.checked().map(|a| a.name).collect();
        assert_eq!(names, vec!["all", "express"]);
    }

    #[quickcheck]
    fn incremental_total_matches_recomputation_at_every_step(
        costs: Vec<u16>,
        toggles: Vec<(u8, bool)>,
    ) -> bool {
        if costs.is_empty() {
            return true;
        }
        let costs: Vec<u32> = costs.into_iter().map(u32::from).collect();
        let mut set = SelectionSet::new(&priced(&costs));
        toggles.into_iter().all(|(index, checked)| {
            set.toggle(index as usize % costs.len(), checked);
            set.total() == recomputed(&set)
        })
    }

    #[quickcheck]
    fn unchecking_everything_returns_to_zero(toggles: Vec<u8>) -> bool {
        let mut set = SelectionSet::new(Activity::all());
        let len = Activity::all().len();
        for index in &toggles {
            set.toggle(*index as usize % len, true);
        }
        for index in 0..len {
            set.toggle(index, false);
        }
        set.total() == 0
    }
}
