/// A conference activity an attendee can register for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Activity {
    /// Checkbox name, used in the submitted registration.
    pub name: &'static str,
    pub label: &'static str,
    /// Day and time slot; `None` for the main conference.
    pub schedule: Option<&'static str>,
    /// Cost in whole dollars.
    pub cost: u32,
}

static ACTIVITIES: &[Activity] = &[
    Activity {
        name: "all",
        label: "Main Conference",
        schedule: None,
        cost: 200,
    },
    Activity {
        name: "js-frameworks",
        label: "JavaScript Frameworks Workshop",
        schedule: Some("Tuesday 9am-12pm"),
        cost: 100,
    },
    Activity {
        name: "js-libs",
        label: "JavaScript Libraries Workshop",
        schedule: Some("Tuesday 1pm-4pm"),
        cost: 100,
    },
    Activity {
        name: "express",
        label: "Express Workshop",
        schedule: Some("Tuesday 9am-12pm"),
        cost: 100,
    },
    Activity {
        name: "node",
        label: "Node.js Workshop",
        schedule: Some("Tuesday 1pm-4pm"),
        cost: 100,
    },
    Activity {
        name: "build-tools",
        label: "Build tools Workshop",
        schedule: Some("Wednesday 9am-12pm"),
        cost: 100,
    },
    Activity {
        name: "npm",
        label: "npm Workshop",
        schedule: Some("Wednesday 1pm-4pm"),
        cost: 100,
    },
];

impl Activity {
    /// Returns every activity in document order.
    pub fn all() -> &'static [Activity] {
        ACTIVITIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_conference_costs_200() {
        let main = Activity::all()[0];
        assert_eq!(main.name, "all");
        assert_eq!(main.cost, 200);
        assert_eq!(main.schedule, None);
    }

    #[test]
    fn workshops_cost_100() {
        assert!(Activity::all()[1..].iter().all(|a| a.cost == 100));
        assert_eq!(Activity::all().len(), 7);
    }
}
