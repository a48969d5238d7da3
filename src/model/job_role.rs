/// An option of the job-role select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobRole {
    #[default]
    FullStackDeveloper,
    FrontEndDeveloper,
    BackEndDeveloper,
    Designer,
    Student,
    /// Sentinel: reveals the free-text role field.
    Other,
}

static ALL_ROLES: &[JobRole] = &[
    JobRole::FullStackDeveloper,
    JobRole::FrontEndDeveloper,
    JobRole::BackEndDeveloper,
    JobRole::Designer,
    JobRole::Student,
    JobRole::Other,
];

impl JobRole {
    /// Returns the select-option value.
    pub fn value(&self) -> &'static str {
        match self {
            JobRole::FullStackDeveloper => "full-stack js developer",
            JobRole::FrontEndDeveloper => "front-end developer",
            JobRole::BackEndDeveloper => "back-end developer",
            JobRole::Designer => "designer",
            JobRole::Student => "student",
            JobRole::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobRole::FullStackDeveloper => "Full Stack JavaScript Developer",
            JobRole::FrontEndDeveloper => "Front End Developer",
            JobRole::BackEndDeveloper => "Back End Developer",
            JobRole::Designer => "Designer",
            JobRole::Student => "Student",
            JobRole::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        ALL_ROLES.iter().copied().find(|r| r.value() == value)
    }

    /// Returns all roles in display order.
    pub fn all() -> &'static [JobRole] {
        ALL_ROLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_the_sentinel_value() {
        assert_eq!(JobRole::Other.value(), "other");
    }

    #[test]
    fn from_value_round_trips() {
        for role in JobRole::all() {
            assert_eq!(JobRole::from_value(role.value()), Some(*role));
        }
        assert_eq!(JobRole::from_value("astronaut"), None);
    }

    #[test]
    fn default_is_first_option() {
        assert_eq!(JobRole::default(), JobRole::all()[0]);
    }
}
