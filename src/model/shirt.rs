/// T-shirt design. Its value doubles as the theme tag carried by matching colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Design {
    JsPuns,
    HeartJs,
}

static ALL_DESIGNS: &[Design] = &[Design::JsPuns, Design::HeartJs];

impl Design {
    pub fn value(&self) -> &'static str {
        match self {
            Design::JsPuns => "js puns",
            Design::HeartJs => "heart js",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Design::JsPuns => "Theme - JS Puns",
            Design::HeartJs => "Theme - I \u{2665} JS",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        ALL_DESIGNS.iter().copied().find(|d| d.value() == value)
    }

    pub fn all() -> &'static [Design] {
        ALL_DESIGNS
    }
}

/// One option of the color select, tagged with the design theme it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorOption {
    pub value: &'static str,
    pub label: &'static str,
    pub theme: &'static str,
}

static COLORS: &[ColorOption] = &[
    ColorOption {
        value: "cornflowerblue",
        label: "Cornflower Blue",
        theme: "js puns",
    },
    ColorOption {
        value: "darkslategrey",
        label: "Dark Slate Grey",
        theme: "js puns",
    },
    ColorOption {
        value: "gold",
        label: "Gold",
        theme: "js puns",
    },
    ColorOption {
        value: "tomato",
        label: "Tomato",
        theme: "heart js",
    },
    ColorOption {
        value: "steelblue",
        label: "Steel Blue",
        theme: "heart js",
    },
    ColorOption {
        value: "dimgrey",
        label: "Dim Grey",
        theme: "heart js",
    },
];

impl ColorOption {
    /// Returns every color option in document order.
    pub fn all() -> &'static [ColorOption] {
        COLORS
    }
}
