use std::fmt;

use thiserror::Error;

/// Which field of a version a parse error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Major,
    Minor,
    Patch,
    Rc,
    Beta,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Major => "major",
            ComponentKind::Minor => "minor",
            ComponentKind::Patch => "patch",
            ComponentKind::Rc => "rc",
            ComponentKind::Beta => "beta",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by the strict parser when text does not match
/// `MAJOR.MINOR.PATCH[-rcN][bM]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedVersionText {
    #[error("Missing '.' after {component} component in {text:?}")]
    MissingSeparator {
        text: String,
        component: ComponentKind,
    },

    #[error("Empty {component} component in {text:?}")]
    EmptyComponent {
        text: String,
        component: ComponentKind,
    },

    #[error("Invalid {component} component {segment:?} in {text:?}")]
    InvalidComponent {
        text: String,
        component: ComponentKind,
        segment: String,
    },

    #[error("{component} component {segment:?} in {text:?} does not fit in 64 bits")]
    ComponentOverflow {
        text: String,
        component: ComponentKind,
        segment: String,
    },
}

impl MalformedVersionText {
    /// The component the error was raised for
    pub fn component(&self) -> ComponentKind {
        match self {
            MalformedVersionText::MissingSeparator { component, .. }
            | MalformedVersionText::EmptyComponent { component, .. }
            | MalformedVersionText::InvalidComponent { component, .. }
            | MalformedVersionText::ComponentOverflow { component, .. } => *component,
        }
    }
}
