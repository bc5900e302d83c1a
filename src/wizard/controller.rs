use tracing::debug;

use crate::form::FormState;

use super::{SectionDescriptor, SectionRegistry};

/// Tracks the current section and gates movement between sections.
///
/// States are the ordinals `1..=N`; the initial state is 1 and the terminal
/// state is N. `advance` consults the current section's predicate; `retreat`
/// never re-validates (revisiting a completed section does not erase it).
pub struct WizardController {
    registry: SectionRegistry,
    current: u8,
}

impl WizardController {
    pub fn new(registry: SectionRegistry) -> Self {
        debug_assert!(!registry.is_empty());
        Self {
            registry,
            current: 1,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn current_ordinal(&self) -> u8 {
        self.current
    }

    pub fn current_section(&self) -> &SectionDescriptor {
        self.registry
            .section(self.current)
            .expect("current ordinal is always within the registry")
    }

    pub fn at_start(&self) -> bool {
        self.current == 1
    }

    pub fn at_end(&self) -> bool {
        self.current == self.registry.len()
    }

    /// Whether the current section's predicate passes right now. Evaluated
    /// fresh on every call; never cached.
    pub fn can_advance(&self, state: &FormState) -> bool {
        (self.current_section().validate)(state)
    }

    /// Moves forward one section if the current one validates. Returns
    /// whether the ordinal changed.
    pub fn advance(&mut self, state: &FormState) -> bool {
        if !self.can_advance(state) {
            debug!(ordinal = self.current, "advance blocked by section predicate");
            return false;
        }
        if self.at_end() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Moves back one section unconditionally; a no-op at the first section.
    pub fn retreat(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jumps to an arbitrary ordinal (reviewer sidebar navigation). Returns
    /// false and stays put when the ordinal is out of bounds.
    pub fn select(&mut self, ordinal: u8) -> bool {
        if self.registry.section(ordinal).is_none() {
            return false;
        }
        self.current = ordinal;
        true
    }

    /// Completion percentage, always derived from the ordinal:
    /// `(current - 1) / (N - 1) * 100`, rounded for display.
    pub fn progress_percent(&self) -> u8 {
        let total = self.registry.len();
        if total <= 1 {
            return 100;
        }
        let ratio = f64::from(self.current - 1) / f64::from(total - 1);
        (ratio * 100.0).round() as u8
    }
}
