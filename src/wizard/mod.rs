//! Ordered-section navigation: the fixed registries and the controller that
//! gates movement between sections.

mod controller;
mod registry;

pub use controller::WizardController;
pub use registry::{SectionDescriptor, SectionRegistry, SectionValidator};
