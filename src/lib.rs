#![doc(test(attr(deny(warnings))))]

//! Admission Core drives a multi-step university admission form: ordered
//! section navigation, shared form state, per-section validity gates, and the
//! reviewer panel built on top of the submitted applications.

pub mod attachment;
pub mod catalog;
pub mod cli;
pub mod errors;
pub mod form;
pub mod review;
pub mod session;
pub mod storage;
pub mod validation;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("admission_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Admission Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
