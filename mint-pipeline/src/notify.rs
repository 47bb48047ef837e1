//! Notifier Seam
//!
//! User-facing notification surface for the pipeline - what the front-end
//! renders as toasts and progress labels. Notifications are fire-and-forget;
//! the pipeline never blocks on them.

use tracing::{error, info};

use mint_core::MintStage;

/// Notification sink for a mint flow
pub trait Notifier: Send + Sync {
    /// A mint attempt finished successfully
    fn notify_success(&self, title: &str, detail: &str);

    /// Something the user must act on went wrong
    fn notify_error(&self, title: &str, detail: &str);

    /// A precondition is missing (e.g. nothing drawn yet)
    fn notify_prompt(&self, message: &str);

    /// The attempt moved to a new stage; `label` is the progress text
    fn stage_changed(&self, stage: MintStage, label: &str);
}

/// Notifier that logs structured events through `tracing`
///
/// The default sink for headless runs; front-ends supply their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_success(&self, title: &str, detail: &str) {
        info!(title, detail, "mint notification");
    }

    fn notify_error(&self, title: &str, detail: &str) {
        error!(title, detail, "mint notification");
    }

    fn notify_prompt(&self, message: &str) {
        info!(message, "mint prompt");
    }

    fn stage_changed(&self, stage: MintStage, label: &str) {
        info!(stage = %stage, label, "mint stage changed");
    }
}
