mod address_bar;
mod reconciler;
mod registry;
mod router;

// Public API of the navigation subsystem.
pub use address_bar::AddressBar;
pub use reconciler::{HashReconciler, ReconcileOutcome};
pub use registry::ViewRegistry;
pub use router::{Router, SwitchOutcome};
