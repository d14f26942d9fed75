//! Application layer of the DCA console.
//!
//! Login and dashboard controllers, the fallback datasets, navigation and
//! the presentation view models. Storage and HTTP are injected as the
//! `dca-core` traits.

pub mod dashboard;
pub mod load_state;
pub mod login;
pub mod mock_data;
pub mod presentation;
pub mod router;

pub use dashboard::{
    AdminBoard, DashboardController, DashboardKind, DashboardState, DcaBoard, MountOutcome,
};
pub use load_state::LoadState;
pub use login::{DevShortcut, LoginController, LoginState};
pub use mock_data::{mock_admin_cases, mock_assigned_cases};
pub use router::{Console, Opened, Screen};
