//! Screen state and behavior, independent of how screens are drawn.
//!
//! Each screen owns its state exclusively and takes `&mut self` for
//! actions, so a request in flight blocks further actions on that screen.
//! `Shell` wires the screens into the Login → Home → Editor stack.

pub mod editor;
pub mod home;
pub mod login;
pub mod navigation;
pub mod shell;

pub use editor::{EditorScreen, SubmitError};
pub use home::{HomeScreen, HomeView};
pub use login::{LoginError, LoginScreen};
pub use navigation::{EditorParams, Navigator, Route};
pub use shell::Shell;
