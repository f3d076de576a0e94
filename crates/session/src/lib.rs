//! Client-side session for Dija Connect: who is signed in, as which role,
//! and where the router should go after login and logout.

pub mod authenticator;
pub mod config;
pub mod controller;
pub mod notice;

pub use authenticator::{Authenticator, SimulatedAuthenticator};
pub use controller::{LoginOutcome, SessionController, SessionState};
pub use notice::{LogNotifier, Notice, NoticeLevel, Notifier, RecordingNotifier};
