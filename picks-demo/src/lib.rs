//! Demo harness for the Personalized Picks carousel.
//!
//! Drives a [`PersonalizedPicks`](picks_core::PersonalizedPicks) from a
//! command script or an interactive menu and renders it as text after every
//! step.

pub mod command;
pub mod interactive;
pub mod render;
pub mod session;

pub use command::{CommandError, DemoCommand, parse_script};
pub use render::TextView;
pub use session::{DemoSession, Outcome};
