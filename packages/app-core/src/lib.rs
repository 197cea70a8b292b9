// RSO Event & Signup core
//
// Non-UI core of the campus application: the events domain (RSO event
// records backed by the hosted document store) and the signup domain
// (registration form validation and submission). Embedded by a UI shell;
// exposes no server surface of its own.

pub mod app;
pub mod config;
pub mod domains;
pub mod kernel;

pub use app::AppCore;
pub use config::*;
