pub mod events;
pub mod signup;
