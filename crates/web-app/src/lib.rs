#![warn(clippy::pedantic)]

pub mod log;
pub mod schedule;
pub mod workout;
