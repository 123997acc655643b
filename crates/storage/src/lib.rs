#![warn(clippy::pedantic)]

pub mod model;
pub mod rest;
