//! Organizational chart composition.
//!
//! This crate models a hierarchy of departments and employees that can be
//! rendered uniformly: every node implements [`display::Displayable`], and a
//! department renders its own header before delegating to each child in
//! insertion order.

#![warn(missing_docs)]

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod sample;
