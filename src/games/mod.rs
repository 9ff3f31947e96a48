//! Game implementations.

pub mod landung;
