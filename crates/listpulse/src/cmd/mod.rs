//! Command implementations for the listpulse CLI

pub mod collect;
