//! Domain layer - Core sniffing logic
//!
//! This module contains the domain entities, repository traits,
//! and domain services. Everything here is pure and performs no I/O.

pub mod entities;
pub mod repositories;
pub mod services;
