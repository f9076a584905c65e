//! SDR device configuration
//!
//! Picks and persists the input (SDR hardware) and output (audio) devices of a
//! software radio receiver. Saved settings are reconciled against the devices
//! present right now, with a manual fallback for inputs and the system default
//! for outputs.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `ports/` - Trait definitions for the registry, audio, settings and view
//! - `ioconfig/` - Reconciliation logic (labels, matching, sample rates, session)
//! - `adapters/` - Implementations of ports (cpal, rtl_test, JSON settings, mocks)
//! - `cli` - The `sdrconf` command-line driver

// Core domain (pure, no I/O)
pub mod domain;
pub mod ioconfig;
pub mod ports;

// Adapters (external I/O)
pub mod adapters;

// Command-line driver
pub mod cli;
