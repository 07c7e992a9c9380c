//! Operating system abstraction layer
//!
//! Platform-specific access to kernel entropy, selected at compile time.
//! Each submodule exposes the same `sys_random` function so that
//! `rng::SystemRng` stays portable.
//!
//! Failures are returned instead of aborting: the caller treats them as
//! transient and applies its retry budget.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
