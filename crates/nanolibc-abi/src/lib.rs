// All extern "C" exports accept raw values from C callers; the string and
// memory entry points carry individual safety contracts below.
#![allow(clippy::missing_safety_doc)]
//! # nanolibc-abi
//!
//! ABI-compatible extern "C" boundary layer for nanolibc.
//!
//! This crate produces a `cdylib` that exposes the primitive-library
//! symbols via `extern "C"`, matching the conventional `<ctype.h>` /
//! `<stdlib.h>` / `<string.h>` signatures bit-for-bit so a test harness
//! with no platform libc can link against it directly. Each entry point
//! translates raw pointers into slices and delegates to the safe
//! implementations in `nanolibc-core`.
//!
//! # Architecture
//!
//! ```text
//! C caller -> ABI entry (this crate) -> slice translation -> core impl -> return
//! ```
//!
//! Exported symbol visibility for the `cdylib` is pinned by the linker
//! version script in `version_scripts/nanolibc.map`.

// Gated behind cfg(not(test)) because these modules export #[no_mangle]
// symbols (memset, strlen, atoi, ...) that would shadow the host libc in
// the test binary, causing infinite recursion or deadlock.
#[cfg(not(test))]
pub mod stdlib_abi;
#[cfg(not(test))]
pub mod string_abi;

// Pure compute, no pointer arguments — safe to compile in test mode.
pub mod ctype_abi;

pub mod util;
