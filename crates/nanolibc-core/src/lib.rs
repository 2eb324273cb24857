//! # nanolibc-core
//!
//! Safe Rust implementations of the nanolibc primitive routines.
//!
//! This crate is the semantic engine behind the `extern "C"` surface in
//! `nanolibc-abi`: character classification, numeric conversion, and the
//! string/memory family, all expressed over byte slices. A NUL byte
//! (`0x00`) marks the logical end of a string; explicit length bounds are
//! slice bounds. No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod ctype;
pub mod stdlib;
pub mod string;
