//! `<stdlib.h>` subset: numeric conversion.

pub mod conversion;

pub use conversion::{ConversionStatus, atoi, atoi_impl};
