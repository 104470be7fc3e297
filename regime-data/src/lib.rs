//! Slab-schedule data loading for the regime comparison engine.
//!
//! Slab rates change between assessment years; this crate turns CSV rate
//! tables into the [`TaxSlab`](regime_core::TaxSlab) schedules and
//! [`RegimePolicy`](regime_core::RegimePolicy) values the engine is built
//! from, so supporting a new year never touches calculator code.

mod loader;

pub use loader::{SlabScheduleError, SlabScheduleLoader, SlabScheduleRecord};
