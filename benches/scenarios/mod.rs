//! Scenario benchmarks.
//!
//! Whole generators under the load a module actually sees: geometry
//! changes arriving mid-cycle and pattern lookups every step.

mod drums;
mod terrain;

pub use drums::bench_drums;
pub use terrain::bench_terrain;
