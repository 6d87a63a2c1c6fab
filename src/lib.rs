//! Segregation Core - Schelling-style tile-swap simulation engine
//!
//! Agents of different types live on a bounded grid. Each step, an agent whose
//! neighborhood suits it poorly may swap into an adjacent empty tile that
//! suits it better; contested tiles go to the least satisfied contender.
//!
//! Rendering, scheduling and persistence are left to the caller, which drives
//! the engine through `World::advance_step` and the read accessors.

pub mod core;
pub mod grid;
pub mod tiles;
pub mod utils;
pub mod world;

#[cfg(feature = "python")]
pub mod py_api;

pub use crate::core::{TopologyKind, TypeWeight, WorldConfig, WorldError, WorldResult};
pub use grid::{GridBounds, GridLocation, GridSystem};
pub use tiles::{AgentType, RandomTypeGenerator, Tile, TileId, TileStore};
pub use utils::{BenchmarkReport, StepBenchmark};
pub use world::{StepSummary, TileReport, World, WorldSnapshot};

/// Initialize tracing for the library. Later calls are ignored.
pub fn setup_logging(level: Option<String>) {
    let filter = level.unwrap_or_else(|| "info".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;

    #[pyfunction]
    #[pyo3(name = "setup_logging", signature = (level = None))]
    fn py_setup_logging(level: Option<String>) {
        super::setup_logging(level);
    }

    /// Python module initialization
    #[pymodule]
    fn segregation_core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<crate::py_api::PyWorld>()?;
        m.add_function(wrap_pyfunction!(py_setup_logging, m)?)?;
        Ok(())
    }
}
