use crate::core::{WorldConfig, WorldError};
use crate::grid::GridLocation;
use crate::world::World;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<WorldError> for PyErr {
    fn from(err: WorldError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

#[pyclass]
pub struct PyWorld {
    world: World,
}

#[pymethods]
impl PyWorld {
    /// Random world from a JSON config; missing fields take their defaults.
    #[new]
    #[pyo3(signature = (config_json = None))]
    pub fn new(config_json: Option<String>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => WorldConfig::from_json(&json)?,
            None => WorldConfig::default(),
        };
        Ok(Self {
            world: World::new(config)?,
        })
    }

    /// Advance the simulation by one generation
    pub fn advance_step(&mut self) {
        self.world.advance_step();
    }

    #[getter]
    pub fn generation(&self) -> u64 {
        self.world.generation()
    }

    /// `(agent, id)` of the tile at a location
    pub fn tile_at(&self, row: i32, col: i32) -> Option<(String, u32)> {
        self.world
            .tile_at(GridLocation::new(row, col))
            .map(|t| (t.agent.to_string(), t.id))
    }

    /// Diagnostics of the tile carrying `id`, as JSON
    pub fn describe_tile(&self, id: u32) -> Option<String> {
        self.world.describe_tile(id).map(|r| r.to_json())
    }

    pub fn snapshot_json(&self) -> String {
        self.world.snapshot().to_json()
    }

    pub fn last_step_json(&self) -> Option<String> {
        self.world
            .last_step()
            .and_then(|s| serde_json::to_string(s).ok())
    }

    pub fn __repr__(&self) -> String {
        let cfg = self.world.config();
        format!(
            "World({}x{}, {:?}, generation={})",
            cfg.rows,
            cfg.cols,
            cfg.topology,
            self.world.generation()
        )
    }
}
