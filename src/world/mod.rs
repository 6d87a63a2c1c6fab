//! Segregation World
//!
//! Composes a grid topology, the tile store, and the weighted type generator,
//! and advances the simulation one step at a time.
//!
//! A step runs in two phases. Every occupied tile first proposes a move against
//! the pre-step grid; proposals are then reduced by `conflict::resolve` and the
//! surviving moves are committed as `(type, id)` swaps. No tile observes another
//! tile's move within the same step.

pub mod conflict;
pub mod desirability;
pub mod report;


use crate::core::{WorldConfig, WorldResult};
use crate::grid::{self, GridBounds, GridLocation, GridSystem};
use crate::tiles::{RandomTypeGenerator, Tile, TileId, TileStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{debug, info};

pub use conflict::{Move, Proposal, Resolution};
pub use desirability::Perspective;
pub use report::{MoveOption, StepSummary, TileReport, WorldSnapshot};

pub struct World {
    config: WorldConfig,
    grid: Box<dyn GridSystem>,
    tiles: TileStore,
    generator: RandomTypeGenerator,
    generation: u64,
    last_step: Option<StepSummary>,
}

impl World {
    /// Random world: every valid location gets a type drawn from the weight table.
    pub fn new(config: WorldConfig) -> WorldResult<Self> {
        config.validate()?;
        let generator = RandomTypeGenerator::new(&config.weights)?;
        let bounds = GridBounds::new(config.rows, config.cols, config.centered);
        let grid = grid::build(config.topology, bounds);

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let tiles: Vec<Tile> = grid
            .indices()
            .into_iter()
            .enumerate()
            .map(|(i, loc)| Tile::new(generator.sample(&mut rng), loc, i as TileId))
            .collect();

        Self::assemble(config, grid, tiles, generator)
    }

    /// World with an explicit layout; no randomness is involved.
    pub fn with_tiles(config: WorldConfig, tiles: Vec<Tile>) -> WorldResult<Self> {
        config.validate()?;
        let generator = RandomTypeGenerator::new(&config.weights)?;
        let bounds = GridBounds::new(config.rows, config.cols, config.centered);
        let grid = grid::build(config.topology, bounds);
        Self::assemble(config, grid, tiles, generator)
    }

    fn assemble(
        config: WorldConfig,
        grid: Box<dyn GridSystem>,
        tiles: Vec<Tile>,
        generator: RandomTypeGenerator,
    ) -> WorldResult<Self> {
        let tiles = TileStore::new(tiles, grid.bounds())?;
        info!(
            "🌐 [World] Initialized {}x{} (centered={}, topology={:?}) with {} tiles",
            config.rows,
            config.cols,
            config.centered,
            config.topology,
            tiles.len()
        );
        Ok(World {
            config,
            grid,
            tiles,
            generator,
            generation: 0,
            last_step: None,
        })
    }

    /// Advance the simulation by one generation.
    pub fn advance_step(&mut self) {
        let proposals = self.collect_proposals();
        let resolution = conflict::resolve(&proposals);

        for mv in &resolution.moves {
            self.tiles.swap(mv.origin, mv.destination);
        }
        self.generation += 1;

        let summary = StepSummary {
            generation: self.generation,
            proposals: proposals.len(),
            contested: resolution.contested,
            dropped: resolution.dropped,
            moves: resolution.moves.len(),
        };
        debug!(
            "[World] Step {}: {} proposals, {} contested, {} dropped, {} moves",
            summary.generation,
            summary.proposals,
            summary.contested,
            summary.dropped,
            summary.moves
        );
        self.last_step = Some(summary);
    }

    /// Phase one: read-only, every occupied tile against the current grid.
    fn collect_proposals(&self) -> Vec<Proposal> {
        if self.config.parallel_proposals {
            let occupied: Vec<&Tile> = self.tiles.iter().filter(|t| !t.is_empty()).collect();
            occupied
                .par_iter()
                .filter_map(|t| self.proposal_for(t))
                .collect()
        } else {
            self.tiles
                .iter()
                .filter(|t| !t.is_empty())
                .filter_map(|t| self.proposal_for(t))
                .collect()
        }
    }

    pub fn tile_at(&self, loc: GridLocation) -> Option<&Tile> {
        self.tiles.tile_at(loc)
    }

    pub fn tile_by_id(&self, id: TileId) -> Option<&Tile> {
        self.tiles.tile_by_id(id)
    }

    /// Existing tiles around `tile`, in direction order.
    pub fn neighbors_of(&self, tile: &Tile) -> Vec<&Tile> {
        self.grid
            .neighbors(tile.position)
            .into_iter()
            .filter_map(|loc| self.tiles.tile_at(loc))
            .collect()
    }

    /// Diagnostics for the tile currently carrying `id`.
    pub fn describe_tile(&self, id: TileId) -> Option<TileReport> {
        let tile = self.tile_by_id(id)?;
        let (neighbors, options) = if tile.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            let neighbors = self.neighbors_of(tile).iter().map(|n| n.id).collect();
            let options = self
                .desirability_matrix(tile)
                .into_iter()
                .map(|(n, score)| MoveOption {
                    id: n.id,
                    position: n.position,
                    score,
                })
                .collect();
            (neighbors, options)
        };
        Some(TileReport {
            id: tile.id,
            agent: tile.agent,
            position: tile.position,
            self_desirability: self.self_desirability(tile),
            neighbors,
            options,
        })
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            generation: self.generation,
            tiles: self.tiles.iter().copied().collect(),
        }
    }

    /// Row-major.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_step(&self) -> Option<&StepSummary> {
        self.last_step.as_ref()
    }

    pub fn grid(&self) -> &dyn GridSystem {
        self.grid.as_ref()
    }

    pub fn generator(&self) -> &RandomTypeGenerator {
        &self.generator
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TopologyKind, TypeWeight, WorldError};
    use crate::tiles::AgentType::{self, Blue as B, Empty as E, Green as G};

    fn row_world(types: &[AgentType]) -> World {
        let tiles = types
            .iter()
            .enumerate()
            .map(|(i, &t)| Tile::new(t, GridLocation::new(0, i as i32), i as TileId))
            .collect();
        let config = WorldConfig::new(1, types.len() as i32, false, WorldConfig::default().weights);
        World::with_tiles(config, tiles).unwrap()
    }

    fn types(w: &World) -> Vec<AgentType> {
        w.snapshot().layout()
    }

    #[test]
    fn symmetric_conflict_moves_nobody() {
        let mut w = row_world(&[G, E, G]);
        w.advance_step();
        assert_eq!(types(&w), vec![G, E, G]);
        let step = w.last_step().unwrap();
        assert_eq!(step.proposals, 2);
        assert_eq!(step.contested, 1);
        assert_eq!(step.dropped, 2);
        assert_eq!(step.moves, 0);
        assert_eq!(w.tile_by_id(0).unwrap().position, GridLocation::new(0, 0));
    }

    #[test]
    fn least_satisfied_proposer_takes_the_spot() {
        // id 1 (G next to B) scores -0.25 at home, id 3 scores 0.5; both want (0,2).
        let mut w = row_world(&[B, G, E, G]);
        w.advance_step();
        assert_eq!(types(&w), vec![B, E, G, G]);
        assert_eq!(w.tile_by_id(1).unwrap().position, GridLocation::new(0, 2));
        assert_eq!(w.tile_by_id(2).unwrap().position, GridLocation::new(0, 1));
        assert_eq!(w.last_step().unwrap().moves, 1);
        assert_eq!(w.generation(), 1);
    }

    #[test]
    fn equilibrium_is_a_fixed_point() {
        let mut w = row_world(&[B, G, E, G]);
        w.advance_step();
        let settled = w.snapshot();
        w.advance_step();
        assert!(w.last_step().unwrap().is_equilibrium());
        assert_eq!(w.snapshot().tiles, settled.tiles);
        assert_eq!(w.snapshot().layout(), settled.layout());
        w.advance_step();
        assert_eq!(w.snapshot().ids(), settled.ids());
        assert_eq!(w.generation(), 3);
    }

    #[test]
    fn explicit_layouts_replay_identically() {
        let layout = [G, E, B, E, G, G, B, E, E, B, G, E];
        let build = || {
            let tiles = layout
                .iter()
                .enumerate()
                .map(|(i, &t)| Tile::new(t, GridLocation::new(i as i32 / 4, i as i32 % 4), i as TileId))
                .collect();
            World::with_tiles(WorldConfig::new(3, 4, false, WorldConfig::default().weights), tiles).unwrap()
        };
        let mut a = build();
        let mut b = build();
        for _ in 0..10 {
            a.advance_step();
            b.advance_step();
            assert_eq!(a.snapshot().layout(), b.snapshot().layout());
            assert_eq!(a.snapshot().ids(), b.snapshot().ids());
        }
    }

    #[test]
    fn seeded_worlds_are_reproducible() {
        let cfg = WorldConfig::new(6, 6, true, WorldConfig::default().weights).with_seed(11);
        let a = World::new(cfg.clone()).unwrap();
        let b = World::new(cfg).unwrap();
        assert_eq!(a.tile_count(), 13 * 13);
        assert_eq!(a.snapshot().layout(), b.snapshot().layout());
        let ids: Vec<_> = a.tiles().map(|t| t.id).collect();
        assert_eq!(ids, (0..169).collect::<Vec<TileId>>());
    }

    #[test]
    fn parallel_and_sequential_proposals_agree() {
        for kind in [TopologyKind::Octagonal, TopologyKind::HorizontalHex] {
            let cfg = WorldConfig::new(15, 15, false, WorldConfig::default().weights)
                .with_topology(kind)
                .with_seed(5);
            let mut seq = World::new(cfg.clone()).unwrap();
            let mut par = World::new(cfg.with_parallel_proposals(true)).unwrap();
            for _ in 0..8 {
                assert_eq!(seq.collect_proposals(), par.collect_proposals());
                seq.advance_step();
                par.advance_step();
                assert_eq!(seq.snapshot().ids(), par.snapshot().ids());
            }
        }
    }

    #[test]
    fn no_tile_proposes_to_itself() {
        let cfg = WorldConfig::new(10, 10, false, WorldConfig::default().weights).with_seed(2);
        let w = World::new(cfg).unwrap();
        for p in w.collect_proposals() {
            assert_ne!(p.origin, p.destination);
            assert!(w.tile_at(p.destination).unwrap().is_empty());
        }
    }

    #[test]
    fn scores_stay_within_unit_range() {
        for kind in [TopologyKind::Octagonal, TopologyKind::HorizontalHex] {
            let cfg = WorldConfig::new(3, 4, true, WorldConfig::default().weights)
                .with_topology(kind)
                .with_seed(99);
            let w = World::new(cfg).unwrap();
            for t in w.tiles() {
                let s = w.self_desirability(t);
                assert!((-1.0..=1.0).contains(&s), "{kind:?} self {s}");
                for (_, score) in w.desirability_matrix(t) {
                    assert!((-1.0..=1.0).contains(&score), "{kind:?} dest {score}");
                }
            }
        }
    }

    #[test]
    fn describe_tile_reports_neighbors_and_options() {
        let w = row_world(&[G, E, G]);
        let report = w.describe_tile(0).unwrap();
        assert_eq!(report.agent, G);
        assert_eq!(report.self_desirability, 0.5);
        assert_eq!(report.neighbors, vec![1]);
        assert_eq!(report.options.len(), 1);
        assert_eq!(report.options[0].score, 0.75);
        assert_eq!(report.best_option().unwrap().position, GridLocation::new(0, 1));
        assert!(report.to_json().contains("\"self_desirability\":0.5"));

        let empty = w.describe_tile(1).unwrap();
        assert!(empty.neighbors.is_empty());
        assert!(empty.options.is_empty());
        assert_eq!(empty.self_desirability, 0.0);

        assert!(w.describe_tile(42).is_none());
    }

    #[test]
    fn neighbors_of_resolves_tiles() {
        let w = row_world(&[G, E, B]);
        let mid = *w.tile_at(GridLocation::new(0, 1)).unwrap();
        let ids: Vec<_> = w.neighbors_of(&mid).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 0]);
    }

    #[test]
    fn construction_errors_surface() {
        let bad = WorldConfig::new(0, 3, false, WorldConfig::default().weights);
        assert!(matches!(World::new(bad), Err(WorldError::InvalidDimensions { .. })));

        let no_weights = WorldConfig::new(2, 2, false, vec![]);
        assert!(matches!(World::new(no_weights), Err(WorldError::EmptyWeightTable)));

        let zero = WorldConfig::new(2, 2, false, vec![TypeWeight::new(G, 0)]);
        assert!(matches!(World::new(zero), Err(WorldError::ZeroTotalWeight)));

        let cfg = WorldConfig::new(1, 2, false, WorldConfig::default().weights);
        let short = vec![Tile::new(G, GridLocation::new(0, 0), 0)];
        assert!(matches!(
            World::with_tiles(cfg, short),
            Err(WorldError::TileCountMismatch { .. })
        ));
    }
}
