use crate::world::World;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of driving a world for a number of steps
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkReport {
    pub steps_run: u64,
    pub total_moves: usize,
    pub moves_per_step: Vec<usize>,
    pub elapsed: Duration,
    /// Generation of the first step that committed no moves.
    pub settled_at: Option<u64>,
}

impl BenchmarkReport {
    pub fn mean_step_time(&self) -> Duration {
        if self.steps_run == 0 {
            Duration::ZERO
        } else {
            self.elapsed / self.steps_run as u32
        }
    }
}

/// Benchmark - times `advance_step` and tracks movement
pub struct StepBenchmark {
    /// Keep stepping after equilibrium is reached.
    pub run_past_equilibrium: bool,
}

impl StepBenchmark {
    pub fn new() -> Self {
        StepBenchmark {
            run_past_equilibrium: false,
        }
    }

    pub fn run(&self, world: &mut World, steps: u64) -> BenchmarkReport {
        info!(
            "📊 Running step benchmark: up to {} steps on {} tiles",
            steps,
            world.tile_count()
        );

        let mut moves_per_step = Vec::new();
        let mut settled_at = None;
        let start = Instant::now();

        for _ in 0..steps {
            world.advance_step();
            let Some(step) = world.last_step() else { break };
            moves_per_step.push(step.moves);
            if step.is_equilibrium() && settled_at.is_none() {
                settled_at = Some(step.generation);
                if !self.run_past_equilibrium {
                    break;
                }
            }
        }

        let elapsed = start.elapsed();
        let report = BenchmarkReport {
            steps_run: moves_per_step.len() as u64,
            total_moves: moves_per_step.iter().sum(),
            moves_per_step,
            elapsed,
            settled_at,
        };

        match report.settled_at {
            Some(generation) => info!(
                "📈 Benchmark complete: settled at generation {} ({} moves, {:?}/step)",
                generation,
                report.total_moves,
                report.mean_step_time()
            ),
            None => info!(
                "📈 Benchmark complete: {} steps, {} moves, {:?}/step, not settled",
                report.steps_run,
                report.total_moves,
                report.mean_step_time()
            ),
        }
        report
    }
}

impl Default for StepBenchmark {
    fn default() -> Self {
        Self::new()
    }
}
