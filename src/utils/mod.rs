pub mod benchmark;

pub use benchmark::{BenchmarkReport, StepBenchmark};
