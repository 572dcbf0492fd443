pub mod engine;
pub mod field;
pub mod links;
pub mod particle;

pub use engine::{EngineReport, FieldEngine, FieldTuning};
pub use field::{FieldTickReport, StarField};
pub use links::{LinkSegment, link_segments};
pub use particle::{Particle, SpawnRanges};
