//! Prelude for dp-transforms.
//!
//! This module re-exports all commonly used types and traits.

pub use crate::clipper::{Clipper, ClipperConfig};
pub use crate::pipeline::ProcessorPipeline;
pub use crate::processor::{Processor, ProcessorConfig};
pub use crate::processors;
pub use crate::scaler::{PercentScaler, Scaler, ScalerConfig};
pub use crate::standardizer::Standardizer;

// Re-export core Process trait
pub use dp_core::traits::Process;
