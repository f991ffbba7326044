//! Processor Pipeline.
//!
//! Composes multiple processors into a single one.

use dp_core::{error::Result, num::DataFloat, Data, Process};

use crate::processor::{Processor, ProcessorConfig};

/// Processor Pipeline.
///
/// Applies its stages in order, feeding each stage the previous output.
/// A pipeline is itself a [`Process`], so pipelines can be nested.
///
/// # Example
///
/// ```rust
/// use dp_core::{Data, Process};
/// use dp_transforms::{processors, ProcessorPipeline};
///
/// let pipeline = ProcessorPipeline::new()
///     .add(processors::clip_upper(10.0))
///     .add(processors::percent_scale());
///
/// let out = pipeline.process(&Data::from([0.0, 5.0, 40.0]));
///
/// assert_eq!(out.as_slice(), &[0.0, 50.0, 100.0]);
/// assert_eq!(pipeline.name(), "Pipeline[(upper = 10.0) -> Scaler(0.0,100.0)]");
/// ```
pub struct ProcessorPipeline<T: DataFloat = f64> {
    stages: Vec<Box<dyn Process<T>>>,
}

impl<T: DataFloat> core::fmt::Debug for ProcessorPipeline<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProcessorPipeline")
            .field("num_stages", &self.stages.len())
            .field("names", &self.names())
            .finish()
    }
}

impl<T: DataFloat> Default for ProcessorPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DataFloat> ProcessorPipeline<T> {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Build a pipeline from a list of processor configurations.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error.
    pub fn from_configs(configs: &[ProcessorConfig<T>]) -> Result<Self> {
        configs.iter().try_fold(Self::new(), |pipeline, config| {
            Ok(pipeline.add(Processor::from_config(config)?))
        })
    }

    /// Append a stage.
    pub fn add<P>(mut self, stage: P) -> Self
    where
        P: Process<T> + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Get the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Names of the stages, in order.
    pub fn names(&self) -> Vec<String> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Iterate over the stages in order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Process<T> + 'static)> + '_ {
        self.stages.iter().map(|stage| stage.as_ref())
    }
}

impl<T: DataFloat> Process<T> for ProcessorPipeline<T> {
    fn process(&self, data: &Data<T>) -> Data<T> {
        let mut current = data.clone();

        for (index, stage) in self.stages.iter().enumerate() {
            tracing::debug!(stage = index, processor = %stage.name(), len = current.len(), "running stage");
            current = stage.process(&current);
        }

        current
    }

    fn name(&self) -> String {
        format!("Pipeline[{}]", self.names().join(" -> "))
    }

    /// Validates against the first stage only; later stages see intermediate
    /// output, which [`try_process`](Process::try_process) checks as it goes.
    fn validate(&self, data: &Data<T>) -> Result<()> {
        match self.stages.first() {
            Some(stage) => stage.validate(data),
            None => data.check_finite(),
        }
    }

    fn try_process(&self, data: &Data<T>) -> Result<Data<T>> {
        if self.stages.is_empty() {
            data.check_finite()?;
            return Ok(data.clone());
        }

        let mut current = data.clone();

        for (index, stage) in self.stages.iter().enumerate() {
            tracing::debug!(stage = index, processor = %stage.name(), len = current.len(), "running stage");
            current = stage.try_process(&current)?;
        }

        Ok(current)
    }
}
