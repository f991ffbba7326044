//! Shared processors across threads.
//!
//! Processors and data are immutable, so one instance can serve many threads
//! without synchronization and every thread sees the single-threaded result.

mod common;

use std::thread;

use approx::assert_relative_eq;

use common::generate_random_walk;
use dp_core::{Data, Process};
use dp_transforms::{processors, Processor, ProcessorPipeline};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_types_are_send_sync() {
    assert_send_sync::<Data<f64>>();
    assert_send_sync::<Processor<f64>>();
    assert_send_sync::<Processor<f32>>();
    assert_send_sync::<ProcessorPipeline<f64>>();
}

#[test]
fn test_shared_processor_matches_sequential() {
    let processor = processors::standardize();
    let inputs: Vec<Data<f64>> = (0..8)
        .map(|seed| Data::from(generate_random_walk(50.0, 1.5, 1_000, seed)))
        .collect();
    let expected: Vec<Data<f64>> = inputs.iter().map(|data| processor.process(data)).collect();

    let results: Vec<Data<f64>> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|data| scope.spawn(move || processor.process(data)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(results, expected);
}

#[test]
fn test_shared_pipeline_on_shared_data() {
    let pipeline = ProcessorPipeline::new()
        .add(processors::clip(45.0, 55.0))
        .add(processors::scale(0.0, 1.0));
    let data = Data::from(generate_random_walk(50.0, 2.0, 2_000, 99));
    let expected = pipeline.process(&data);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let out = pipeline.process(&data);
                assert_eq!(out, expected);
                assert_relative_eq!(out.min(), 0.0);
                assert_relative_eq!(out.max(), 1.0);
            });
        }
    });
}
