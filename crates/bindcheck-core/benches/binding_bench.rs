//! # Binding Benchmarks
//!
//! Performance benchmarks for name resolution and binding validation.
//!
//! Run with: `cargo bench -p bindcheck-core`

use bindcheck_core::primitives::{HID_USAGE_KEY, hid_usage};
use bindcheck_core::{
    BehaviorDriver, Binding, BindingValidator, CustomMetadata, DriverError, ParamPosition,
    ParameterDomain, ParameterMetadata, ParameterSet, Registry, StandardMetadata,
    ValidationConfig, ValueDescriptor,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

struct Bench {
    name: String,
    metadata: ParameterMetadata,
}

impl BehaviorDriver for Bench {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_metadata(&self) -> Result<ParameterMetadata, DriverError> {
        Ok(self.metadata.clone())
    }
}

/// Create N behaviors named `behavior_0..N` with HID usage metadata.
fn create_behaviors(size: usize) -> Vec<Bench> {
    (0..size)
        .map(|i| Bench {
            name: format!("behavior_{i}"),
            metadata: ParameterMetadata::Standard(StandardMetadata::new(
                ParameterDomain::HidUsage,
                ParameterDomain::Null,
            )),
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_last_entry");

    for size in [8, 64, 512].iter() {
        let behaviors = create_behaviors(*size);
        let registry = Registry::new(behaviors.iter().map(|b| b as &dyn BehaviorDriver));
        let last = format!("behavior_{}", size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &last, |b, name| {
            b.iter(|| black_box(registry.resolve(black_box(name)).is_some()));
        });
    }

    group.finish();
}

fn bench_validate_standard(c: &mut Criterion) {
    let behaviors = create_behaviors(32);
    let registry = Registry::new(behaviors.iter().map(|b| b as &dyn BehaviorDriver));
    let validator = BindingValidator::new(&registry, ValidationConfig::default());
    let binding = Binding::new("behavior_16", hid_usage(HID_USAGE_KEY, 0x04), 0);

    c.bench_function("validate_standard", |b| {
        b.iter(|| black_box(validator.validate(black_box(&binding))))
    });
}

fn bench_validate_custom(c: &mut Criterion) {
    let sets = (0..16)
        .map(|i| {
            ParameterSet::new(vec![
                ValueDescriptor::range(ParamPosition::First, i * 10, i * 10 + 9),
                ValueDescriptor::standard(ParamPosition::Second, ParameterDomain::LayerIndex),
            ])
        })
        .collect();
    let behavior = Bench {
        name: "custom".to_string(),
        metadata: ParameterMetadata::Custom(CustomMetadata::new(sets)),
    };
    let registry = Registry::new([&behavior as &dyn BehaviorDriver]);
    let validator = BindingValidator::new(&registry, ValidationConfig::default());
    let binding = Binding::new("custom", 155, 1);

    c.bench_function("validate_custom_last_set", |b| {
        b.iter(|| black_box(validator.validate(black_box(&binding))))
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_validate_standard,
    bench_validate_custom
);
criterion_main!(benches);
