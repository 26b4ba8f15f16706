//! Criterion benchmarks for rust_log_bridge

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_log_bridge::prelude::*;
use std::sync::Arc;

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let logger = Logger::new();
            black_box(logger)
        });
    });

    group.bench_function("builder_with_adapter", |b| {
        b.iter(|| {
            let logger = Logger::builder()
                .writer(AdapterWriter::default())
                .context_field("service", "bench")
                .build();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_adapter_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapter_dispatch");
    group.throughput(Throughput::Elements(1));

    let null = Logger::builder().writer(AdapterWriter::default()).build();
    group.bench_function("null_logger", |b| {
        b.iter(|| null.info(black_box("Info message")));
    });

    group.bench_function("null_logger_with_context", |b| {
        b.iter(|| {
            null.log(
                Severity::Warning,
                black_box("Request slow"),
                LogContext::new()
                    .with_field("request_id", "abc-123")
                    .with_field("latency_ms", 420),
            )
        });
    });

    let sink = Arc::new(MemoryLogger::new());
    let memory = Logger::builder()
        .writer(AdapterWriter::new(sink.clone()))
        .build();
    group.bench_function("memory_logger", |b| {
        b.iter(|| {
            if sink.call_count() > 10_000 {
                sink.clear();
            }
            memory.error(black_box("Error message"))
        });
    });

    group.finish();
}

fn bench_concurrent_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_dispatch");
    let threads = 4;
    let per_thread = 250;
    group.throughput(Throughput::Elements((threads * per_thread) as u64));

    let logger = Arc::new(Logger::builder().writer(AdapterWriter::default()).build());

    group.bench_function("4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for _ in 0..per_thread {
                            let _ = logger.info("concurrent");
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Filter Benchmarks
// ============================================================================

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new(Severity::Debug, "db query took 12ms", LogContext::new());

    let priority = PriorityFilter::new(Severity::Warning);
    group.bench_function("priority_reject", |b| {
        b.iter(|| priority.accepts(black_box(&entry)));
    });

    let regex = RegexFilter::new(r"took \d+ms").expect("valid pattern");
    group.bench_function("regex_match", |b| {
        b.iter(|| regex.accepts(black_box(&entry)));
    });

    let sampling = SamplingFilter::new(SamplingConfig::new(0.1));
    group.bench_function("sampling_10pct", |b| {
        b.iter(|| sampling.accepts(black_box(&entry)));
    });

    let filtered = Logger::builder()
        .writer(
            AdapterWriter::with_options(WriterOptions::new().priority(3)).expect("valid options"),
        )
        .build();
    group.bench_function("logger_filtered_out", |b| {
        b.iter(|| filtered.debug(black_box("dropped")));
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new(
        Severity::Error,
        "Payment declined",
        LogContext::new()
            .with_field("order_id", 98231)
            .with_field("gateway", "stripe")
            .with_field("retry", false),
    );

    let simple = SimpleFormatter::new();
    group.bench_function("simple", |b| {
        b.iter(|| simple.format(black_box(&entry)));
    });

    let json = JsonFormatter::new();
    group.bench_function("json", |b| {
        b.iter(|| json.format(black_box(&entry)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_adapter_dispatch,
    bench_concurrent_dispatch,
    bench_filters,
    bench_formatters,
);
criterion_main!(benches);
