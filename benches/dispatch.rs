use criterion::{Criterion, criterion_group, criterion_main};
use plugin_log::backend::{Backend, Dispatcher, Entry, LogRecord, StreamTarget};
use plugin_log::context::{self, AmbientSnapshot};
use plugin_log::fmt::LineFormatter;
use plugin_log::runtime::ExecutionMode;
use plugin_log::{LevelLogger, Tier};
use serde_json::json;
use std::hint::black_box;
use std::sync::Arc;

fn make_dispatcher(dev_mode: bool) -> Arc<Dispatcher> {
    Arc::new(
        Dispatcher::new().with_target(
            StreamTarget::new("bench", std::io::sink())
                .formatter(LineFormatter::for_mode(dev_mode))
                .categories(["bench"]),
        ),
    )
}

fn make_logger(dev_mode: bool) -> LevelLogger {
    LevelLogger::builder("bench", make_dispatcher(dev_mode))
        .execution(ExecutionMode::Request)
        .ambient(
            AmbientSnapshot::new()
                .query_param("page", "2")
                .cookie("session", "abc123")
                .server_var("REQUEST_URI", "/shop/cart"),
        )
        .build()
}

fn bench_logger(c: &mut Criterion) {
    let logger = make_logger(false);

    c.bench_function("LevelLogger::info", |b| {
        b.iter(|| {
            logger
                .info(
                    black_box("{user} opened the cart"),
                    context::from_pairs([("user", "ada")]),
                )
                .expect("log failed");
        });
    });

    c.bench_function("LevelLogger::error (enriched)", |b| {
        b.iter(|| {
            logger
                .error(
                    black_box("payment failed for order {order}"),
                    context::from_pairs([("order", json!(4711))]),
                )
                .expect("log failed");
        });
    });

    c.bench_function("LevelLogger::log (unknown level)", |b| {
        b.iter(|| {
            logger
                .log(black_box("verbose"), "unmapped", context::Context::new())
                .expect("log failed");
        });
    });
}

fn bench_formatter(c: &mut Criterion) {
    let record = LogRecord::new(
        "error",
        "payment failed for order {order}",
        context::from_pairs([
            ("order", json!(4711)),
            ("cart", json!({"items": 3, "total": 99.5})),
        ]),
    );
    let entry = Entry::new(&record, Tier::Error, "bench");

    let prod = LineFormatter::for_mode(false);
    c.bench_function("LineFormatter::format (production)", |b| {
        b.iter(|| prod.format(black_box(&entry)).expect("format failed"));
    });

    let dev = LineFormatter::for_mode(true);
    c.bench_function("LineFormatter::format (development)", |b| {
        b.iter(|| dev.format(black_box(&entry)).expect("format failed"));
    });
}

fn bench_dispatcher(c: &mut Criterion) {
    let dispatcher = make_dispatcher(false);
    let record = LogRecord::new("warning", "disk low", context::Context::new());

    c.bench_function("Dispatcher::submit (filtered)", |b| {
        b.iter(|| {
            dispatcher
                .submit(black_box(&record), Tier::Warning, "other")
                .expect("submit failed");
        });
    });
}

criterion_group!(benches, bench_logger, bench_formatter, bench_dispatcher);
criterion_main!(benches);
