use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::collections::BTreeMap;

use formforge_core::capture::{place_item, set_blank};
use formforge_core::editor::{append_category, rename_item_at, set_blanks_from_delimited};
use formforge_core::model::{Question, QuestionKind};

fn bench_editor_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor");

    group.bench_function("append_category", |b| {
        let q = Question::new(QuestionKind::Categorize);
        b.iter(|| append_category(black_box(&q)).unwrap())
    });

    group.bench_function("rename_item", |b| {
        let q = Question::new(QuestionKind::Categorize);
        b.iter(|| rename_item_at(black_box(&q), black_box(2), black_box("Dolphin")).unwrap())
    });

    group.bench_function("blanks_from_delimited_50", |b| {
        let q = Question::new(QuestionKind::Cloze);
        let raw = vec!["answer"; 50].join(", ");
        b.iter(|| set_blanks_from_delimited(black_box(&q), black_box(&raw)).unwrap())
    });

    group.finish();
}

fn bench_capture_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture");

    group.bench_function("place_item_100_placed", |b| {
        let mut placements: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for i in 0..100 {
            placements
                .entry(format!("Category {}", i % 5))
                .or_default()
                .push(format!("Item {i}"));
        }
        b.iter(|| place_item(black_box(&placements), black_box("Item new"), black_box("Category 0")))
    });

    group.bench_function("set_blank_pad_to_32", |b| {
        let blanks: Vec<String> = Vec::new();
        b.iter(|| set_blank(black_box(&blanks), black_box(31), black_box("dog")))
    });

    group.finish();
}

criterion_group!(benches, bench_editor_ops, bench_capture_ops);
criterion_main!(benches);
