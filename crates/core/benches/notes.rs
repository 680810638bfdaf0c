use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use notesync_core::{NotesParser, notes_to_html, to_lines};

fn weekly_notes() -> String {
    std::fs::read_to_string("../../tests/fixtures/weekly.notes").unwrap()
}

fn repeated(notes: &str, times: usize) -> String {
    std::iter::repeat_n(notes, times).collect::<Vec<_>>().join("\n")
}

fn bench_parse(c: &mut Criterion) {
    let small = weekly_notes();
    let medium = repeated(&small, 100);
    let large = repeated(&small, 10_000);

    let mut group = c.benchmark_group("parse");

    for (name, notes) in [("small", &small), ("medium", &medium), ("large", &large)] {
        let lines = to_lines(notes);
        group.bench_with_input(BenchmarkId::new(name, lines.len()), &lines, |b, lines| {
            b.iter(|| NotesParser.parse_lines(black_box(lines)))
        });
    }

    group.finish();
}

fn bench_deep_nesting(c: &mut Criterion) {
    let notes = (0..200).map(|depth| format!("{}-level {}", " ".repeat(depth), depth)).collect::<Vec<_>>().join("\n");

    c.bench_function("deep_nesting", |b| b.iter(|| notes_to_html(black_box(&notes))));
}

criterion_group!(benches, bench_parse, bench_deep_nesting);
criterion_main!(benches);
