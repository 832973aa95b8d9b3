use anyhow::Result;
use dotplan_core::{spreads, FontBook, Layout, RecordingCanvas};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_layout(c: &mut Criterion) {
    let layout = Layout::default();
    let mut group = c.benchmark_group("layout_recording");
    group.bench_function("year_spread", |b| {
        let doc = spreads::year_spread(2026);
        b.iter(|| -> Result<()> {
            let mut canvas = RecordingCanvas::new();
            doc.render(&mut canvas, &layout)?;
            black_box(canvas.pages().len());
            Ok(())
        });
    });
    for &month in &[2u32, 11u32] {
        group.bench_function(format!("month_spread_{month}"), |b| {
            let doc = spreads::month_spread(2026, month).expect("valid month");
            b.iter(|| -> Result<()> {
                let mut canvas = RecordingCanvas::new();
                doc.render(&mut canvas, &layout)?;
                black_box(canvas.pages().len());
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_pdf(c: &mut Criterion) {
    let layout = Layout::default();
    let fonts = FontBook::system(&layout.style);
    let mut group = c.benchmark_group("render_pdf_bytes");
    group.sample_size(10);
    group.bench_function("books_and_movies", |b| {
        let doc = spreads::books_and_movies(2026);
        b.iter(|| -> Result<()> {
            let bytes = doc.render_to_pdf_bytes(&layout, &fonts)?;
            black_box(bytes);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_layout, bench_pdf);
criterion_main!(benches);
