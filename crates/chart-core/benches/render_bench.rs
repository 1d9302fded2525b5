use anyhow::Result;
use chart_core::{Animation, Easing, LineChart, LineSet, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use std::time::Duration;

fn build_chart(n: usize) -> LineChart {
    let labels: Vec<String> = (0..n).map(|i| format!("label{}", i + 1)).collect();
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin() * 3.0 + 4.0).collect();
    let mut ch = LineChart::new();
    ch.add_data(LineSet::new(&labels, &values).expect("set")).expect("add");
    ch.show_with(Animation::new().with_easing(Easing::AccelerateDecelerate));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame_png_bytes");
    for &n in &[7usize, 200usize] {
        group.bench_function(format!("points_{n}"), |b| {
            let mut ch = build_chart(n);
            ch.advance(Duration::from_millis(500));
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
