//! Benchmarks for snippet highlighting and page rendering.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fdi_renderer::{Language, MarkdownRenderer, highlight};

const SNIPPET: &str = r#"class FraudResponseSanitizer {
  sanitize(response: any): RiskAssessment {
    // Only pass through expected fields
    const score = Number(response.score);
    if (!Number.isFinite(score) || score < 0 || score > 100) {
      throw new Error(`Invalid score: ${response.score}`);
    }
    return { score, decision: response.decision === "DENY" ? "DENY" : "ALLOW" };
  }
}
"#;

/// Generate a page with `sections` headings, each followed by a snippet.
fn generate_page(sections: usize) -> String {
    let mut md = String::from("# Benchmark Page\n\n");
    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\nSome prose with `inline` code.\n\n"));
        md.push_str(&format!("```typescript\n{SNIPPET}```\n\n"));
    }
    md
}

fn bench_highlight_languages(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");
    group.throughput(Throughput::Bytes(SNIPPET.len() as u64));
    for language in [Language::TypeScript, Language::Json, Language::PlainText] {
        group.bench_with_input(
            BenchmarkId::from_parameter(language),
            &language,
            |b, &language| b.iter(|| highlight(black_box(SNIPPET), language)),
        );
    }
    group.finish();
}

fn bench_render_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_page");
    for sections in [1, 10, 50] {
        let markdown = generate_page(sections);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &markdown, |b, md| {
            b.iter(|| {
                MarkdownRenderer::new()
                    .with_title_extraction()
                    .render_markdown(black_box(md))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_highlight_languages, bench_render_pages);
criterion_main!(benches);
