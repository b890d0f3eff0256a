// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use staff_scrape::specs::{listing, profile};

fn sample_profile() -> String {
    let bio: String = (0..40)
        .map(|i| format!("<p>Paragraph {i} of a fairly long biography, with commas and <em>markup</em>.</p>"))
        .collect();
    format!(
        r#"<html><head><title>Staff</title></head><body>
        <nav>{nav}</nav>
        <section class="staff-title">
          <div class="staff-title__content">
            <h1>A. Smith</h1><span>Senior Fellow</span>
            <h6>Research,</h6><h6>Policy,</h6><h6>Data Science</h6>
          </div>
          <div class="staff-title__photo"><img src="https://x/a.jpg"></div>
        </section>
        <article class="post-content">{bio}</article>
        </body></html>"#,
        nav = "<a href=\"/x\">link</a>".repeat(100),
    )
}

fn sample_listing() -> String {
    let links: String = (0..150)
        .map(|i| format!(r#"<div class="card"><a class="staff__link" href="https://x/team/{i}">Person {i}</a></div>"#))
        .collect();
    format!("<html><body>{links}</body></html>")
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_profile();
    let list = sample_listing();

    c.bench_function("profile_extract", |b| {
        b.iter(|| black_box(profile::extract(black_box(&doc))))
    });

    c.bench_function("listing_profile_urls", |b| {
        b.iter(|| black_box(listing::profile_urls(black_box(&list)).len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
