use criterion::{criterion_group, criterion_main, Criterion};

use uri_parts::Uri;

pub fn criterion_benchmark(c: &mut Criterion) {
    let domain = "scheme://sub.sub.sub.example.com:8080/a/b/c";
    let userinfo = "scheme://user:pw@198.51.100.23:8080/a/b/c";
    let urn = "urn:book:fantasy:hobbit";
    let relative = "../a/b/c?k=v#frag";

    c.bench_function("parse various references", |b| {
        b.iter(|| {
            (
                Uri::parse(domain),
                Uri::parse(userinfo),
                Uri::parse(urn),
                Uri::parse(relative),
            )
        })
    });

    c.bench_function("parse long path", |b| {
        b.iter(|| {
            let s = concat!(
                "scheme://user:pw@sub.example.com:8080/a/b/c/%30/%31/%32%33%34",
                "/foo/foo/../../../foo.foo/foo/foo/././././//////foo",
                "?k1=v1&k2=v2&k3=v3#fragment"
            );
            Uri::parse(s)
        });
    });

    c.bench_function("reparse into one value", |b| {
        let mut uri = Uri::new();
        b.iter(|| {
            (
                uri.parse_from_string(domain),
                uri.parse_from_string(relative),
            )
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
