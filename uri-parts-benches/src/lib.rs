//! Benchmarks for `uri-parts`.
