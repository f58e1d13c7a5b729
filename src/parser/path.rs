//! Path segmentation.

use core::iter::FusedIterator;
use core::str::Split;

/// Iterator over the segments of a path.
///
/// * `""` has no segments.
/// * `"/"` has a single empty segment.
/// * Otherwise the path is split at every `/`, so a leading slash yields a
///   leading empty segment and a trailing slash yields a trailing empty segment.
#[derive(Debug, Clone)]
pub(crate) struct PathSegments<'a> {
    /// Remaining segments.
    inner: SegmentsRepr<'a>,
}

/// Internal state of `PathSegments`.
#[derive(Debug, Clone)]
enum SegmentsRepr<'a> {
    /// No more segments.
    Done,
    /// The path was `/`, and its only segment is not yet yielded.
    Root,
    /// Splitting a non-empty path.
    Split(Split<'a, char>),
}

impl<'a> PathSegments<'a> {
    /// Creates an iterator over the segments of the given path.
    #[must_use]
    pub(crate) fn new(path: &'a str) -> Self {
        let inner = match path {
            "" => SegmentsRepr::Done,
            "/" => SegmentsRepr::Root,
            path => SegmentsRepr::Split(path.split('/')),
        };
        Self { inner }
    }
}

impl<'a> Iterator for PathSegments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            SegmentsRepr::Done => None,
            SegmentsRepr::Root => {
                self.inner = SegmentsRepr::Done;
                Some("")
            }
            SegmentsRepr::Split(split) => {
                let next = split.next();
                if next.is_none() {
                    self.inner = SegmentsRepr::Done;
                }
                next
            }
        }
    }
}

impl FusedIterator for PathSegments<'_> {}
