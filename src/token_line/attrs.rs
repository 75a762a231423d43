//! Type-erased storage for span attributes.
//!
//! Attributes of any `'static` type are stored in per-type buckets keyed by
//! `TypeId`, kept sorted by span so queries and display output are
//! deterministic regardless of resolver emission order.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::Span;

#[derive(Default)]
pub struct AttrStore {
    buckets: HashMap<TypeId, Vec<(Span, Box<dyn Any>)>>,
}

impl AttrStore {
    pub(crate) fn insert<T: 'static>(&mut self, span: Span, attr: T) {
        let bucket = self.buckets.entry(TypeId::of::<T>()).or_default();
        // Equal spans keep insertion order.
        let at = bucket.partition_point(|(existing, _)| *existing <= span);
        bucket.insert(at, (span, Box::new(attr)));
    }

    /// All attributes of type `T`, ordered by `(span.start, span.end)`.
    pub fn get<T: 'static>(&self) -> Vec<(Span, &T)> {
        self.buckets
            .get(&TypeId::of::<T>())
            .into_iter()
            .flatten()
            .filter_map(|(span, attr)| attr.downcast_ref::<T>().map(|attr| (*span, attr)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Alpha(u32);

    #[derive(Debug, PartialEq)]
    struct Beta;

    #[test]
    fn distinguishes_attribute_types() {
        let mut store = AttrStore::default();
        store.insert(Span::single(0), Alpha(1));
        store.insert(Span::single(0), Beta);

        assert_eq!(store.get::<Alpha>(), vec![(Span::single(0), &Alpha(1))]);
        assert_eq!(store.get::<Beta>(), vec![(Span::single(0), &Beta)]);
    }

    #[test]
    fn returns_attributes_in_span_order() {
        let mut store = AttrStore::default();
        store.insert(Span::single(4), Alpha(4));
        store.insert(Span::single(1), Alpha(1));
        store.insert(Span::new(1, 3), Alpha(13));

        let spans: Vec<Span> = store.get::<Alpha>().into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            spans,
            vec![Span::single(1), Span::new(1, 3), Span::single(4)]
        );
    }

    #[test]
    fn missing_type_yields_empty() {
        let store = AttrStore::default();
        assert!(store.get::<Alpha>().is_empty());
    }
}
