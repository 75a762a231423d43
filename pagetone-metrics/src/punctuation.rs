//! Exclamation ratio.

use crate::Document;

/// Of the sentences with a recognized terminal mark (`.`, `!`, `?`), the
/// fraction ending in `!`. Returns `0.0` when no sentence has one.
pub fn exclamation_ratio(doc: &Document) -> f64 {
    let mut terminated = 0usize;
    let mut exclaimed = 0usize;
    for sentence in doc.sentences() {
        match sentence.terminal {
            Some('!') => {
                terminated += 1;
                exclaimed += 1;
            }
            Some(_) => terminated += 1,
            None => {}
        }
    }
    if terminated == 0 {
        return 0.0;
    }
    exclaimed as f64 / terminated as f64
}
