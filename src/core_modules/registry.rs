// THEORY:
// The `CombinerRegistry` is the single place that knows which combiners exist.
// It is an ordinary value, built once at startup and handed to whoever needs to
// enumerate or look up combiners, instead of a process-wide list that each
// combiner appends itself to at load time.
//
// Key architectural principles:
// 1.  **One composition point**: `all_combiners()` is the only list of the
//     built-in combiners. `CombinerRegistry::with_defaults()` registers them in
//     that order.
// 2.  **Write once, then read only**: `register` takes `&mut self`, so the borrow
//     checker confines registration to an initialization phase. Afterwards the
//     registry can be shared immutably across threads.
// 3.  **Snapshots, not views**: `registered()` hands out an owned `Vec` of shared
//     handles. Callers may reorder or truncate it freely without touching the
//     registry.
// 4.  **No uniqueness**: registering a name twice keeps both entries; lookups
//     return the first one in registration order.

use crate::core_modules::combiner::{
    AlphaBlend, Basic, Combiner, PerceivedOption1, PerceivedOption2, PerceivedOption2NoAlpha,
    StandardObjective,
};
use crate::error::{PixelSortError, Result};
use std::fmt;
use std::sync::Arc;

pub type SharedCombiner = Arc<dyn Combiner>;

/// Every built-in combiner, in registration order.
pub fn all_combiners() -> Vec<SharedCombiner> {
    vec![
        Arc::new(AlphaBlend),
        Arc::new(Basic),
        Arc::new(PerceivedOption1),
        Arc::new(PerceivedOption2),
        Arc::new(PerceivedOption2NoAlpha),
        Arc::new(StandardObjective),
    ]
}

/// An ordered, append-only collection of combiners.
#[derive(Clone, Default)]
pub struct CombinerRegistry {
    combiners: Vec<SharedCombiner>,
}

impl CombinerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding everything from `all_combiners()`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for combiner in all_combiners() {
            registry.register(combiner);
        }
        registry
    }

    pub fn register(&mut self, combiner: SharedCombiner) {
        self.combiners.push(combiner);
    }

    /// A copy of the registered combiners, in registration order.
    pub fn registered(&self) -> Vec<SharedCombiner> {
        self.combiners.clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.combiners.iter().map(|combiner| combiner.name()).collect()
    }

    /// The first combiner registered under `name`.
    pub fn find(&self, name: &str) -> Option<SharedCombiner> {
        self.combiners
            .iter()
            .find(|combiner| combiner.name() == name)
            .cloned()
    }

    /// Like `find`, but reports the known names when nothing matches.
    pub fn lookup(&self, name: &str) -> Result<SharedCombiner> {
        self.find(name).ok_or_else(|| PixelSortError::UnknownCombiner {
            name: name.to_string(),
            known: self
                .names()
                .iter()
                .map(|known| format!("{known:?}"))
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    pub fn len(&self) -> usize {
        self.combiners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combiners.is_empty()
    }
}

impl fmt::Debug for CombinerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
