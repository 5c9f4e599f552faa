//! The filter registry: a name-to-function table with a two-phase lifecycle.
//!
//! Registration goes through `&mut self` during startup; once the registry
//! is shared with the evaluator, only `&self` lookups remain, so concurrent
//! dispatch needs no locking. There is no unregistration.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};
use weft_value::Value;

use crate::builtins;
use crate::errors::{duplicate_filter_name, unknown_filter, FilterError, FilterResult};

/// A filter: a pure function over an input value and a parameter value.
///
/// Filters that take no parameter receive [`Value::Nil`]. Plain function
/// pointers are enough here; dispatch is a single name lookup and filters
/// capture no state.
pub type FilterFn = fn(&Value, &Value) -> FilterResult;

/// Name-keyed table of installed filters.
///
/// Built explicitly by an initialization routine and handed to the
/// evaluator, rather than living in ambient global state; the borrow
/// checker enforces that registration finishes before shared lookups begin.
pub struct FilterRegistry {
    filters: FxHashMap<String, FilterFn>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            filters: FxHashMap::default(),
        }
    }

    /// Create a registry pre-populated with the built-in catalogue.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, filter) in builtins::BUILTIN_FILTERS {
            // Names in the builtin table are unique (enforced by a test),
            // so plain insertion cannot collide.
            registry.filters.insert((*name).to_string(), *filter);
        }
        debug!(count = registry.len(), "registered builtin filters");
        registry
    }

    /// Install `filter` under `name`.
    ///
    /// Fails with [`DuplicateFilterName`](crate::FilterErrorKind) if the
    /// name is taken. Intended for process startup, before the registry is
    /// shared.
    pub fn register(&mut self, name: &str, filter: FilterFn) -> Result<(), FilterError> {
        if self.filters.contains_key(name) {
            return Err(duplicate_filter_name(name));
        }
        self.filters.insert(name.to_string(), filter);
        debug!(filter = name, "registered filter");
        Ok(())
    }

    /// Look up the filter registered under `name`.
    ///
    /// This is the dispatch point the evaluator uses; fails with
    /// [`UnknownFilter`](crate::FilterErrorKind) on a miss.
    pub fn get(&self, name: &str) -> Result<FilterFn, FilterError> {
        self.filters
            .get(name)
            .copied()
            .ok_or_else(|| unknown_filter(name))
    }

    /// Look up `name` and invoke it on `input`.
    ///
    /// An absent parameter reaches the filter as [`Value::Nil`].
    pub fn apply(&self, name: &str, input: &Value, param: Option<&Value>) -> FilterResult {
        let filter = self.get(name)?;
        trace!(filter = name, input = %input.type_name(), "applying filter");
        filter(input, param.unwrap_or(&Value::Nil))
    }

    /// Whether a filter is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Iterate over the registered filter names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the registry has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
