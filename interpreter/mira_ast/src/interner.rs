//! String interner producing compact `Name` identifiers.
//!
//! Interned strings live for the rest of the process, which lets lookup
//! hand out `&'static str` without holding the lock.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

struct InternInner {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
///
/// Provides O(1) interning and lookup. Interning the same string twice
/// returns the same [`Name`].
///
/// # Thread Safety
/// Guarded by a `parking_lot::RwLock`; lookups take the read lock only.
pub struct StringInterner {
    inner: RwLock<InternInner>,
}

impl StringInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        StringInterner {
            inner: RwLock::new(InternInner {
                map: FxHashMap::default(),
                strings: Vec::with_capacity(64),
            }),
        }
    }

    /// Intern a string, returning its `Name`.
    pub fn intern(&self, s: &str) -> Name {
        if let Some(&idx) = self.inner.read().map.get(s) {
            return Name::from_raw(idx);
        }

        let mut inner = self.inner.write();
        // Re-check under the write lock: another caller may have interned
        // the string between the read and write acquisitions.
        if let Some(&idx) = inner.map.get(s) {
            return Name::from_raw(idx);
        }

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let idx = u32::try_from(inner.strings.len()).unwrap_or(u32::MAX);
        inner.strings.push(leaked);
        inner.map.insert(leaked, idx);
        Name::from_raw(idx)
    }

    /// Look up the string content of a `Name`.
    ///
    /// # Panics
    /// Panics if `name` did not come from this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.inner.read().strings[name.raw() as usize]
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Whether the interner is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
