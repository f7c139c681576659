//! Display identities for log tagging.
//!
//! The table is built in full before any worker starts and is read-only
//! afterwards, so lookups never race with assignment.

use std::collections::HashMap;

use keepbest_core::constants::TAG_LEN;

/// Display identity of one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Palette slot, `index mod palette_len`.
    pub slot: usize,
    /// Short name shown in every log line.
    pub tag: String,
}

/// Name to identity mapping for one run.
#[derive(Debug, Clone, Default)]
pub struct IdentityTable {
    entries: HashMap<String, Identity>,
    palette_len: usize,
}

impl IdentityTable {
    /// Assign identities in discovery order, cycling through the palette.
    pub fn assign<I, S>(names: I, palette_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let palette_len = palette_len.max(1);
        let entries = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.as_ref();
                let identity = Identity {
                    slot: index % palette_len,
                    tag: short_tag(name),
                };
                (name.to_string(), identity)
            })
            .collect();
        Self {
            entries,
            palette_len,
        }
    }

    /// Identity of `problem`, if it was discovered.
    #[must_use]
    pub fn get(&self, problem: &str) -> Option<&Identity> {
        self.entries.get(problem)
    }

    /// Number of palette entries the slots cycle over.
    #[must_use]
    pub fn palette_len(&self) -> usize {
        self.palette_len
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// First [`TAG_LEN`] characters of a problem name.
#[must_use]
pub fn short_tag(name: &str) -> String {
    name.chars().take(TAG_LEN).collect()
}
