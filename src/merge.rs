//! Fold scanned records into the module index and merge indices across files.
//!
//! Within one file, a later record for the same `(module, type, field)`
//! overwrites an earlier one. Across files, each `(module, type)` field map
//! is replaced wholesale by the most recently merged file that defines it;
//! fields are never combined across files.

use crate::model::*;

/// Build a per-file index from its records in scan order.
pub fn fold<I>(records: I) -> ModuleIndex
where
    I: IntoIterator<Item = Record>,
{
    let mut index = ModuleIndex::new();
    for rec in records {
        index
            .entry(rec.module)
            .or_default()
            .entry(rec.type_name)
            .or_default()
            .insert(rec.field, rec.entry);
    }
    index
}

/// Merge a later file's index into `acc`, replacing whole type maps.
pub fn merge_into(acc: &mut ModuleIndex, later: ModuleIndex) {
    for (module, types) in later {
        acc.entry(module).or_default().extend(types);
    }
}

/// Merge per-file indices in order; later files win per `(module, type)`.
pub fn merge_all<I>(indices: I) -> ModuleIndex
where
    I: IntoIterator<Item = ModuleIndex>,
{
    let mut acc = ModuleIndex::new();
    for index in indices {
        merge_into(&mut acc, index);
    }
    acc
}
