//! Order-preserving deserialization for ArtMap

use std::collections::HashMap;
use std::fmt;

use serde::Deserializer;
use serde::de::{MapAccess, Visitor};

use super::{ArtEntry, ArtRecord};

/// Deserialize the top-level object into entries in document order
///
/// A repeated key keeps the slot of its first occurrence and the record of
/// its last one.
pub fn deserialize_entries<'de, D>(deserializer: D) -> std::result::Result<Vec<ArtEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ArtMapVisitor;

    impl<'de> Visitor<'de> for ArtMapVisitor {
        type Value = Vec<ArtEntry>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a mapping of output filenames to art records")
        }

        fn visit_map<M>(self, mut map: M) -> std::result::Result<Vec<ArtEntry>, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut entries: Vec<ArtEntry> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            let mut positions: HashMap<String, usize> = HashMap::new();

            while let Some((key, record)) = map.next_entry::<String, ArtRecord>()? {
                if let Some(&index) = positions.get(&key) {
                    entries[index].record = record;
                } else {
                    positions.insert(key.clone(), entries.len());
                    entries.push(ArtEntry { key, record });
                }
            }

            Ok(entries)
        }
    }

    deserializer.deserialize_map(ArtMapVisitor)
}
