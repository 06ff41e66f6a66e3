use std::collections::{BTreeMap, HashMap};

// ── Property names ──────────────────────────────────────────────────

pub const QUOTA:      &str = "quota";
pub const USED:       &str = "used";
pub const AVAIL:      &str = "avail";
pub const MOUNTPOINT: &str = "mountpoint";
pub const TYPE:       &str = "type";

/// Properties that `zfs get -p` reports as raw byte counts.
pub const BYTE_PROPERTIES: &[&str] = &[QUOTA, USED, AVAIL];

pub fn is_byte_property(name: &str) -> bool {
    BYTE_PROPERTIES.contains(&name)
}

// ── Values ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Bytes(u64),
    Text(String),
}

/// All properties reported for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet(BTreeMap<String, PropValue>);

impl PropertySet {
    pub fn insert(&mut self, name: &str, value: PropValue) {
        self.0.insert(name.to_string(), value);
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.0.get(name)
    }

    /// Byte count for `name`, 0 when absent or not numeric.
    pub fn bytes(&self, name: &str) -> u64 {
        match self.0.get(name) {
            Some(PropValue::Bytes(b)) => *b,
            _                         => 0,
        }
    }

    /// Text value for `name`, or `default` when absent or numeric.
    pub fn text<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.0.get(name) {
            Some(PropValue::Text(s)) => s.as_str(),
            _                        => default,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize { self.0.len() }
}

// ── Dataset map ─────────────────────────────────────────────────────

/// Dataset name → properties, iterated in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetMap {
    entries: Vec<(String, PropertySet)>,
    index:   HashMap<String, usize>,
}

impl DatasetMap {
    pub fn new() -> Self { Self::default() }

    /// Properties for `name`, inserting an empty set on first sight.
    pub fn entry_mut(&mut self, name: &str) -> &mut PropertySet {
        let idx = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.entries.push((name.to_string(), PropertySet::default()));
                let i = self.entries.len() - 1;
                self.index.insert(name.to_string(), i);
                i
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, name: &str) -> Option<&PropertySet> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySet)> {
        self.entries.iter().map(|(name, props)| (name.as_str(), props))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_mut_keeps_first_appearance_order() {
        let mut map = DatasetMap::new();
        map.entry_mut("rpool/b").insert(USED, PropValue::Bytes(1));
        map.entry_mut("rpool/a").insert(USED, PropValue::Bytes(2));
        map.entry_mut("rpool/b").insert(AVAIL, PropValue::Bytes(3));

        let names: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["rpool/b", "rpool/a"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("rpool/b").map(PropertySet::len), Some(2));
    }

    #[test]
    fn lookups_fall_back_to_defaults() {
        let mut props = PropertySet::default();
        props.insert(MOUNTPOINT, PropValue::Text("/mnt/a".into()));
        props.insert(USED, PropValue::Bytes(42));

        assert_eq!(props.bytes(USED), 42);
        assert_eq!(props.bytes(AVAIL), 0);
        assert_eq!(props.bytes(MOUNTPOINT), 0);
        assert_eq!(props.text(MOUNTPOINT, "-"), "/mnt/a");
        assert_eq!(props.text(TYPE, "-"), "-");
        assert_eq!(props.text(USED, "-"), "-");
    }

    #[test]
    fn byte_properties_are_exactly_quota_used_avail() {
        assert!(is_byte_property("quota"));
        assert!(is_byte_property("used"));
        assert!(is_byte_property("avail"));
        assert!(!is_byte_property("refquota"));
        assert!(!is_byte_property("mountpoint"));
    }
}
