// src/store.rs
//
// In-memory result of one run.
//
// - StaffRecord: one scraped profile. `name` is the only identity and is
//                guaranteed non-empty; every other field is best-effort.
// - StaffCollection: records keyed by name, kept in first-seen order.
//                    Re-inserting a name replaces the record in place.

use std::collections::HashMap;

use crate::config::consts::TEAM_JOIN;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffRecord {
    name: String,
    pub title: Option<String>,
    pub teams: Vec<String>,
    pub photo_link: Option<String>,
    pub biography: Option<String>,
}

impl StaffRecord {
    /// `None` when the name is empty after trimming.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: s!(name),
            title: None,
            teams: Vec::new(),
            photo_link: None,
            biography: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Team list as a single cell: `"A; B"`, trailing whitespace trimmed.
    pub fn teams_joined(&self) -> String {
        self.teams.join(TEAM_JOIN).trim_end().to_string()
    }
}

#[derive(Clone, Debug, Default)]
pub struct StaffCollection {
    records: Vec<StaffRecord>,
    index: HashMap<String, usize>,
}

impl StaffCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by name. Returns the record that was replaced, if any.
    /// An overwritten record keeps its original position.
    pub fn insert(&mut self, record: StaffRecord) -> Option<StaffRecord> {
        match self.index.get(record.name()) {
            Some(&i) => Some(std::mem::replace(&mut self.records[i], record)),
            None => {
                self.index.insert(s!(record.name()), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&StaffRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StaffRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a StaffCollection {
    type Item = &'a StaffRecord;
    type IntoIter = std::slice::Iter<'a, StaffRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, title: &str) -> StaffRecord {
        let mut r = StaffRecord::new(name).unwrap();
        r.title = Some(s!(title));
        r
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(StaffRecord::new("").is_none());
        assert!(StaffRecord::new("  \n\t").is_none());
        assert_eq!(StaffRecord::new("  Ada  ").unwrap().name(), "Ada");
    }

    #[test]
    fn teams_join_with_semicolon_space() {
        let mut r = StaffRecord::new("Ada").unwrap();
        assert_eq!(r.teams_joined(), "");
        r.teams = vec![s!("Research"), s!("Policy")];
        assert_eq!(r.teams_joined(), "Research; Policy");
        r.teams = vec![s!("Research"), s!("")];
        assert_eq!(r.teams_joined(), "Research;");
    }

    #[test]
    fn later_insert_overwrites_in_place() {
        let mut c = StaffCollection::new();
        assert!(c.insert(rec("A", "first")).is_none());
        c.insert(rec("B", "only"));
        let old = c.insert(rec("A", "second")).unwrap();

        assert_eq!(old.title.as_deref(), Some("first"));
        assert_eq!(c.len(), 2);
        let order: Vec<_> = c.iter().map(|r| (r.name(), r.title.as_deref().unwrap())).collect();
        assert_eq!(order, vec![("A", "second"), ("B", "only")]);
        assert_eq!(c.get("A").unwrap().title.as_deref(), Some("second"));
    }
}
