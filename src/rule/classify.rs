//! Classification of import statements into labeled groups

use super::group::{CatchAll, GroupRule};
use crate::parsing::ImportStatement;
use tracing::trace;

/// Imports sharing one label, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub label: String,
    pub imports: Vec<&'a ImportStatement>,
}

impl<'a> Group<'a> {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            imports: Vec::new(),
        }
    }

    pub fn first(&self) -> Option<&'a ImportStatement> {
        self.imports.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

/// Label to imports mapping for one file.
///
/// Every configured label has a bucket, possibly empty. The catch-all
/// bucket is added on first use unless a rule already shares its label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedImports<'a> {
    groups: Vec<Group<'a>>,
}

impl<'a> GroupedImports<'a> {
    pub fn get(&self, label: &str) -> Option<&Group<'a>> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group<'a>> {
        self.groups.iter()
    }

    /// Number of classified imports across all groups
    pub fn import_count(&self) -> usize {
        self.groups.iter().map(|g| g.imports.len()).sum()
    }

    fn bucket(&mut self, label: &str) -> &mut Group<'a> {
        let index = match self.groups.iter().position(|g| g.label == label) {
            Some(index) => index,
            None => {
                self.groups.push(Group::new(label));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }
}

/// Assign each import to the first rule whose pattern matches its module
/// path, or to the catch-all group when none does.
pub fn classify<'a>(
    imports: &'a [ImportStatement],
    rules: &[GroupRule],
    catch_all: &CatchAll,
) -> GroupedImports<'a> {
    let mut grouped = GroupedImports::default();
    for rule in rules {
        grouped.bucket(&rule.label);
    }

    for import in imports {
        let label = rules
            .iter()
            .find(|rule| rule.matches(&import.source))
            .map_or(catch_all.label.as_str(), |rule| rule.label.as_str());
        trace!("'{}' -> {label}", import.source);
        grouped.bucket(label).imports.push(import);
    }

    grouped
}
