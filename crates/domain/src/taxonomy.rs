use std::collections::{BTreeMap, HashMap};

use log::warn;

pub const LEGS: &str = "Ноги";
pub const QUADRICEPS: &str = "Квадрицепсы";
pub const HAMSTRINGS: &str = "Бицепс бедра";

/// Parent subgroups that may carry nested sub-subgroups, in emission order.
pub const NESTED_PARENTS: [&str; 2] = [QUADRICEPS, HAMSTRINGS];

/// One line of a muscle-sequence template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuscleSequenceEntry {
    pub group: &'static str,
    pub subgroup: &'static str,
    pub volume: Volume,
}

impl MuscleSequenceEntry {
    #[must_use]
    pub const fn new(group: &'static str, subgroup: &'static str, exercises: u32) -> Self {
        Self {
            group,
            subgroup,
            volume: Volume::Exercises(exercises),
        }
    }

    #[must_use]
    pub const fn nested(
        group: &'static str,
        subgroup: &'static str,
        children: &'static [(&'static str, u32)],
    ) -> Self {
        Self {
            group,
            subgroup,
            volume: Volume::Nested(children),
        }
    }
}

/// Number of exercises to pick for a subgroup, or a list of sub-subgroups with their own counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volume {
    Exercises(u32),
    Nested(&'static [(&'static str, u32)]),
}

/// Lookup structures derived from a muscle sequence.
///
/// `group_of` resolves subgroups (including sub-subgroups) to their group. Nested
/// sub-subgroups are additionally indexed below their parent subgroup, but only for the
/// parents listed in [`NESTED_PARENTS`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    subgroup_to_group: HashMap<&'static str, &'static str>,
    nested: BTreeMap<&'static str, Vec<&'static str>>,
}

impl Taxonomy {
    #[must_use]
    pub fn new(sequence: &[MuscleSequenceEntry]) -> Self {
        let mut taxonomy = Self {
            subgroup_to_group: HashMap::new(),
            nested: NESTED_PARENTS.iter().map(|p| (*p, vec![])).collect(),
        };

        for entry in sequence {
            match entry.volume {
                Volume::Exercises(_) => {
                    taxonomy.subgroup_to_group.insert(entry.subgroup, entry.group);
                }
                Volume::Nested(children) => {
                    for &(child, _) in children {
                        taxonomy.subgroup_to_group.insert(child, entry.group);
                        taxonomy.add_child(entry.subgroup, child);
                    }
                }
            }
        }

        taxonomy
    }

    fn add_child(&mut self, parent: &'static str, child: &'static str) {
        if self.nested.values().any(|children| children.contains(&child)) {
            return;
        }
        match self.nested.get_mut(parent) {
            Some(children) => children.push(child),
            None => warn!("ignoring nested subgroup {child} below unknown parent {parent}"),
        }
    }

    #[must_use]
    pub fn group_of(&self, subgroup: &str) -> Option<&'static str> {
        self.subgroup_to_group.get(subgroup).copied()
    }

    /// Children of a nested parent subgroup in template order.
    #[must_use]
    pub fn children(&self, parent: &str) -> &[&'static str] {
        self.nested.get(parent).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn is_nested(&self, subgroup: &str) -> bool {
        self.nested
            .values()
            .any(|children| children.iter().any(|child| *child == subgroup))
    }
}
