use log::warn;

use crate::Taxonomy;

pub const SEPARATOR: &str = ": ";
pub const OTHER_GROUP: &str = "Прочее";
pub const UNKNOWN_SUBGROUP: &str = "Неизвестная группа";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedExercise<'a> {
    pub group: &'a str,
    pub subgroup: &'a str,
    pub name: &'a str,
}

/// Classifies an exercise record of the form `"<subgroup>: <name>"`.
///
/// Only the first separator is significant. Subgroups unknown to the taxonomy end up in
/// [`OTHER_GROUP`], records without a separator additionally in [`UNKNOWN_SUBGROUP`].
#[must_use]
pub fn classify<'a>(record: &'a str, taxonomy: &Taxonomy) -> ClassifiedExercise<'a> {
    match record.split_once(SEPARATOR) {
        Some((subgroup, name)) => ClassifiedExercise {
            group: taxonomy.group_of(subgroup).unwrap_or(OTHER_GROUP),
            subgroup,
            name,
        },
        None => {
            warn!("invalid exercise format: {record}");
            ClassifiedExercise {
                group: OTHER_GROUP,
                subgroup: UNKNOWN_SUBGROUP,
                name: record,
            }
        }
    }
}
