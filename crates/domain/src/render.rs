use std::collections::BTreeMap;

use log::debug;

use crate::{LEGS, MuscleSequenceEntry, NESTED_PARENTS, Taxonomy, classify};

/// Number and name of a training day, only present for multi-day programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHeading<'a> {
    pub number: u32,
    pub name: &'a str,
}

/// Renders the exercises of one training day grouped by muscle group and subgroup.
///
/// Groups are emitted in the order they are first encountered, subgroups in byte-wise
/// lexicographic order. Exercises keep their input order. If a heading is given, the
/// day is treated as part of a multi-day program, which also enables the nested layout
/// for the legs group.
#[must_use]
pub fn render_day<S: AsRef<str>>(
    exercises: &[S],
    sequence: &[MuscleSequenceEntry],
    sets_reps: &str,
    heading: Option<DayHeading>,
) -> String {
    let taxonomy = Taxonomy::new(sequence);
    let groups = group_exercises(exercises, &taxonomy);

    let mut text = match heading {
        Some(DayHeading { number, name }) => {
            format!("{number}\u{fe0f}\u{20e3} <b>День {number} ({name})</b>\n")
        }
        None => String::new(),
    };

    for group in &groups {
        text.push_str(&format!("\n💪 <b>{}</b>\n", group.name));
        layout_for(group.name, heading.is_some()).write(&mut text, group, &taxonomy, sets_reps);
    }

    match heading {
        Some(DayHeading { number, name }) => {
            debug!(
                "formatted day {number} ({name}) text length: {}",
                text.chars().count()
            );
        }
        None => debug!("formatted text length: {}", text.chars().count()),
    }

    text
}

struct Group<'a> {
    name: &'a str,
    subgroups: BTreeMap<&'a str, Vec<&'a str>>,
}

fn group_exercises<'a, S: AsRef<str>>(exercises: &'a [S], taxonomy: &Taxonomy) -> Vec<Group<'a>> {
    let mut groups: Vec<Group> = vec![];

    for exercise in exercises {
        let exercise = classify(exercise.as_ref(), taxonomy);
        let index = match groups.iter().position(|g| g.name == exercise.group) {
            Some(index) => index,
            None => {
                groups.push(Group {
                    name: exercise.group,
                    subgroups: BTreeMap::new(),
                });
                groups.len() - 1
            }
        };
        groups[index]
            .subgroups
            .entry(exercise.subgroup)
            .or_default()
            .push(exercise.name);
    }

    groups
}

/// Strategy for emitting the subgroups of a single group.
trait GroupLayout: Sync {
    fn write(&self, text: &mut String, group: &Group, taxonomy: &Taxonomy, sets_reps: &str);
}

static FLAT: Flat = Flat;
static NESTED_LEGS: Nested = Nested {
    parents: &NESTED_PARENTS,
};

fn layout_for(group: &str, multi_day: bool) -> &'static dyn GroupLayout {
    if multi_day && group == LEGS {
        &NESTED_LEGS
    } else {
        &FLAT
    }
}

struct Flat;

impl GroupLayout for Flat {
    fn write(&self, text: &mut String, group: &Group, _: &Taxonomy, sets_reps: &str) {
        for (subgroup, exercises) in &group.subgroups {
            write_subgroup(text, subgroup, exercises, sets_reps, 1);
        }
    }
}

/// Emits the fixed parents first, each with its present children in sorted order, followed
/// by all remaining subgroups.
struct Nested {
    parents: &'static [&'static str],
}

impl Nested {
    fn covers(&self, subgroup: &str, taxonomy: &Taxonomy) -> bool {
        self.parents
            .iter()
            .any(|parent| taxonomy.children(parent).iter().any(|child| *child == subgroup))
    }
}

impl GroupLayout for Nested {
    fn write(&self, text: &mut String, group: &Group, taxonomy: &Taxonomy, sets_reps: &str) {
        for parent in self.parents {
            let mut children = taxonomy
                .children(parent)
                .iter()
                .filter_map(|child| group.subgroups.get_key_value(*child))
                .collect::<Vec<_>>();
            if children.is_empty() {
                continue;
            }
            children.sort_by(|(a, _), (b, _)| a.cmp(b));

            text.push_str(&format!("{}➡️ <b><i>{parent}</i></b>\n", indent(1)));
            for (child, exercises) in children {
                write_subgroup(text, child, exercises, sets_reps, 2);
            }
        }

        for (subgroup, exercises) in &group.subgroups {
            if !self.covers(subgroup, taxonomy) {
                write_subgroup(text, subgroup, exercises, sets_reps, 1);
            }
        }
    }
}

fn write_subgroup(
    text: &mut String,
    subgroup: &str,
    exercises: &[&str],
    sets_reps: &str,
    level: usize,
) {
    text.push_str(&format!("{}➡️ <b><i>{subgroup}</i></b>\n", indent(level)));
    for exercise in exercises {
        text.push_str(&format!("{}• {exercise} ({sets_reps})\n", indent(level + 1)));
    }
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{HAMSTRINGS, OTHER_GROUP, QUADRICEPS, UNKNOWN_SUBGROUP};

    const SEQUENCE: &[MuscleSequenceEntry] = &[
        MuscleSequenceEntry::new("Грудь", "Грудь", 2),
        MuscleSequenceEntry::new("Руки", "Трицепс", 1),
        MuscleSequenceEntry::new("Руки", "Бицепс", 1),
        MuscleSequenceEntry::nested(
            LEGS,
            QUADRICEPS,
            &[("Разгибания ног", 1), ("Базовые на квадрицепс", 1)],
        ),
        MuscleSequenceEntry::nested(LEGS, HAMSTRINGS, &[("Сгибания ног", 1)]),
        MuscleSequenceEntry::new(LEGS, "Икры", 1),
        MuscleSequenceEntry::new(LEGS, "Ягодицы", 1),
    ];

    #[test]
    fn test_render_day_single_template() {
        assert_eq!(
            render_day(
                &["Грудь: Жим штанги", "Грудь: Жим гантелей", "Трицепс: Разгибания"],
                SEQUENCE,
                "3x10",
                None
            ),
            "\n💪 <b>Грудь</b>\n\
             \x20 ➡️ <b><i>Грудь</i></b>\n\
             \x20   • Жим штанги (3x10)\n\
             \x20   • Жим гантелей (3x10)\n\
             \n💪 <b>Руки</b>\n\
             \x20 ➡️ <b><i>Трицепс</i></b>\n\
             \x20   • Разгибания (3x10)\n"
        );
    }

    #[test]
    fn test_render_day_heading() {
        let text = render_day(
            &["Грудь: Жим штанги"],
            SEQUENCE,
            "3x10",
            Some(DayHeading {
                number: 2,
                name: "Верх",
            }),
        );

        assert!(text.starts_with("2\u{fe0f}\u{20e3} <b>День 2 (Верх)</b>\n\n💪 <b>Грудь</b>\n"));
    }

    #[test]
    fn test_render_day_malformed_record() {
        let text = render_day(&["Грудь: Жим штанги", "БезРазделителя"], SEQUENCE, "3x10", None);

        assert!(text.ends_with(&format!(
            "\n💪 <b>{OTHER_GROUP}</b>\n  ➡️ <b><i>{UNKNOWN_SUBGROUP}</i></b>\n    • БезРазделителя (3x10)\n"
        )));
    }

    #[test]
    fn test_render_day_group_order() {
        let text = render_day(
            &["Трицепс: Разгибания", "Грудь: Жим штанги", "Бицепс: Подъем штанги"],
            SEQUENCE,
            "3x10",
            None,
        );

        let arms = text.find("<b>Руки</b>").unwrap();
        let chest = text.find("<b>Грудь</b>").unwrap();
        let biceps = text.find("<i>Бицепс</i>").unwrap();
        let triceps = text.find("<i>Трицепс</i>").unwrap();
        assert!(arms < chest);
        assert!(biceps < triceps);
        assert!(triceps < chest);
    }

    #[test]
    fn test_render_day_nested_legs() {
        let text = render_day(
            &[
                "Икры: Подъемы на носки",
                "Разгибания ног: Разгибания в тренажере",
                "Базовые на квадрицепс: Приседания",
                "Базовые на квадрицепс: Жим ногами",
            ],
            SEQUENCE,
            "3x10",
            Some(DayHeading {
                number: 3,
                name: "Низ",
            }),
        );

        assert_eq!(
            text,
            "3\u{fe0f}\u{20e3} <b>День 3 (Низ)</b>\n\
             \n💪 <b>Ноги</b>\n\
             \x20 ➡️ <b><i>Квадрицепсы</i></b>\n\
             \x20   ➡️ <b><i>Базовые на квадрицепс</i></b>\n\
             \x20     • Приседания (3x10)\n\
             \x20     • Жим ногами (3x10)\n\
             \x20   ➡️ <b><i>Разгибания ног</i></b>\n\
             \x20     • Разгибания в тренажере (3x10)\n\
             \x20 ➡️ <b><i>Икры</i></b>\n\
             \x20   • Подъемы на носки (3x10)\n"
        );
    }

    #[test]
    fn test_render_day_nested_legs_both_parents() {
        let text = render_day(
            &[
                "Ягодицы: Ягодичный мост",
                "Сгибания ног: Сгибания лежа",
                "Разгибания ног: Разгибания в тренажере",
            ],
            SEQUENCE,
            "3x10",
            Some(DayHeading {
                number: 1,
                name: "Низ",
            }),
        );

        let quadriceps = text.find(QUADRICEPS).unwrap();
        let hamstrings = text.find(HAMSTRINGS).unwrap();
        let glutes = text.find("Ягодицы").unwrap();
        assert!(quadriceps < hamstrings);
        assert!(hamstrings < glutes);
    }

    #[test]
    fn test_render_day_legs_single_template_is_flat() {
        let text = render_day(
            &["Икры: Подъемы на носки", "Разгибания ног: Разгибания в тренажере"],
            SEQUENCE,
            "3x10",
            None,
        );

        assert_eq!(
            text,
            "\n💪 <b>Ноги</b>\n\
             \x20 ➡️ <b><i>Икры</i></b>\n\
             \x20   • Подъемы на носки (3x10)\n\
             \x20 ➡️ <b><i>Разгибания ног</i></b>\n\
             \x20   • Разгибания в тренажере (3x10)\n"
        );
    }

    #[test]
    fn test_render_day_idempotent() {
        let exercises = [
            "Сгибания ног: Сгибания лежа",
            "Грудь: Жим штанги",
            "Спина: Тяга",
            "БезРазделителя",
        ];
        let heading = Some(DayHeading {
            number: 1,
            name: "Фулбади",
        });

        assert_eq!(
            render_day(&exercises, SEQUENCE, "3x10", heading),
            render_day(&exercises, SEQUENCE, "3x10", heading)
        );
    }

    #[test]
    fn test_render_day_empty() {
        assert_eq!(render_day::<&str>(&[], SEQUENCE, "3x10", None), "");
    }
}
