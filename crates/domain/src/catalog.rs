//! Muscle-sequence templates of the program families.

use crate::{HAMSTRINGS, LEGS, MuscleSequenceEntry as Entry, QUADRICEPS};

pub const CHEST: &str = "Грудь";
pub const BACK: &str = "Спина";
pub const SHOULDERS: &str = "Плечи";
pub const ARMS: &str = "Руки";
pub const ABS: &str = "Пресс";

const QUADRICEPS_COMPOUND: &str = "Многосуставные на квадрицепс";
const QUADRICEPS_ISOLATION: &str = "Изолирующие на квадрицепс";
const HIP_HINGE: &str = "Тазовое разгибание";
const LEG_CURL: &str = "Сгибание голени";

/// Shared by all days of the full-body families.
pub const FULL_BODY: &[Entry] = &[
    Entry::new(CHEST, "Грудные", 1),
    Entry::new(BACK, "Широчайшие", 1),
    Entry::new(SHOULDERS, "Средняя дельта", 1),
    Entry::new(ARMS, "Бицепс", 1),
    Entry::new(ARMS, "Трицепс", 1),
    Entry::nested(LEGS, QUADRICEPS, &[(QUADRICEPS_COMPOUND, 1)]),
    Entry::nested(LEGS, HAMSTRINGS, &[(HIP_HINGE, 1)]),
    Entry::new(LEGS, "Икры", 1),
    Entry::new(ABS, "Прямая мышца живота", 1),
];

pub const HYBRID_FULL_BODY: &[Entry] = &[
    Entry::new(CHEST, "Грудные", 1),
    Entry::new(BACK, "Широчайшие", 1),
    Entry::new(SHOULDERS, "Средняя дельта", 1),
    Entry::nested(LEGS, QUADRICEPS, &[(QUADRICEPS_COMPOUND, 1)]),
    Entry::nested(LEGS, HAMSTRINGS, &[(LEG_CURL, 1)]),
];

pub const HYBRID_UPPER: &[Entry] = &[
    Entry::new(CHEST, "Верх груди", 1),
    Entry::new(CHEST, "Грудные", 1),
    Entry::new(BACK, "Широчайшие", 2),
    Entry::new(BACK, "Трапеции", 1),
    Entry::new(SHOULDERS, "Средняя дельта", 1),
    Entry::new(SHOULDERS, "Задняя дельта", 1),
    Entry::new(ARMS, "Бицепс", 1),
    Entry::new(ARMS, "Трицепс", 1),
];

pub const HYBRID_LOWER: &[Entry] = &[
    Entry::nested(
        LEGS,
        QUADRICEPS,
        &[(QUADRICEPS_COMPOUND, 1), (QUADRICEPS_ISOLATION, 1)],
    ),
    Entry::nested(LEGS, HAMSTRINGS, &[(HIP_HINGE, 1), (LEG_CURL, 1)]),
    Entry::new(LEGS, "Ягодицы", 1),
    Entry::new(LEGS, "Икры", 1),
    Entry::new(ABS, "Прямая мышца живота", 1),
];

pub const UPPER_A: &[Entry] = &[
    Entry::new(CHEST, "Грудные", 2),
    Entry::new(BACK, "Широчайшие", 1),
    Entry::new(BACK, "Середина спины", 1),
    Entry::new(SHOULDERS, "Передняя дельта", 1),
    Entry::new(SHOULDERS, "Средняя дельта", 1),
    Entry::new(ARMS, "Трицепс", 1),
];

pub const LOWER_A: &[Entry] = &[
    Entry::nested(
        LEGS,
        QUADRICEPS,
        &[(QUADRICEPS_COMPOUND, 2), (QUADRICEPS_ISOLATION, 1)],
    ),
    Entry::nested(LEGS, HAMSTRINGS, &[(LEG_CURL, 1)]),
    Entry::new(LEGS, "Икры", 1),
    Entry::new(ABS, "Прямая мышца живота", 1),
];

pub const UPPER_B: &[Entry] = &[
    Entry::new(CHEST, "Верх груди", 1),
    Entry::new(BACK, "Широчайшие", 2),
    Entry::new(BACK, "Трапеции", 1),
    Entry::new(SHOULDERS, "Задняя дельта", 1),
    Entry::new(ARMS, "Бицепс", 2),
];

pub const LOWER_B: &[Entry] = &[
    Entry::nested(LEGS, QUADRICEPS, &[(QUADRICEPS_ISOLATION, 1)]),
    Entry::nested(LEGS, HAMSTRINGS, &[(HIP_HINGE, 2), (LEG_CURL, 1)]),
    Entry::new(LEGS, "Ягодицы", 1),
    Entry::new(LEGS, "Приводящие", 1),
    Entry::new(ABS, "Косые мышцы живота", 1),
];

/// Anterior chain.
pub const FRONT: &[Entry] = &[
    Entry::new(CHEST, "Верх груди", 1),
    Entry::new(CHEST, "Грудные", 1),
    Entry::new(SHOULDERS, "Передняя дельта", 1),
    Entry::new(SHOULDERS, "Средняя дельта", 1),
    Entry::new(ARMS, "Бицепс", 1),
    Entry::nested(
        LEGS,
        QUADRICEPS,
        &[(QUADRICEPS_COMPOUND, 1), (QUADRICEPS_ISOLATION, 1)],
    ),
    Entry::new(ABS, "Прямая мышца живота", 1),
];

/// Posterior chain.
pub const REAR: &[Entry] = &[
    Entry::new(BACK, "Широчайшие", 2),
    Entry::new(BACK, "Трапеции", 1),
    Entry::new(SHOULDERS, "Задняя дельта", 1),
    Entry::new(ARMS, "Трицепс", 1),
    Entry::nested(LEGS, HAMSTRINGS, &[(HIP_HINGE, 1), (LEG_CURL, 1)]),
    Entry::new(LEGS, "Ягодицы", 1),
    Entry::new(LEGS, "Икры", 1),
];
