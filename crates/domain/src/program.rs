use std::collections::BTreeMap;

use log::{info, warn};
use strum::IntoEnumIterator;

use crate::{DayHeading, Keyboard, Message, MuscleSequenceEntry, catalog, render_day};

pub const DEFAULT_DAYS: u32 = 2;
pub const DEFAULT_SETS_REPS: &str = "3 подхода, 3-8 повторений";
pub const UNKNOWN_KIND: &str = "Unknown";
pub const DEFAULT_TUTORIALS_URL: &str = "https://t.me/+IkIXHNQL3vgyYzQ8";

/// A stored training program of a user.
///
/// Missing fields fall back to [`DEFAULT_DAYS`], [`DEFAULT_SETS_REPS`] and [`UNKNOWN_KIND`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProgramRecord {
    pub program: Option<ProgramBody>,
    pub days: Option<u32>,
    pub sets_reps: Option<String>,
    pub kind: Option<String>,
}

impl ProgramRecord {
    #[must_use]
    pub fn days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_DAYS)
    }

    #[must_use]
    pub fn sets_reps(&self) -> &str {
        self.sets_reps.as_deref().unwrap_or(DEFAULT_SETS_REPS)
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or(UNKNOWN_KIND)
    }

    #[must_use]
    pub fn family(&self) -> Option<ProgramFamily> {
        self.kind().parse().ok()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.program.as_ref().is_none_or(ProgramBody::is_empty)
    }
}

/// Exercise records of a program, either shared by all days or given per day key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramBody {
    Shared(Vec<String>),
    PerDay(BTreeMap<String, Vec<String>>),
}

impl ProgramBody {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ProgramBody::Shared(exercises) => exercises.is_empty(),
            ProgramBody::PerDay(days) => days.is_empty(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum ProgramFamily {
    #[strum(serialize = "FullBody 2.0")]
    FullBody2,
    #[strum(serialize = "FullBody 3.0")]
    FullBody3,
    #[strum(serialize = "3 day гибрид верх/низа и фулбади")]
    Hybrid3,
    #[strum(serialize = "4 day верх/низ")]
    UpperLower4,
    #[strum(serialize = "4 day перед/зад")]
    FrontBack4,
}

impl ProgramFamily {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Short identifier usable in callback data.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ProgramFamily::FullBody2 => "fullbody2",
            ProgramFamily::FullBody3 => "fullbody3",
            ProgramFamily::Hybrid3 => "hybrid3",
            ProgramFamily::UpperLower4 => "upperlower4",
            ProgramFamily::FrontBack4 => "frontback4",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        ProgramFamily::iter().find(|f| f.id() == id)
    }

    #[must_use]
    pub fn days(self) -> u32 {
        match self {
            ProgramFamily::FullBody2 => 2,
            ProgramFamily::FullBody3 | ProgramFamily::Hybrid3 => 3,
            ProgramFamily::UpperLower4 | ProgramFamily::FrontBack4 => 4,
        }
    }

    #[must_use]
    pub fn layout(self) -> Layout {
        match self {
            ProgramFamily::FullBody2 | ProgramFamily::FullBody3 => {
                Layout::Shared(catalog::FULL_BODY)
            }
            ProgramFamily::Hybrid3 => Layout::PerDay(&HYBRID_DAYS),
            ProgramFamily::UpperLower4 => Layout::PerDay(&UPPER_LOWER_DAYS),
            ProgramFamily::FrontBack4 => Layout::PerDay(&FRONT_BACK_DAYS),
        }
    }

    /// Families offered for the given number of training days per week.
    pub fn with_days(days: u32) -> impl Iterator<Item = ProgramFamily> {
        ProgramFamily::iter().filter(move |f| f.days() == days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One template used for every training day.
    Shared(&'static [MuscleSequenceEntry]),
    PerDay(&'static [DayTemplate]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTemplate {
    pub number: u32,
    pub key: &'static str,
    pub name: &'static str,
    pub sequence: &'static [MuscleSequenceEntry],
}

impl DayTemplate {
    const fn new(
        number: u32,
        key: &'static str,
        name: &'static str,
        sequence: &'static [MuscleSequenceEntry],
    ) -> Self {
        Self {
            number,
            key,
            name,
            sequence,
        }
    }
}

static HYBRID_DAYS: [DayTemplate; 3] = [
    DayTemplate::new(1, "day1", "Фулбади", catalog::HYBRID_FULL_BODY),
    DayTemplate::new(2, "day2", "Верх", catalog::HYBRID_UPPER),
    DayTemplate::new(3, "day3", "Низ", catalog::HYBRID_LOWER),
];

static UPPER_LOWER_DAYS: [DayTemplate; 4] = [
    DayTemplate::new(1, "day1", "Верх", catalog::UPPER_A),
    DayTemplate::new(2, "day2", "Низ", catalog::LOWER_A),
    DayTemplate::new(3, "day3", "Верх", catalog::UPPER_B),
    DayTemplate::new(4, "day4", "Низ", catalog::LOWER_B),
];

static FRONT_BACK_DAYS: [DayTemplate; 4] = [
    DayTemplate::new(1, "day1", "Перед", catalog::FRONT),
    DayTemplate::new(2, "day2", "Зад", catalog::REAR),
    DayTemplate::new(3, "day3", "Перед", catalog::FRONT),
    DayTemplate::new(4, "day4", "Зад", catalog::REAR),
];

/// Fixed texts surrounding a rendered program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramTexts {
    pub tutorials_url: String,
}

impl Default for ProgramTexts {
    fn default() -> Self {
        Self {
            tutorials_url: String::from(DEFAULT_TUTORIALS_URL),
        }
    }
}

impl ProgramTexts {
    pub const SHARED_NOTICE: &str =
        "ℹ️ <i>Программа одинакова для всех дней тренировок.</i>\n\n<b>Упражнения:</b>\n";
    pub const DAYS_PROMPT: &str =
        "🏋️ <b>Создаем программу!</b>\nСколько дней в неделю ты готов тренироваться?";

    #[must_use]
    pub fn intro(&self, kind: &str, days: u32) -> String {
        format!(
            "😲 Отличный выбор упражнений, спортсмен, очень оптимальный выбор!\n\n\
             📝 <i>Упражнения не написаны по исполнительному порядку, начинай тренировку с мышцы, \
             которую ты хочешь акцентировать сегодня, и после переходи на следующие упражнения \
             по своему выбору.</i>\n\
             💡 <i>Если ты хочешь постепенно добавлять объем, добавляй! Но только если твое тело \
             это позволяет, не нагружай себя просто так.</i>\n\n\
             🏋️ <b>Ваша программа тренировок</b>\n\
             📅 Тип: {kind}\n\
             🗓 Дней: {days}\n"
        )
    }


    #[must_use]
    pub fn families_prompt(days: u32) -> String {
        format!("✅ <b>Вы выбрали {days} дня(дней)</b>\nТеперь выберите тип программы:")
    }

    #[must_use]
    pub fn footer(&self) -> String {
        format!(
            "\n💡 Техника: <a href='{}'>ТуторыЗамены</a>\n\
             📋 Просмотр: /programma\n\
             🔥 Удачи!",
            self.tutorials_url
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// Messages in sending order. Only the last one carries a keyboard.
    Messages(Vec<Message>),
    /// No program has been built yet.
    NoProgram,
    /// A program exists, but its family is unknown or its days do not match the family.
    Unrenderable,
}

/// Renders a stored program into the messages presenting it.
#[must_use]
pub fn render_program(record: &ProgramRecord, texts: &ProgramTexts) -> DisplayOutcome {
    let Some(body) = record.program.as_ref().filter(|body| !body.is_empty()) else {
        return DisplayOutcome::NoProgram;
    };
    let kind = record.kind();
    let intro = texts.intro(kind, record.days());

    match (body, record.family().map(ProgramFamily::layout)) {
        (ProgramBody::Shared(exercises), Some(Layout::Shared(sequence))) => {
            let text = format!(
                "{intro}{}{}{}",
                ProgramTexts::SHARED_NOTICE,
                render_day(exercises.as_slice(), sequence, record.sets_reps(), None),
                texts.footer()
            );
            DisplayOutcome::Messages(vec![Message::new(text, Some(Keyboard::rebuild_program()))])
        }
        (ProgramBody::PerDay(days), Some(Layout::PerDay(templates))) => {
            let mut messages = vec![];
            for (index, template) in templates.iter().enumerate() {
                let Some(exercises) = days.get(template.key) else {
                    warn!("program of type {kind} lacks {}", template.key);
                    return DisplayOutcome::Unrenderable;
                };
                let mut text = render_day(
                    exercises.as_slice(),
                    template.sequence,
                    record.sets_reps(),
                    Some(DayHeading {
                        number: template.number,
                        name: template.name,
                    }),
                );
                if index == 0 {
                    text = format!("{intro}\n{text}");
                }
                if index == templates.len() - 1 {
                    text.push_str(&texts.footer());
                    messages.push(Message::new(text, Some(Keyboard::rebuild_program())));
                } else {
                    messages.push(Message::new(text, None));
                }
            }
            DisplayOutcome::Messages(messages)
        }
        (ProgramBody::PerDay(_), _) => {
            warn!("unknown per-day program type: {kind}");
            DisplayOutcome::Unrenderable
        }
        (ProgramBody::Shared(_), _) => {
            info!("ignoring shared program of type {kind}");
            DisplayOutcome::NoProgram
        }
    }
}
