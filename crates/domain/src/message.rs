use strum::IntoEnumIterator;

use crate::{ProgramFamily, split_text};

pub const CLEAR_PROGRAM: &str = "clear_program";
pub const BACK_TO_DAYS: &str = "back_to_days";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub text: String,
    pub callback_data: String,
}

/// Inline keyboard attached to a message, given as rows of buttons.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    #[must_use]
    pub fn rebuild_program() -> Self {
        Self {
            rows: vec![vec![Button {
                text: String::from("🔄 Пересоставить"),
                callback_data: String::from(CLEAR_PROGRAM),
            }]],
        }
    }

    /// One button per number of training days offered by any family.
    #[must_use]
    pub fn days_selection() -> Self {
        let mut days = ProgramFamily::iter()
            .map(ProgramFamily::days)
            .collect::<Vec<_>>();
        days.sort_unstable();
        days.dedup();
        Self {
            rows: vec![
                days.into_iter()
                    .map(|days| Button {
                        text: format!("{days} дня"),
                        callback_data: format!("days_{days}"),
                    })
                    .collect(),
            ],
        }
    }

    #[must_use]
    pub fn family_selection(days: u32) -> Self {
        let mut rows = ProgramFamily::with_days(days)
            .map(|family| {
                vec![Button {
                    text: family.name().to_string(),
                    callback_data: format!("program_{}", family.id()),
                }]
            })
            .collect::<Vec<_>>();
        rows.push(vec![Button {
            text: String::from("⬅️ Назад"),
            callback_data: String::from(BACK_TO_DAYS),
        }]);
        Self { rows }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// Marked-up text to be sent to a chat, optionally with a keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Message {
    #[must_use]
    pub fn new(text: impl Into<String>, keyboard: Option<Keyboard>) -> Self {
        Self {
            text: text.into(),
            keyboard,
        }
    }

    /// Splits the message into messages of at most `max_length` characters. The keyboard is
    /// kept on the last part only.
    #[must_use]
    pub fn split(self, max_length: usize) -> Vec<Message> {
        split_text(&self.text, max_length, self.keyboard)
            .into_iter()
            .map(|chunk| Message {
                text: chunk.text,
                keyboard: chunk.attachment,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_keyboard_eq() {
        assert_eq!(Keyboard::rebuild_program(), Keyboard::rebuild_program());
        assert_ne!(Keyboard::rebuild_program(), Keyboard::default());
        assert_ne!(
            Keyboard::rebuild_program(),
            Keyboard {
                rows: vec![vec![Button {
                    text: String::from("🔄 Пересоставить"),
                    callback_data: String::from("start_programma"),
                }]]
            }
        );
    }

    #[test]
    fn test_keyboard_buttons() {
        assert_eq!(
            Keyboard::rebuild_program()
                .buttons()
                .map(|b| b.callback_data.as_str())
                .collect::<Vec<_>>(),
            vec![CLEAR_PROGRAM]
        );
    }

    #[test]
    fn test_keyboard_days_selection() {
        assert_eq!(
            Keyboard::days_selection()
                .buttons()
                .map(|b| (b.text.as_str(), b.callback_data.as_str()))
                .collect::<Vec<_>>(),
            vec![
                ("2 дня", "days_2"),
                ("3 дня", "days_3"),
                ("4 дня", "days_4")
            ]
        );
    }

    #[test]
    fn test_keyboard_family_selection() {
        assert_eq!(
            Keyboard::family_selection(3)
                .rows
                .iter()
                .map(|row| row.iter().map(|b| b.callback_data.as_str()).collect())
                .collect::<Vec<Vec<_>>>(),
            vec![
                vec!["program_fullbody3"],
                vec!["program_hybrid3"],
                vec![BACK_TO_DAYS]
            ]
        );
        assert_eq!(Keyboard::family_selection(5).rows.len(), 1);
    }

    #[test]
    fn test_message_split() {
        let text = vec!["a".repeat(10); 3].join("\n");
        let messages = Message::new(text, Some(Keyboard::rebuild_program())).split(25);

        assert_eq!(
            messages,
            vec![
                Message::new("a".repeat(10) + "\n" + &"a".repeat(10), None),
                Message::new("a".repeat(10), Some(Keyboard::rebuild_program())),
            ]
        );
    }
}
