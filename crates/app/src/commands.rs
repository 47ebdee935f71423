use splitgen_domain::{
    DeleteError, DisplayOutcome, Keyboard, Message, ProgramFamily, ProgramService, ProgramTexts,
    ReadError, Service, UserID,
};
use splitgen_storage::JsonFileStorage;
use strum::IntoEnumIterator;

use crate::settings::Settings;

pub const SEPARATOR: &str = "────────────────────";

fn service(settings: &Settings) -> Service<JsonFileStorage> {
    Service::new(JsonFileStorage::open(&settings.store_path))
}

/// Renders the messages sent for the program of a user, each split to the configured
/// maximum length. Without a displayable program, the first step of building one is shown.
pub fn show(settings: &Settings, user_id: &UserID) -> Result<String, ReadError> {
    let messages = match service(settings).display_program(user_id, &settings.texts())? {
        DisplayOutcome::Messages(messages) => messages,
        DisplayOutcome::NoProgram | DisplayOutcome::Unrenderable => vec![Message::new(
            ProgramTexts::DAYS_PROMPT,
            Some(Keyboard::days_selection()),
        )],
    };

    Ok(messages
        .into_iter()
        .flat_map(|message| message.split(settings.max_message_length))
        .map(|message| format_message(&message))
        .collect::<Vec<_>>()
        .join(&format!("\n{SEPARATOR}\n")))
}

pub fn clear(settings: &Settings, user_id: &UserID) -> Result<String, DeleteError> {
    if service(settings).clear_program(user_id)? {
        Ok(format!("Deleted program of user {user_id}"))
    } else {
        Ok(format!("No program stored for user {user_id}"))
    }
}

#[must_use]
pub fn families(days: Option<u32>) -> String {
    match days {
        Some(days) => format_message(&Message::new(
            ProgramTexts::families_prompt(days),
            Some(Keyboard::family_selection(days)),
        )),
        None => ProgramFamily::iter()
            .map(|family| format!("{} ({} days): {}", family.id(), family.days(), family.name()))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Message text followed by the keyboard, one line per row and each button in brackets.
#[must_use]
pub fn format_message(message: &Message) -> String {
    let Some(ref keyboard) = message.keyboard else {
        return message.text.clone();
    };
    let rows = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| format!("[{}]", button.text))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>();
    format!("{}\n\n{}", message.text, rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    const REBUILD: &str = "[🔄 Пересоставить]";

    fn settings(dir: &tempfile::TempDir, store: &serde_json::Value) -> Settings {
        let store_path = dir.path().join("user_program.json");
        fs::write(&store_path, store.to_string()).unwrap();
        Settings {
            store_path,
            ..Settings::default()
        }
    }

    fn store() -> serde_json::Value {
        json!({
            "1": {
                "program": {
                    "day1": ["Грудные: Жим штанги"],
                    "day2": ["Сгибание голени: Сгибания лежа"],
                    "day3": ["Бицепс: Молотки"],
                    "day4": ["Ягодицы: Ягодичный мост"]
                },
                "days": 4,
                "type": "4 day верх/низ"
            },
            "2": {
                "program": { "day1": ["Грудные: Жим штанги"] },
                "days": 5,
                "type": "5 day сплит"
            },
            "3": {
                "program": (0..40).map(|i| format!("Грудные: Жим {i}")).collect::<Vec<_>>(),
                "days": 2,
                "type": "FullBody 2.0"
            }
        })
    }

    fn days_prompt() -> String {
        format!("{}\n\n[2 дня] [3 дня] [4 дня]", ProgramTexts::DAYS_PROMPT)
    }

    #[test]
    fn test_show_per_day_program() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(&dir, &store());

        let output = show(&settings, &UserID::from(1)).unwrap();
        let parts = output.split(SEPARATOR).collect::<Vec<_>>();

        assert_eq!(parts.len(), 4);
        assert!(parts[0].contains("<b>День 1 (Верх)</b>"));
        assert!(parts[3].contains("<b>День 4 (Низ)</b>"));
        assert_eq!(output.matches(REBUILD).count(), 1);
        assert!(output.ends_with(&format!("\n\n{REBUILD}")));
    }

    #[rstest]
    #[case(2)]
    #[case(9)]
    fn test_show_days_prompt(#[case] user_id: i64) {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(&dir, &store());

        assert_eq!(show(&settings, &UserID::from(user_id)).unwrap(), days_prompt());
    }

    #[test]
    fn test_show_split_message() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            max_message_length: 400,
            ..settings(&dir, &store())
        };

        let output = show(&settings, &UserID::from(3)).unwrap();
        let parts = output.split(&format!("\n{SEPARATOR}\n")).collect::<Vec<_>>();

        assert!(parts.len() > 1);
        assert!(parts[..parts.len() - 1].iter().all(|p| !p.contains(REBUILD)));
        assert!(parts.iter().all(|p| p.chars().count() <= 400 + REBUILD.len()));
        assert!(parts[parts.len() - 1].ends_with(&format!("\n\n{REBUILD}")));
        assert!(output.contains("Жим 39"));
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(&dir, &store());
        let user_id = UserID::from(1);

        assert_eq!(
            clear(&settings, &user_id).unwrap(),
            "Deleted program of user 1"
        );
        assert_eq!(
            clear(&settings, &user_id).unwrap(),
            "No program stored for user 1"
        );
        assert_eq!(show(&settings, &user_id).unwrap(), days_prompt());
    }

    #[test]
    fn test_families() {
        assert_eq!(
            families(None).lines().collect::<Vec<_>>(),
            vec![
                "fullbody2 (2 days): FullBody 2.0",
                "fullbody3 (3 days): FullBody 3.0",
                "hybrid3 (3 days): 3 day гибрид верх/низа и фулбади",
                "upperlower4 (4 days): 4 day верх/низ",
                "frontback4 (4 days): 4 day перед/зад",
            ]
        );
        assert!(
            families(Some(4))
                .ends_with("\n\n[4 day верх/низ]\n[4 day перед/зад]\n[⬅️ Назад]")
        );
    }

    #[test]
    fn test_format_message() {
        assert_eq!(format_message(&Message::new("text", None)), "text");
        assert_eq!(
            format_message(&Message::new("text", Some(Keyboard::rebuild_program()))),
            format!("text\n\n{REBUILD}")
        );
    }
}
