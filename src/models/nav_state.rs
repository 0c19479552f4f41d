use chrono::NaiveDate;

const DATE_FMT: &str = "%Y-%m-%d";

/// Этап диалога. Целиком живёт в callback-данных кнопки: сервер не хранит
/// сессий, токен на кнопке — единственный источник состояния.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    MainMenu,
    ChooseDay,
    ChooseTime(NaiveDate),
    Confirm(NaiveDate, String),
    Cancel,
}

impl NavState {
    /// Токен для callback_data. Разделитель `_` не встречается ни в ISO-дате,
    /// ни во времени, поэтому декодирование по числу сегментов однозначно.
    pub fn encode(&self) -> String {
        match self {
            NavState::MainMenu => "back_menu".to_string(),
            NavState::ChooseDay => "choose_day".to_string(),
            NavState::ChooseTime(date) => format!("day_{}", date.format(DATE_FMT)),
            NavState::Confirm(date, time) => format!("time_{}_{}", date.format(DATE_FMT), time),
            NavState::Cancel => "cancel".to_string(),
        }
    }

    /// `None` означает токен, который бот не выпускал, — нарушение
    /// внутреннего инварианта, а не пользовательская ошибка.
    pub fn decode(token: &str) -> Option<NavState> {
        match token {
            "back_menu" => return Some(NavState::MainMenu),
            "choose_day" => return Some(NavState::ChooseDay),
            "cancel" => return Some(NavState::Cancel),
            _ => {}
        }

        if let Some(rest) = token.strip_prefix("day_") {
            let date = NaiveDate::parse_from_str(rest, DATE_FMT).ok()?;
            return Some(NavState::ChooseTime(date));
        }

        if let Some(rest) = token.strip_prefix("time_") {
            let mut parts = rest.splitn(2, '_');
            let date = NaiveDate::parse_from_str(parts.next()?, DATE_FMT).ok()?;
            let time = parts.next()?;
            if time.is_empty() {
                return None;
            }
            return Some(NavState::Confirm(date, time.to_string()));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn round_trip_every_variant() {
        let states = [
            NavState::MainMenu,
            NavState::ChooseDay,
            NavState::ChooseTime(date("2024-05-06")),
            NavState::Confirm(date("2024-05-06"), "09:00".to_string()),
            NavState::Cancel,
        ];

        for state in states {
            assert_eq!(NavState::decode(&state.encode()), Some(state));
        }
    }

    #[test]
    fn round_trip_survives_year_rollover() {
        let state = NavState::Confirm(date("2024-12-31"), "21:00".to_string());
        assert_eq!(NavState::decode(&state.encode()), Some(state.clone()));

        let next = NavState::ChooseTime(date("2025-01-01"));
        assert_eq!(NavState::decode(&next.encode()), Some(next));
    }

    #[test]
    fn wire_format_is_stable() {
        assert_eq!(NavState::MainMenu.encode(), "back_menu");
        assert_eq!(NavState::ChooseDay.encode(), "choose_day");
        assert_eq!(NavState::Cancel.encode(), "cancel");
        assert_eq!(
            NavState::ChooseTime(date("2024-05-06")).encode(),
            "day_2024-05-06"
        );
        assert_eq!(
            NavState::Confirm(date("2024-05-06"), "18:30".to_string()).encode(),
            "time_2024-05-06_18:30"
        );
    }

    #[test]
    fn decode_is_idempotent() {
        let token = "time_2024-05-06_09:00";
        let first = NavState::decode(token);
        assert!(first.is_some());
        assert_eq!(NavState::decode(token), first);
        assert_eq!(NavState::decode(token), first);
    }

    #[test]
    fn foreign_tokens_are_rejected() {
        for token in ["", "day_", "day_06.05.2024", "time_2024-05-06", "time__09:00", "pay_123"] {
            assert_eq!(NavState::decode(token), None, "token {:?}", token);
        }
    }
}
