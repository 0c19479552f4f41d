use chrono::{Datelike, NaiveDate};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::models::NavState;
use crate::schedule;

/// Экранирование MarkdownV2
pub fn escape_markdown_v2(text: &str) -> String {
    let specials = ['_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!'];
    let mut out = String::with_capacity(text.len() * 2);

    for ch in text.chars() {
        if specials.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Главное меню
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "📅 Записаться на тренировку",
            NavState::ChooseDay.encode(),
        )],
        vec![InlineKeyboardButton::callback(
            "❌ Отмена записи",
            NavState::Cancel.encode(),
        )],
    ])
}

/// Дни на ближайшие 2 недели, по 2 кнопки в ряд
pub fn make_days_keyboard(today: NaiveDate) -> InlineKeyboardMarkup {
    let buttons: Vec<InlineKeyboardButton> = schedule::candidate_days(today)
        .into_iter()
        .map(|d| {
            InlineKeyboardButton::callback(
                d.format("%a %d.%m").to_string(),
                NavState::ChooseTime(d).encode(),
            )
        })
        .collect();

    let mut keyboard = chunk_buttons(buttons, 2);
    keyboard.push(vec![InlineKeyboardButton::callback(
        "⬅️ Назад",
        NavState::MainMenu.encode(),
    )]);
    InlineKeyboardMarkup::new(keyboard)
}

/// Слоты выбранного дня, по 4 кнопки в ряд
pub fn make_time_keyboard(date: NaiveDate) -> InlineKeyboardMarkup {
    let buttons: Vec<InlineKeyboardButton> = schedule::time_catalog(date.weekday())
        .iter()
        .map(|&t| {
            InlineKeyboardButton::callback(t, NavState::Confirm(date, t.to_string()).encode())
        })
        .collect();

    let mut keyboard = chunk_buttons(buttons, 4);
    keyboard.push(vec![InlineKeyboardButton::callback(
        "⬅️ Назад",
        NavState::ChooseDay.encode(),
    )]);
    InlineKeyboardMarkup::new(keyboard)
}

fn chunk_buttons(
    buttons: Vec<InlineKeyboardButton>,
    per_row: usize,
) -> Vec<Vec<InlineKeyboardButton>> {
    let mut rows = Vec::new();
    let mut row = Vec::with_capacity(per_row);
    for button in buttons {
        row.push(button);
        if row.len() == per_row {
            rows.push(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
