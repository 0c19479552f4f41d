use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use teloxide::types::User;

/// Значение колонок «Дата»/«Время» при отмене: отмена глобальная, без даты.
pub const NO_SLOT: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Booked,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "Booked",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

/// Одна строка журнала. После записи в журнал не меняется и не удаляется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub date: String,
    pub time: String,
    pub user_id: u64,
    pub username: String,
    pub status: BookingStatus,
}

impl BookingRecord {
    pub fn booked(date: NaiveDate, time: &str, user: &User) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            time: time.to_string(),
            user_id: user.id.0,
            username: user.username.clone().unwrap_or_default(),
            status: BookingStatus::Booked,
        }
    }

    pub fn cancelled(user: &User) -> Self {
        Self {
            date: NO_SLOT.to_string(),
            time: NO_SLOT.to_string(),
            user_id: user.id.0,
            username: user.username.clone().unwrap_or_default(),
            status: BookingStatus::Cancelled,
        }
    }

    /// Подпись пользователя для уведомлений админу: @username либо числовой id.
    pub fn user_label(&self) -> String {
        if self.username.is_empty() {
            self.user_id.to_string()
        } else {
            format!("@{}", self.username)
        }
    }
}
