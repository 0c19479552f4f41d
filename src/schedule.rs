use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Europe::Moscow;

/// Рабочие дни: Пн–Чт и Сб. Пятница и воскресенье — выходные.
pub const WORK_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Sat,
];

/// Горизонт записи — ближайшие 2 недели.
pub const HORIZON_DAYS: i64 = 14;

const WEEKDAY_SLOTS: [&str; 13] = [
    "07:00", "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00",
    "18:30", "19:00", "20:00", "21:00",
];

const SATURDAY_SLOTS: [&str; 9] = [
    "07:00", "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00",
];

/// Текущая дата по Москве.
pub fn local_today() -> NaiveDate {
    Utc::now().with_timezone(&Moscow).date_naive()
}

/// Дни в пределах горизонта, на которые вообще можно записаться.
pub fn candidate_days(today: NaiveDate) -> Vec<NaiveDate> {
    (0..HORIZON_DAYS)
        .map(|i| today + Duration::days(i))
        .filter(|d| WORK_DAYS.contains(&d.weekday()))
        .collect()
}

/// Расписание слотов для дня недели. Для нерабочих дней — пусто.
pub fn time_catalog(weekday: Weekday) -> &'static [&'static str] {
    match weekday {
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => &WEEKDAY_SLOTS,
        Weekday::Sat => &SATURDAY_SLOTS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn candidate_days_match_work_days_over_horizon() {
        let today = date("2024-05-06");
        let days = candidate_days(today);

        for i in 0..HORIZON_DAYS {
            let d = today + Duration::days(i);
            assert_eq!(
                days.contains(&d),
                WORK_DAYS.contains(&d.weekday()),
                "day {} classified incorrectly",
                d
            );
        }
        // 2 недели по 5 рабочих дней
        assert_eq!(days.len(), 10);
    }

    #[test]
    fn candidate_days_from_monday_skip_friday_and_sunday() {
        let days = candidate_days(date("2024-05-06"));

        let expected: Vec<NaiveDate> = [
            "2024-05-06", // Пн
            "2024-05-07", // Вт
            "2024-05-08", // Ср
            "2024-05-09", // Чт
            "2024-05-11", // Сб
            "2024-05-13", // Пн
        ]
        .iter()
        .map(|s| date(s))
        .collect();

        assert_eq!(&days[..6], &expected[..]);
        assert!(!days.contains(&date("2024-05-10"))); // Пт
        assert!(!days.contains(&date("2024-05-12"))); // Вс
    }

    #[test]
    fn candidate_days_are_chronological() {
        let days = candidate_days(date("2024-12-28"));
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn catalog_is_identical_monday_through_thursday() {
        let monday = time_catalog(Weekday::Mon);
        assert_eq!(monday.len(), 13);
        for wd in [Weekday::Tue, Weekday::Wed, Weekday::Thu] {
            assert_eq!(time_catalog(wd), monday);
        }
        // разрыв 15:00 -> 18:30 и нерегулярный вечерний слот
        assert_eq!(monday[8], "15:00");
        assert_eq!(monday[9], "18:30");
    }

    #[test]
    fn catalog_saturday_is_morning_only() {
        let sat = time_catalog(Weekday::Sat);
        assert_eq!(sat.len(), 9);
        assert_eq!(sat.first(), Some(&"07:00"));
        assert_eq!(sat.last(), Some(&"15:00"));
    }

    #[test]
    fn catalog_is_empty_on_days_off() {
        assert!(time_catalog(Weekday::Fri).is_empty());
        assert!(time_catalog(Weekday::Sun).is_empty());
    }
}
