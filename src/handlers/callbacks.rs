use std::error::Error;

use chrono::NaiveDate;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot_state::BotState;
use crate::handlers::utils::{
    escape_markdown_v2, main_menu_keyboard, make_days_keyboard, make_time_keyboard,
};
use crate::models::{BookingRecord, NavState};
use crate::notify;
use crate::schedule;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };

    // Транспорт возвращает только токены, выпущенные самим ботом; чужой
    // токен — нарушение инварианта, а не пользовательская ошибка.
    let Some(nav) = NavState::decode(data) else {
        log::warn!("Unexpected callback token {:?} from user {}", data, q.from.id);
        bot.answer_callback_query(q.id.clone()).await?;
        return Ok(());
    };

    match nav {
        NavState::MainMenu => {
            if let Some(ref message) = q.message {
                bot.edit_message_text(message.chat().id, message.id(), "Главное меню:")
                    .reply_markup(main_menu_keyboard())
                    .await?;
            }
            bot.answer_callback_query(q.id.clone()).await?;
        }

        NavState::ChooseDay => {
            if let Some(ref message) = q.message {
                bot.edit_message_text(message.chat().id, message.id(), "Выбери день:")
                    .reply_markup(make_days_keyboard(schedule::local_today()))
                    .await?;
            }
            bot.answer_callback_query(q.id.clone()).await?;
        }

        NavState::ChooseTime(date) => {
            if let Some(ref message) = q.message {
                bot.edit_message_text(
                    message.chat().id,
                    message.id(),
                    format!(
                        "Выбери время для *{}*:",
                        escape_markdown_v2(&date.format("%Y-%m-%d").to_string())
                    ),
                )
                .parse_mode(ParseMode::MarkdownV2)
                .reply_markup(make_time_keyboard(date))
                .await?;
            }
            bot.answer_callback_query(q.id.clone()).await?;
        }

        NavState::Confirm(date, time) => {
            handle_confirm(&bot, &q, &state, date, &time).await?;
        }

        NavState::Cancel => {
            handle_cancel(&bot, &q, &state).await?;
        }
    }

    Ok(())
}

/// Терминальный шаг записи: строка в журнал, подтверждение пользователю,
/// уведомление админу. Ошибка журнала прерывает обработку события;
/// ошибка уведомления админа гасится внутри notify.
async fn handle_confirm(
    bot: &Bot,
    q: &CallbackQuery,
    state: &BotState,
    date: NaiveDate,
    time: &str,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let record = BookingRecord::booked(date, time, &q.from);
    state.ledger.append(&record).await?;

    let booking_text = format!(
        "✅ Запись подтверждена\\!\n📅 Дата: {}\n⏰ Время: {}",
        escape_markdown_v2(&record.date),
        escape_markdown_v2(&record.time)
    );
    notify::confirm_booking(bot, q, booking_text, "Запись успешно создана!").await?;

    notify::alert_admin(
        bot,
        state.admin_chat,
        &format!(
            "📌 Новая запись!\n👤 Пользователь: {}\n📅 Дата: {}\n⏰ Время: {}",
            record.user_label(),
            record.date,
            record.time
        ),
    )
    .await;

    log::info!("Booking {} {} recorded for user {}", record.date, record.time, record.user_id);
    Ok(())
}

/// Отмена глобальная и без даты: никакой валидации слота не выполняется.
async fn handle_cancel(
    bot: &Bot,
    q: &CallbackQuery,
    state: &BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let record = BookingRecord::cancelled(&q.from);
    state.ledger.append(&record).await?;

    notify::confirm_booking(
        bot,
        q,
        "❌ Ваша запись отменена\\.".to_string(),
        "Отмена выполнена",
    )
    .await?;

    notify::alert_admin(
        bot,
        state.admin_chat,
        &format!("⚠️ Пользователь {} отменил запись.", record.user_label()),
    )
    .await;

    log::info!("Cancellation recorded for user {}", record.user_id);
    Ok(())
}
