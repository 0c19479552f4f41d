use std::error::Error;

use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::handlers::utils::main_menu_keyboard;

/// Итоговое подтверждение пользователю: заменяет сообщение с кнопками на
/// финальный текст и закрывает «часики» на кнопке. Ошибка здесь — ошибка
/// всей операции, она не гасится.
pub async fn confirm_booking(
    bot: &Bot,
    q: &CallbackQuery,
    text: String,
    toast: &str,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Some(ref message) = q.message {
        bot.edit_message_text(message.chat().id, message.id(), text)
            .parse_mode(ParseMode::MarkdownV2)
            .reply_markup(main_menu_keyboard())
            .await?;
    }
    bot.answer_callback_query(q.id.clone()).text(toast).await?;
    Ok(())
}

/// Уведомление админу. Отправляется один раз, без повторов; сбой логируется
/// и не влияет ни на запись в журнале, ни на подтверждение пользователю.
pub async fn alert_admin(bot: &Bot, admin_chat: ChatId, text: &str) {
    if let Err(e) = bot.send_message(admin_chat, text).await {
        log::error!("Failed to notify admin {}: {}", admin_chat, e);
    }
}

/// Сообщение админу при старте процесса. Не фатально.
pub async fn notify_startup(bot: &Bot, admin_chat: ChatId) {
    match bot.send_message(admin_chat, "✅ Бот запущен и работает.").await {
        Ok(_) => log::info!("Startup notice delivered to admin {}", admin_chat),
        Err(e) => log::error!("Failed to send startup notice to admin: {}", e),
    }
}
