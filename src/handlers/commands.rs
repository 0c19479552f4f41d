use std::error::Error;

use teloxide::prelude::*;

use crate::handlers::utils::main_menu_keyboard;
use crate::Command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    match cmd {
        Command::Start => handle_start(bot, msg).await?,
    }
    Ok(())
}

async fn handle_start(bot: Bot, msg: Message) -> Result<(), Box<dyn Error + Send + Sync>> {
    bot.send_message(
        msg.chat.id,
        "Привет! 👋 Я бот для записи на тренировки по плаванию.\nВыбери действие:",
    )
    .reply_markup(main_menu_keyboard())
    .await?;

    Ok(())
}
