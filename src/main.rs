use teloxide::{prelude::*, utils::command::BotCommands};

mod bot_state;
mod config;
mod handlers;
mod ledger;
mod models;
mod notify;
mod schedule;

use crate::bot_state::BotState;
use crate::config::BotConfig;
use crate::handlers::{callback_handler, command_handler};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать запись на тренировку")]
    Start,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Загружаем .env и инициализируем логирование
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Starting swim booking bot...");

    let config = BotConfig::from_env()?;
    let state = BotState::new(&config);
    log::info!("✅ Ledger file: {}", state.ledger.path().display());

    let bot = Bot::new(&config.bot_token);

    // Сообщение админу при запуске; его сбой не мешает старту
    notify::notify_startup(&bot, config.admin_chat).await;

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    log::info!("🚀 Starting dispatcher...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
