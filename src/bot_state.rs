use teloxide::types::ChatId;

use crate::config::BotConfig;
use crate::ledger::BookingLedger;

/// Контекст приложения: собирается один раз в main и передаётся в каждый
/// обработчик через dptree, без глобальных синглтонов.
#[derive(Clone)]
pub struct BotState {
    pub ledger: BookingLedger,
    pub admin_chat: ChatId,
}

impl BotState {
    pub fn new(config: &BotConfig) -> Self {
        Self {
            ledger: BookingLedger::new(&config.bookings_file),
            admin_chat: config.admin_chat,
        }
    }
}
