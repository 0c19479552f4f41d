use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::models::BookingRecord;

const HEADER: &str = "Date,Time,UserID,Username,Status";

#[derive(Debug)]
pub enum LedgerError {
    Io(std::io::Error),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::Io(e) => write!(f, "Ledger I/O error: {}", e),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Io(err)
    }
}

/// Журнал записей: CSV-файл, только дописывание в конец. Строки не
/// редактируются и не удаляются; уникальность слотов не проверяется,
/// повторная запись на тот же слот добавит вторую строку.
///
/// Все записи проходят через один мьютекс, поэтому параллельные обработчики
/// не перемешивают и не теряют строки.
#[derive(Clone)]
pub struct BookingLedger {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl BookingLedger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Дописывает одну строку; при первом обращении создаёт файл с заголовком.
    pub async fn append(&self, record: &BookingRecord) -> Result<(), LedgerError> {
        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let mut buf = String::new();
        if file.metadata().await?.len() == 0 {
            buf.push_str(HEADER);
            buf.push('\n');
        }
        buf.push_str(&format_row(record));
        buf.push('\n');

        file.write_all(buf.as_bytes()).await?;
        file.flush().await?;

        log::debug!(
            "📒 Ledger row appended: {} {} {:?} for user {}",
            record.date,
            record.time,
            record.status,
            record.user_id
        );
        Ok(())
    }
}

fn format_row(record: &BookingRecord) -> String {
    [
        csv_field(&record.date),
        csv_field(&record.time),
        record.user_id.to_string(),
        csv_field(&record.username),
        record.status.as_str().to_string(),
    ]
    .join(",")
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
