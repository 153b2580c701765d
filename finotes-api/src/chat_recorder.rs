use crate::database::{chat_messages as chat_db, financial_records as records_db};
use crate::database::AsyncDbConnection;
use crate::helpers::currency::format_idr;
use anyhow::Result;
use shared_types::{
    ChatTurnOutcome, ChatTurnRequest, FinancialRecordCandidate, MessageSender, RecordExtractor,
    RecordSource,
};
use std::sync::Arc;

/// Stores chat turns, sending each assistant reply either to the ledger or to
/// the message log depending on whether a financial record can be read from it.
pub struct ChatTurnRecorder {
    db_conn: AsyncDbConnection,
    extractor: Arc<dyn RecordExtractor + Send + Sync>,
}

impl ChatTurnRecorder {
    pub fn new(db_conn: AsyncDbConnection, extractor: Arc<dyn RecordExtractor + Send + Sync>) -> Self {
        Self { db_conn, extractor }
    }

    /// Run the extractor without storing anything
    pub fn preview(&self, text: &str) -> Option<FinancialRecordCandidate> {
        self.extractor.extract(text)
    }

    pub async fn record_turn(&self, request: &ChatTurnRequest) -> Result<ChatTurnOutcome> {
        chat_db::insert_chat_message(
            self.db_conn.clone(),
            MessageSender::User,
            request.user_message.trim(),
        )
        .await?;

        let Some(candidate) = self.extractor.extract(&request.assistant_reply) else {
            let message = chat_db::insert_chat_message(
                self.db_conn.clone(),
                MessageSender::Assistant,
                request.assistant_reply.trim(),
            )
            .await?;
            tracing::debug!("Stored assistant reply {} as plain message", message.id);
            return Ok(ChatTurnOutcome::Message { message });
        };

        let record = records_db::insert_financial_record(
            self.db_conn.clone(),
            &records_db::record_from_candidate(&candidate, RecordSource::Chat),
        )
        .await?;

        tracing::info!(
            "Recorded {} {} ({}) from chat as record {}",
            record.transaction_type.as_str(),
            format_idr(record.amount),
            record.category,
            record.id
        );

        Ok(ChatTurnOutcome::Record { record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use extractors::TextFinanceExtractor;
    use shared_types::{ExtractorSettings, TransactionType};

    fn recorder(db: &Database) -> ChatTurnRecorder {
        let extractor = TextFinanceExtractor::new(ExtractorSettings::default()).unwrap();
        ChatTurnRecorder::new(db.connection.clone(), Arc::new(extractor))
    }

    #[actix_web::test]
    async fn test_reply_with_amount_becomes_record() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("test.sqlite3")).unwrap();

        let outcome = recorder(&db)
            .record_turn(&ChatTurnRequest {
                user_message: "tadi makan siang 45rb".to_string(),
                assistant_reply: "💸 Makan siang 45rb\nKategori: makanan".to_string(),
            })
            .await
            .unwrap();

        match outcome {
            ChatTurnOutcome::Record { record } => {
                assert_eq!(record.amount, 45_000.0);
                assert_eq!(record.category, "makanan");
                assert_eq!(record.transaction_type, TransactionType::Expense);
                assert_eq!(record.source, RecordSource::Chat);
            }
            other => panic!("Expected record outcome, got {:?}", other),
        }

        let records = records_db::list_financial_records(db.connection.clone(), 10)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);

        // Only the user's side lands in the message log
        let messages = chat_db::list_chat_messages(db.connection.clone(), 10)
            .await
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, MessageSender::User);
    }

    #[actix_web::test]
    async fn test_reply_without_amount_becomes_message() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("test.sqlite3")).unwrap();

        let outcome = recorder(&db)
            .record_turn(&ChatTurnRequest {
                user_message: "halo".to_string(),
                assistant_reply: "Halo! Ada yang bisa saya bantu?".to_string(),
            })
            .await
            .unwrap();

        match outcome {
            ChatTurnOutcome::Message { message } => {
                assert_eq!(message.sender, MessageSender::Assistant);
                assert_eq!(message.text, "Halo! Ada yang bisa saya bantu?");
            }
            other => panic!("Expected message outcome, got {:?}", other),
        }

        let records = records_db::list_financial_records(db.connection.clone(), 10)
            .await
            .unwrap();
        assert!(records.is_empty());

        let messages = chat_db::list_chat_messages(db.connection.clone(), 10)
            .await
            .unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[actix_web::test]
    async fn test_preview_does_not_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("test.sqlite3")).unwrap();

        let candidate = recorder(&db).preview("💰 Gaji 5jt").unwrap();
        assert_eq!(candidate.transaction_type, TransactionType::Income);
        assert_eq!(candidate.amount, 5_000_000.0);

        let records = records_db::list_financial_records(db.connection.clone(), 10)
            .await
            .unwrap();
        assert!(records.is_empty());
    }
}
