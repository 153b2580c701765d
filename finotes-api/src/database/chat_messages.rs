use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::params;
use shared_types::{ChatMessage, MessageSender};

pub async fn insert_chat_message(
    conn: AsyncDbConnection,
    sender: MessageSender,
    text: &str,
) -> Result<ChatMessage> {
    let conn = conn.lock().await?;
    let now = chrono::Utc::now().timestamp();

    let id: i64 = conn.query_row(
        "INSERT INTO chat_messages (sender, text, created_at)
            VALUES (?1, ?2, ?3) RETURNING id",
        params![sender.as_str(), text, now],
        |row| row.get(0),
    )?;

    Ok(ChatMessage {
        id,
        sender,
        text: text.to_string(),
        created_at: now,
    })
}

/// The latest `limit` messages, oldest first so they read top to bottom
pub async fn list_chat_messages(conn: AsyncDbConnection, limit: usize) -> Result<Vec<ChatMessage>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(
        "SELECT id, sender, text, created_at FROM (
            SELECT id, sender, text, created_at
            FROM chat_messages
            ORDER BY id DESC
            LIMIT ?
         ) ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([limit as i64], |row| {
        let sender_str: String = row.get(1)?;
        Ok(ChatMessage {
            id: row.get(0)?,
            sender: MessageSender::parse(&sender_str).unwrap_or(MessageSender::Assistant),
            text: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    let mut messages = Vec::new();
    for row_result in rows {
        messages.push(row_result?);
    }

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;

    #[actix_web::test]
    async fn test_latest_messages_in_reading_order() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("test.sqlite3")).unwrap();

        for (sender, text) in [
            (MessageSender::User, "halo"),
            (MessageSender::Assistant, "Halo! Ada yang bisa dibantu?"),
            (MessageSender::User, "tips hemat dong"),
        ] {
            insert_chat_message(db.connection.clone(), sender, text)
                .await
                .unwrap();
        }

        let messages = list_chat_messages(db.connection.clone(), 2).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, MessageSender::Assistant);
        assert_eq!(messages[1].text, "tips hemat dong");
        assert!(messages[0].id < messages[1].id);
    }
}
