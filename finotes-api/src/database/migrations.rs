use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    // Ledger entries, from chat turns and from the ledger tab
    conn.execute(
        "CREATE TABLE IF NOT EXISTS financial_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description VARCHAR NOT NULL,
            amount DOUBLE NOT NULL CHECK (amount > 0),
            transaction_type VARCHAR NOT NULL CHECK (transaction_type IN ('income', 'expense')),
            category VARCHAR NOT NULL,
            source VARCHAR NOT NULL CHECK (source IN ('chat', 'manual')),
            occurred_on VARCHAR NOT NULL,
            created_at BIGINT NOT NULL
        )",
        [],
    )?;

    // Chat turns that did not describe a financial record
    conn.execute(
        "CREATE TABLE IF NOT EXISTS chat_messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sender VARCHAR NOT NULL CHECK (sender IN ('user', 'assistant')),
            text VARCHAR NOT NULL,
            created_at BIGINT NOT NULL
        )",
        [],
    )?;

    // Single-row profile
    conn.execute(
        "CREATE TABLE IF NOT EXISTS user_profile (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            name VARCHAR NOT NULL,
            email VARCHAR NOT NULL,
            phone VARCHAR NOT NULL,
            currency VARCHAR NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    // Create indexes for performance
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_financial_records_occurred_on ON financial_records(occurred_on DESC)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_financial_records_type_category ON financial_records(transaction_type, category)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_chat_messages_created_at ON chat_messages(created_at DESC)",
        [],
    )?;

    Ok(())
}
