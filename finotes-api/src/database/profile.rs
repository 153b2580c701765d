use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::{params, OptionalExtension};
use shared_types::UserProfile;

pub async fn get_profile(conn: AsyncDbConnection) -> Result<Option<UserProfile>> {
    let conn = conn.lock().await?;

    let profile = conn
        .query_row(
            "SELECT name, email, phone, currency FROM user_profile WHERE id = 1",
            [],
            |row| {
                Ok(UserProfile {
                    name: row.get(0)?,
                    email: row.get(1)?,
                    phone: row.get(2)?,
                    currency: row.get(3)?,
                })
            },
        )
        .optional()?;

    Ok(profile)
}

pub async fn save_profile(conn: AsyncDbConnection, profile: &UserProfile) -> Result<()> {
    let conn = conn.lock().await?;
    let now = chrono::Utc::now().timestamp();

    conn.execute(
        "INSERT INTO user_profile (id, name, email, phone, currency, updated_at)
            VALUES (1, ?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            email = excluded.email,
            phone = excluded.phone,
            currency = excluded.currency,
            updated_at = excluded.updated_at",
        params![profile.name, profile.email, profile.phone, profile.currency, now],
    )?;

    Ok(())
}

/// Write `defaults` unless a profile is already stored. Returns the stored profile.
pub async fn ensure_profile(conn: AsyncDbConnection, defaults: UserProfile) -> Result<UserProfile> {
    if let Some(existing) = get_profile(conn.clone()).await? {
        return Ok(existing);
    }

    tracing::info!("Seeding default profile for {}", defaults.name);
    save_profile(conn, &defaults).await?;
    Ok(defaults)
}
