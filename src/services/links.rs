use sqlx::SqliteConnection;

use crate::models::{kid::Kid, parent::Parent};

/// Reads and writes of `parentkidlink`.
///
/// Both directions of the kid/parent relationship come from this one table, so a
/// link is always visible from the kid and from the parent at the same time.
pub struct LinkService;

impl LinkService {
    pub async fn parents_of_kid(
        conn: &mut SqliteConnection,
        kid_id: i64,
    ) -> Result<Vec<Parent>, sqlx::Error> {
        sqlx::query_as::<_, Parent>(
            "SELECT p.id, p.name_and_surname, p.email
             FROM parent p
             JOIN parentkidlink l ON l.parent_id = p.id
             WHERE l.kid_id = ?
             ORDER BY p.id",
        )
        .bind(kid_id)
        .fetch_all(&mut *conn)
        .await
    }

    pub async fn kids_of_parent(
        conn: &mut SqliteConnection,
        parent_id: i64,
    ) -> Result<Vec<Kid>, sqlx::Error> {
        sqlx::query_as::<_, Kid>(
            "SELECT k.id, k.name, k.first_surname, k.second_surname
             FROM kid k
             JOIN parentkidlink l ON l.kid_id = k.id
             WHERE l.parent_id = ?
             ORDER BY k.id",
        )
        .bind(parent_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Adds the pair if it is not already linked. Returns whether a row was inserted.
    pub async fn link(
        conn: &mut SqliteConnection,
        parent_id: i64,
        kid_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO parentkidlink (parent_id, kid_id)
             VALUES (?, ?)
             ON CONFLICT (parent_id, kid_id) DO NOTHING",
        )
        .bind(parent_id)
        .bind(kid_id)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
