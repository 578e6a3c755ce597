use sqlx::{Connection, SqliteConnection};
use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::{
        common::{Collection, ListParams, Message},
        parent::{Parent, ParentBase, ParentCreate, ParentPublic, ParentPublicDetailed, ParentUpdate},
    },
    services::{
        kids::{KidService, KID_NOT_FOUND},
        links::LinkService,
        metrics,
    },
};

pub const PARENT_NOT_FOUND: &str = "Parent not found";

pub struct ParentService;

impl ParentService {
    pub async fn list(
        conn: &mut SqliteConnection,
        params: ListParams,
    ) -> ApiResult<Collection<ParentPublic>> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM parent")
            .fetch_one(&mut *conn)
            .await?;
        let parents = sqlx::query_as::<_, Parent>(
            "SELECT id, name_and_surname, email
             FROM parent
             ORDER BY id
             LIMIT ? OFFSET ?",
        )
        .bind(params.limit)
        .bind(params.skip)
        .fetch_all(&mut *conn)
        .await?;

        Ok(Collection {
            data: parents.into_iter().map(ParentPublic::from).collect(),
            count,
        })
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> ApiResult<Option<Parent>> {
        let parent = sqlx::query_as::<_, Parent>(
            "SELECT id, name_and_surname, email FROM parent WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(parent)
    }

    pub async fn get(conn: &mut SqliteConnection, id: i64) -> ApiResult<ParentPublicDetailed> {
        let parent = Self::find(conn, id)
            .await?
            .ok_or(ApiError::NotFound(PARENT_NOT_FOUND))?;
        let kids = LinkService::kids_of_parent(conn, parent.id).await?;
        Ok(parent.detailed(kids.into_iter().map(Into::into).collect()))
    }

    pub async fn insert(conn: &mut SqliteConnection, base: &ParentBase) -> ApiResult<Parent> {
        let parent = sqlx::query_as::<_, Parent>(
            "INSERT INTO parent (name_and_surname, email)
             VALUES (?, ?)
             RETURNING id, name_and_surname, email",
        )
        .bind(&base.name_and_surname)
        .bind(&base.email)
        .fetch_one(&mut *conn)
        .await?;
        Ok(parent)
    }

    /// Stores the parent, then links the requested kids.
    ///
    /// Same commit behaviour as [`KidService::create`]: an unknown kid id fails the
    /// call and drops every link of this request, the parent row is kept.
    pub async fn create(
        conn: &mut SqliteConnection,
        req: &ParentCreate,
    ) -> ApiResult<ParentPublicDetailed> {
        let parent = Self::insert(conn, &req.base).await?;
        metrics::record_write("parent", "create");
        info!(parent_id = parent.id, kid_ids = ?req.kid_ids(), "Parent created");

        let mut linked = 0;
        let mut tx = conn.begin().await?;
        for &kid_id in req.kid_ids() {
            if KidService::find(&mut tx, kid_id).await?.is_none() {
                warn!(parent_id = parent.id, kid_id, "Kid to link not found, parent kept without links");
                return Err(ApiError::NotFound(KID_NOT_FOUND));
            }
            if LinkService::link(&mut tx, parent.id, kid_id).await? {
                linked += 1;
            }
        }
        tx.commit().await?;
        metrics::record_writes("link", "create", linked);

        let kids = LinkService::kids_of_parent(conn, parent.id).await?;
        Ok(parent.detailed(kids.into_iter().map(Into::into).collect()))
    }

    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        req: &ParentUpdate,
    ) -> ApiResult<ParentPublic> {
        let mut parent = Self::find(conn, id)
            .await?
            .ok_or(ApiError::NotFound(PARENT_NOT_FOUND))?;
        req.apply_to(&mut parent);

        let parent = sqlx::query_as::<_, Parent>(
            "UPDATE parent
             SET name_and_surname = ?, email = ?
             WHERE id = ?
             RETURNING id, name_and_surname, email",
        )
        .bind(&parent.name_and_surname)
        .bind(&parent.email)
        .bind(parent.id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(ApiError::NotFound(PARENT_NOT_FOUND))?;

        metrics::record_write("parent", "update");
        info!(parent_id = parent.id, "Parent updated");
        Ok(parent.into())
    }

    /// Deletes the parent. Its links go with it through the foreign key cascade.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> ApiResult<Message> {
        let result = sqlx::query("DELETE FROM parent WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(PARENT_NOT_FOUND));
        }

        metrics::record_write("parent", "delete");
        info!(parent_id = id, "Parent deleted");
        Ok(Message::new("Parent deleted successfully"))
    }
}
