use sqlx::{Connection, SqliteConnection};
use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::{
        common::{Collection, ListParams, Message},
        kid::{Kid, KidBase, KidCreate, KidPublic, KidPublicDetailed, KidUpdate},
    },
    services::{
        links::LinkService,
        metrics,
        parents::{ParentService, PARENT_NOT_FOUND},
    },
};

pub const KID_NOT_FOUND: &str = "Kid not found";

pub struct KidService;

impl KidService {
    pub async fn list(
        conn: &mut SqliteConnection,
        params: ListParams,
    ) -> ApiResult<Collection<KidPublic>> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kid")
            .fetch_one(&mut *conn)
            .await?;
        let kids = sqlx::query_as::<_, Kid>(
            "SELECT id, name, first_surname, second_surname
             FROM kid
             ORDER BY id
             LIMIT ? OFFSET ?",
        )
        .bind(params.limit)
        .bind(params.skip)
        .fetch_all(&mut *conn)
        .await?;

        Ok(Collection {
            data: kids.into_iter().map(KidPublic::from).collect(),
            count,
        })
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> ApiResult<Option<Kid>> {
        let kid = sqlx::query_as::<_, Kid>(
            "SELECT id, name, first_surname, second_surname FROM kid WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(kid)
    }

    pub async fn get(conn: &mut SqliteConnection, id: i64) -> ApiResult<KidPublicDetailed> {
        let kid = Self::find(conn, id)
            .await?
            .ok_or(ApiError::NotFound(KID_NOT_FOUND))?;
        let parents = LinkService::parents_of_kid(conn, kid.id).await?;
        Ok(kid.detailed(parents.into_iter().map(Into::into).collect()))
    }

    pub async fn insert(conn: &mut SqliteConnection, base: &KidBase) -> ApiResult<Kid> {
        let kid = sqlx::query_as::<_, Kid>(
            "INSERT INTO kid (name, first_surname, second_surname)
             VALUES (?, ?, ?)
             RETURNING id, name, first_surname, second_surname",
        )
        .bind(&base.name)
        .bind(&base.first_surname)
        .bind(&base.second_surname)
        .fetch_one(&mut *conn)
        .await?;
        Ok(kid)
    }

    /// Stores the kid, then links the requested parents.
    ///
    /// The kid row is committed before any parent is looked up. The links are
    /// written in one transaction: if a parent id is unknown the call fails with
    /// `NotFound`, none of the links are kept, and the kid stays stored.
    pub async fn create(
        conn: &mut SqliteConnection,
        req: &KidCreate,
    ) -> ApiResult<KidPublicDetailed> {
        let kid = Self::insert(conn, &req.base).await?;
        metrics::record_write("kid", "create");
        info!(kid_id = kid.id, parent_ids = ?req.parent_ids(), "Kid created");

        let mut linked = 0;
        let mut tx = conn.begin().await?;
        for &parent_id in req.parent_ids() {
            if ParentService::find(&mut tx, parent_id).await?.is_none() {
                warn!(kid_id = kid.id, parent_id, "Parent to link not found, kid kept without links");
                return Err(ApiError::NotFound(PARENT_NOT_FOUND));
            }
            if LinkService::link(&mut tx, parent_id, kid.id).await? {
                linked += 1;
            }
        }
        tx.commit().await?;
        metrics::record_writes("link", "create", linked);

        let parents = LinkService::parents_of_kid(conn, kid.id).await?;
        Ok(kid.detailed(parents.into_iter().map(Into::into).collect()))
    }

    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        req: &KidUpdate,
    ) -> ApiResult<KidPublic> {
        let mut kid = Self::find(conn, id)
            .await?
            .ok_or(ApiError::NotFound(KID_NOT_FOUND))?;
        req.apply_to(&mut kid);

        let kid = sqlx::query_as::<_, Kid>(
            "UPDATE kid
             SET name = ?, first_surname = ?, second_surname = ?
             WHERE id = ?
             RETURNING id, name, first_surname, second_surname",
        )
        .bind(&kid.name)
        .bind(&kid.first_surname)
        .bind(&kid.second_surname)
        .bind(kid.id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(ApiError::NotFound(KID_NOT_FOUND))?;

        metrics::record_write("kid", "update");
        info!(kid_id = kid.id, "Kid updated");
        Ok(kid.into())
    }

    /// Deletes the kid. Its links go with it through the foreign key cascade.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> ApiResult<Message> {
        let result = sqlx::query("DELETE FROM kid WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(KID_NOT_FOUND));
        }

        metrics::record_write("kid", "delete");
        info!(kid_id = id, "Kid deleted");
        Ok(Message::new("Kid deleted successfully"))
    }
}
