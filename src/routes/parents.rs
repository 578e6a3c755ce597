use axum::Json;

use crate::{
    error::ApiResult,
    middleware::{
        extract::{ApiJson, ApiPath, ApiQuery},
        session::Session,
    },
    models::{
        common::{Collection, ListParams, Message},
        parent::{ParentCreate, ParentPublic, ParentPublicDetailed, ParentUpdate},
    },
    services::parents::ParentService,
};

pub async fn list_parents(
    mut session: Session,
    ApiQuery(params): ApiQuery<ListParams>,
) -> ApiResult<Json<Collection<ParentPublic>>> {
    ParentService::list(&mut session, params).await.map(Json)
}

pub async fn read_parent(
    mut session: Session,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<ParentPublicDetailed>> {
    ParentService::get(&mut session, id).await.map(Json)
}

pub async fn create_parent(
    mut session: Session,
    ApiJson(body): ApiJson<ParentCreate>,
) -> ApiResult<Json<ParentPublicDetailed>> {
    ParentService::create(&mut session, &body).await.map(Json)
}

pub async fn update_parent(
    mut session: Session,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<ParentUpdate>,
) -> ApiResult<Json<ParentPublic>> {
    ParentService::update(&mut session, id, &body).await.map(Json)
}

pub async fn delete_parent(
    mut session: Session,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Message>> {
    ParentService::delete(&mut session, id).await.map(Json)
}
