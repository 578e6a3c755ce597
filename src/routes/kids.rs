use axum::Json;

use crate::{
    error::ApiResult,
    middleware::{
        extract::{ApiJson, ApiPath, ApiQuery},
        session::Session,
    },
    models::{
        common::{Collection, ListParams, Message},
        kid::{KidCreate, KidPublic, KidPublicDetailed, KidUpdate},
    },
    services::kids::KidService,
};

pub async fn list_kids(
    mut session: Session,
    ApiQuery(params): ApiQuery<ListParams>,
) -> ApiResult<Json<Collection<KidPublic>>> {
    KidService::list(&mut session, params).await.map(Json)
}

pub async fn read_kid(
    mut session: Session,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<KidPublicDetailed>> {
    KidService::get(&mut session, id).await.map(Json)
}

pub async fn create_kid(
    mut session: Session,
    ApiJson(body): ApiJson<KidCreate>,
) -> ApiResult<Json<KidPublicDetailed>> {
    KidService::create(&mut session, &body).await.map(Json)
}

pub async fn update_kid(
    mut session: Session,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<KidUpdate>,
) -> ApiResult<Json<KidPublic>> {
    KidService::update(&mut session, id, &body).await.map(Json)
}

pub async fn delete_kid(
    mut session: Session,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Message>> {
    KidService::delete(&mut session, id).await.map(Json)
}
