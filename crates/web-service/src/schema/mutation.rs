//! 变更入口
//!
//! 每个变更返回一个 payload 对象，payload 中的字段以实体类型命名（`keyword` / `project`），
//! 值为变更后的实体；删除操作返回删除前的实体。

use crate::models::GraphQLResultExt;
use crate::schema::scalars::{parse_date, parse_id, parse_int, DATE_SCALAR};
use crate::schema::types::{KEYWORD_TYPE, PROJECT_TYPE};
use crate::services::{KeywordServiceTrait, ProjectServiceTrait};
use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, Object, TypeRef};
use database::{KeywordCreate, KeywordInfo, KeywordUpdate, ProjectCreate, ProjectInfo, ProjectUpdate};
use std::any::Any;
use tracing::info;

pub const MUTATION_TYPE: &str = "Mutation";

const KEYWORD_PAYLOADS: [&str; 3] = ["CreateKeywordPayload", "UpdateKeywordPayload", "DeleteKeywordPayload"];

const PROJECT_PAYLOADS: [&str; 5] = [
    "CreateProjectPayload",
    "UpdateProjectPayload",
    "DeleteProjectPayload",
    "AddProjectKeywordPayload",
    "RemoveProjectKeywordPayload",
];

/// payload 对象只有一个字段，直接把父值（实体）交给实体类型解析
fn payload_object<T>(type_name: &str, field_name: &str, entity_type: &str) -> Object
where
    T: Any + Clone + Send + Sync,
{
    Object::new(type_name).field(Field::new(field_name, TypeRef::named(entity_type), |ctx| {
        FieldFuture::new(async move {
            let entity = ctx.parent_value.try_downcast_ref::<T>()?.clone();
            Ok(Some(FieldValue::owned_any(entity)))
        })
    }))
}

/// 所有 payload 类型，需要注册到 schema 中
pub fn payload_objects() -> Vec<Object> {
    let keyword_payloads = KEYWORD_PAYLOADS
        .iter()
        .map(|name| payload_object::<KeywordInfo>(name, "keyword", KEYWORD_TYPE));
    let project_payloads = PROJECT_PAYLOADS
        .iter()
        .map(|name| payload_object::<ProjectInfo>(name, "project", PROJECT_TYPE));

    keyword_payloads.chain(project_payloads).collect()
}

pub fn mutation_object<KS, PS>() -> Object
where
    KS: KeywordServiceTrait,
    PS: ProjectServiceTrait,
{
    Object::new(MUTATION_TYPE)
        .field(
            Field::new("createKeyword", TypeRef::named("CreateKeywordPayload"), |ctx| {
                FieldFuture::new(async move {
                    let word = ctx.args.try_get("word")?.string()?.to_string();
                    let keyword = ctx
                        .data::<KS>()?
                        .create_keyword(KeywordCreate { word })
                        .await
                        .into_graphql()?;
                    info!("📝 创建关键词 {} ({})", keyword.id, keyword.word);
                    Ok(Some(FieldValue::owned_any(keyword)))
                })
            })
            .argument(InputValue::new("word", TypeRef::named_nn(TypeRef::STRING))),
        )
        .field(
            Field::new("updateKeyword", TypeRef::named("UpdateKeywordPayload"), |ctx| {
                FieldFuture::new(async move {
                    let id = parse_id(ctx.args.try_get("id")?).into_graphql()?;
                    let word = ctx.args.try_get("word")?.string()?.to_string();
                    let keyword = ctx
                        .data::<KS>()?
                        .update_keyword(id, KeywordUpdate { word })
                        .await
                        .into_graphql()?;
                    info!("🔄 更新关键词 {} ({})", keyword.id, keyword.word);
                    Ok(Some(FieldValue::owned_any(keyword)))
                })
            })
            .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::ID)))
            .argument(InputValue::new("word", TypeRef::named_nn(TypeRef::STRING))),
        )
        .field(
            Field::new("deleteKeyword", TypeRef::named("DeleteKeywordPayload"), |ctx| {
                FieldFuture::new(async move {
                    let id = parse_id(ctx.args.try_get("id")?).into_graphql()?;
                    let keyword = ctx.data::<KS>()?.delete_keyword(id).await.into_graphql()?;
                    info!("🗑️ 删除关键词 {} ({})", keyword.id, keyword.word);
                    Ok(Some(FieldValue::owned_any(keyword)))
                })
            })
            .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::ID))),
        )
        .field(
            Field::new("createProject", TypeRef::named("CreateProjectPayload"), |ctx| {
                FieldFuture::new(async move {
                    let description = match ctx.args.get("description") {
                        Some(value) if !value.is_null() => value.string()?.to_string(),
                        _ => String::new(),
                    };
                    let project = ProjectCreate {
                        name: ctx.args.try_get("name")?.string()?.to_string(),
                        date: parse_date(ctx.args.try_get("date")?).into_graphql()?,
                        duration: parse_int(ctx.args.try_get("duration")?).into_graphql()?,
                        description,
                    };
                    let project = ctx.data::<PS>()?.create_project(project).await.into_graphql()?;
                    info!("📝 创建项目 {} ({})", project.id, project.name);
                    Ok(Some(FieldValue::owned_any(project)))
                })
            })
            .argument(InputValue::new("name", TypeRef::named_nn(TypeRef::STRING)))
            .argument(InputValue::new("date", TypeRef::named_nn(DATE_SCALAR)))
            .argument(InputValue::new("duration", TypeRef::named_nn(TypeRef::INT)).description("Integer in months"))
            .argument(InputValue::new("description", TypeRef::named(TypeRef::STRING))),
        )
        .field(
            Field::new("updateProject", TypeRef::named("UpdateProjectPayload"), |ctx| {
                FieldFuture::new(async move {
                    let id = parse_id(ctx.args.try_get("id")?).into_graphql()?;
                    let name = ctx.args.try_get("name")?.string()?.to_string();
                    let project = ctx
                        .data::<PS>()?
                        .update_project(id, ProjectUpdate { name })
                        .await
                        .into_graphql()?;
                    info!("🔄 更新项目 {} ({})", project.id, project.name);
                    Ok(Some(FieldValue::owned_any(project)))
                })
            })
            .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::ID)))
            .argument(InputValue::new("name", TypeRef::named_nn(TypeRef::STRING))),
        )
        .field(
            Field::new("deleteProject", TypeRef::named("DeleteProjectPayload"), |ctx| {
                FieldFuture::new(async move {
                    let id = parse_id(ctx.args.try_get("id")?).into_graphql()?;
                    let project = ctx.data::<PS>()?.delete_project(id).await.into_graphql()?;
                    info!("🗑️ 删除项目 {} ({})", project.id, project.name);
                    Ok(Some(FieldValue::owned_any(project)))
                })
            })
            .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::ID))),
        )
        .field(
            Field::new("addProjectKeyword", TypeRef::named("AddProjectKeywordPayload"), |ctx| {
                FieldFuture::new(async move {
                    let project_id = parse_id(ctx.args.try_get("projectId")?).into_graphql()?;
                    let keyword_id = parse_id(ctx.args.try_get("keywordId")?).into_graphql()?;
                    let project = ctx
                        .data::<PS>()?
                        .add_project_keyword(project_id, keyword_id)
                        .await
                        .into_graphql()?;
                    Ok(Some(FieldValue::owned_any(project)))
                })
            })
            .argument(InputValue::new("projectId", TypeRef::named_nn(TypeRef::ID)))
            .argument(InputValue::new("keywordId", TypeRef::named_nn(TypeRef::ID))),
        )
        .field(
            Field::new("removeProjectKeyword", TypeRef::named("RemoveProjectKeywordPayload"), |ctx| {
                FieldFuture::new(async move {
                    let project_id = parse_id(ctx.args.try_get("projectId")?).into_graphql()?;
                    let keyword_id = parse_id(ctx.args.try_get("keywordId")?).into_graphql()?;
                    let project = ctx
                        .data::<PS>()?
                        .remove_project_keyword(project_id, keyword_id)
                        .await
                        .into_graphql()?;
                    Ok(Some(FieldValue::owned_any(project)))
                })
            })
            .argument(InputValue::new("projectId", TypeRef::named_nn(TypeRef::ID)))
            .argument(InputValue::new("keywordId", TypeRef::named_nn(TypeRef::ID))),
        )
}
