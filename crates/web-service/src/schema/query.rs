//! 查询入口
//!
//! 每个字段只调用一次服务层方法

use crate::models::GraphQLResultExt;
use crate::schema::scalars::parse_id;
use crate::schema::types::{KEYWORD_TYPE, PROJECT_TYPE};
use crate::services::{KeywordServiceTrait, ProjectServiceTrait};
use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, Object, TypeRef};
use async_graphql::Value;
use tracing::debug;

pub const QUERY_TYPE: &str = "Query";

pub const API_DESCRIPTION: &str = "GraphQL API with CRUD operations of keywords and projects.";

pub fn query_object<KS, PS>() -> Object
where
    KS: KeywordServiceTrait,
    PS: ProjectServiceTrait,
{
    Object::new(QUERY_TYPE)
        .field(Field::new("apiDescription", TypeRef::named_nn(TypeRef::STRING), |_| {
            FieldFuture::new(async move { Ok(Some(Value::String(API_DESCRIPTION.to_string()))) })
        }))
        .field(Field::new("allKeywords", TypeRef::named_nn_list_nn(KEYWORD_TYPE), |ctx| {
            FieldFuture::new(async move {
                debug!("🔍 allKeywords");
                let keywords = ctx.data::<KS>()?.find_keywords().await.into_graphql()?;
                Ok(Some(FieldValue::list(keywords.into_iter().map(FieldValue::owned_any))))
            })
        }))
        .field(Field::new("allProjects", TypeRef::named_nn_list_nn(PROJECT_TYPE), |ctx| {
            FieldFuture::new(async move {
                debug!("🔍 allProjects");
                let projects = ctx.data::<PS>()?.find_projects().await.into_graphql()?;
                Ok(Some(FieldValue::list(projects.into_iter().map(FieldValue::owned_any))))
            })
        }))
        .field(
            Field::new("keywordById", TypeRef::named(KEYWORD_TYPE), |ctx| {
                FieldFuture::new(async move {
                    let id = parse_id(ctx.args.try_get("id")?).into_graphql()?;
                    debug!("🔍 keywordById {}", id);
                    let keyword = ctx.data::<KS>()?.get_keyword_by_id(id).await.into_graphql()?;
                    Ok(Some(FieldValue::owned_any(keyword)))
                })
            })
            .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::INT))),
        )
        .field(
            Field::new("projectById", TypeRef::named(PROJECT_TYPE), |ctx| {
                FieldFuture::new(async move {
                    let id = parse_id(ctx.args.try_get("id")?).into_graphql()?;
                    debug!("🔍 projectById {}", id);
                    let project = ctx.data::<PS>()?.get_project_by_id(id).await.into_graphql()?;
                    Ok(Some(FieldValue::owned_any(project)))
                })
            })
            .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::INT))),
        )
}
