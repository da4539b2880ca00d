//! 实体类型映射
//!
//! 每个实体对应一个 GraphQL object，每个字段都有自己的 resolver，
//! resolver 从父值中取出仓库返回的 [`KeywordInfo`] / [`ProjectInfo`]。

use crate::models::GraphQLResultExt;
use crate::schema::scalars::{self, DATE_SCALAR};
use crate::services::ProjectServiceTrait;
use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, TypeRef};
use async_graphql::Value;
use database::{KeywordInfo, ProjectInfo};

pub const KEYWORD_TYPE: &str = "Keyword";
pub const PROJECT_TYPE: &str = "Project";

fn keyword_field(name: &str, ty: TypeRef, resolve: fn(&KeywordInfo) -> Value) -> Field {
    Field::new(name, ty, move |ctx| {
        FieldFuture::new(async move {
            let keyword = ctx.parent_value.try_downcast_ref::<KeywordInfo>()?;
            Ok(Some(FieldValue::value(resolve(keyword))))
        })
    })
}

fn project_field(name: &str, ty: TypeRef, resolve: fn(&ProjectInfo) -> Value) -> Field {
    Field::new(name, ty, move |ctx| {
        FieldFuture::new(async move {
            let project = ctx.parent_value.try_downcast_ref::<ProjectInfo>()?;
            Ok(Some(FieldValue::value(resolve(project))))
        })
    })
}

pub fn keyword_object() -> Object {
    Object::new(KEYWORD_TYPE)
        .description("A short unique tag text usable to classify projects")
        .field(keyword_field("id", TypeRef::named_nn(TypeRef::ID), |k| scalars::id_value(k.id)))
        .field(keyword_field("word", TypeRef::named_nn(TypeRef::STRING), |k| Value::String(k.word.clone())))
        .field(keyword_field("date", TypeRef::named_nn(DATE_SCALAR), |k| scalars::date_value(k.date)))
}

/// `Project` 类型
///
/// `keywords` 字段每个项目单独查询一次关联表
pub fn project_object<PS: ProjectServiceTrait>() -> Object {
    Object::new(PROJECT_TYPE)
        .description("A named, dated work item with duration, description and keywords")
        .field(project_field("id", TypeRef::named_nn(TypeRef::ID), |p| scalars::id_value(p.id)))
        .field(project_field("name", TypeRef::named_nn(TypeRef::STRING), |p| Value::String(p.name.clone())))
        .field(project_field("date", TypeRef::named_nn(DATE_SCALAR), |p| scalars::date_value(p.date)))
        .field(
            project_field("duration", TypeRef::named_nn(TypeRef::INT), |p| Value::Number(p.duration.into()))
                .description("Duration in months"),
        )
        .field(project_field("description", TypeRef::named_nn(TypeRef::STRING), |p| {
            Value::String(p.description.clone())
        }))
        .field(Field::new("keywords", TypeRef::named_nn_list_nn(KEYWORD_TYPE), |ctx| {
            FieldFuture::new(async move {
                let project_id = ctx.parent_value.try_downcast_ref::<ProjectInfo>()?.id;
                let keywords = ctx
                    .data::<PS>()?
                    .find_project_keywords(project_id)
                    .await
                    .into_graphql()?;
                Ok(Some(FieldValue::list(keywords.into_iter().map(FieldValue::owned_any))))
            })
        }))
}
