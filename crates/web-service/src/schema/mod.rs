//! GraphQL schema
//!
//! 使用 [`async_graphql::dynamic`] 手写类型映射，而不是派生宏：
//! 每个实体一个 object（见 [`types`]），每个字段一个 resolver。
//!
//! schema 在启动时通过 [`build_schema`] 构建一次，之后不可变，
//! 通过 axum 的共享状态传递给请求处理函数。

use crate::services::{KeywordServiceTrait, ProjectServiceTrait};
use async_graphql::dynamic::{Schema, SchemaError};

pub mod mutation;
pub mod query;
pub mod scalars;
pub mod types;

pub use query::API_DESCRIPTION;

/// 构建 GraphQL schema
///
/// ## 参数
/// - `keyword_service`: 关键词服务，resolver 通过 `ctx.data::<KS>()` 获取
/// - `project_service`: 项目服务，resolver 通过 `ctx.data::<PS>()` 获取
///
/// 内省（introspection）默认开启，所有类型和字段都可以被客户端发现。
pub fn build_schema<KS, PS>(keyword_service: KS, project_service: PS) -> Result<Schema, SchemaError>
where
    KS: KeywordServiceTrait,
    PS: ProjectServiceTrait,
{
    let builder = Schema::build(query::QUERY_TYPE, Some(mutation::MUTATION_TYPE), None)
        .register(scalars::date_scalar())
        .register(types::keyword_object())
        .register(types::project_object::<PS>())
        .register(query::query_object::<KS, PS>())
        .register(mutation::mutation_object::<KS, PS>());

    mutation::payload_objects()
        .into_iter()
        .fold(builder, |builder, payload| builder.register(payload))
        .data(keyword_service)
        .data(project_service)
        .finish()
}
