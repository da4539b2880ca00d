pub mod err;

pub use err::{AppError, AppResult, GraphQLResultExt};
