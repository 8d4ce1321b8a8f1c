pub mod auth;
pub mod extract;
pub mod response;

pub use auth::{extract_bearer_token, guarded, require_permission, PermissionGuard};
pub use extract::{JsonBody, ResourceId};
pub use response::{no_content, ApiResult, Created};
