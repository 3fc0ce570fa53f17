use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::dto::{CategoryDto, ProductDto};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::category::find_all,
        crate::routes::category::find,
        crate::routes::category::create,
        crate::routes::category::edit,
        crate::routes::category::delete,
        crate::routes::category::delete_all,
        crate::routes::product::find_all,
        crate::routes::product::find,
        crate::routes::product::create,
        crate::routes::product::edit,
        crate::routes::product::delete,
        crate::routes::product::delete_all,
    ),
    components(
        schemas(
            HealthResponse,
            CategoryDto,
            ProductDto,
        )
    ),
    tags(
        (name = "health"),
        (name = "category"),
        (name = "product")
    )
)]
pub struct ApiDoc;
