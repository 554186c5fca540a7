use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a stored product.
#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::update,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            crate::routes::products::CreateProductInput,
            crate::routes::products::UpdatePriceInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "products", description = "Product catalog")
    )
)]
pub struct ApiDoc;
