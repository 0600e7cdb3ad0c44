pub mod missing;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(missing::shopping_list),
    components(schemas(
        missing::ShoppingListRequest,
        missing::ShoppingListResponse,
        souschef_core::ShoppingItem,
    ))
)]
pub struct ApiDoc;
