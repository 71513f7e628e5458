use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::{cidades::CidadeInput, comercios::ComercioInput};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a business. `tipo` is one of FARMACIA, PADARIA, POSTO_GASOLINA, LANCHONETE.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComercioDoc {
    pub id: i32,
    pub nome: String,
    pub responsavel: String,
    pub tipo: String,
    pub cidade_id: i32,
}

/// Wire shape of a city with its businesses.
#[derive(ToSchema)]
pub struct CidadeDoc {
    pub id: i32,
    pub nome: String,
    pub comercios: Vec<ComercioDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cidades::list,
        crate::routes::cidades::get,
        crate::routes::cidades::create,
        crate::routes::cidades::update,
        crate::routes::cidades::delete,
        crate::routes::comercios::list,
        crate::routes::comercios::create,
        crate::routes::comercios::update,
        crate::routes::comercios::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CidadeDoc,
            ComercioDoc,
            CidadeInput,
            ComercioInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "cidades"),
        (name = "comercios")
    )
)]
pub struct ApiDoc;
