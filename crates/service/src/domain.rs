//! Records exchanged between the HTTP surface, services and repositories.
//!
//! Wire shape: `Cidade` is `{id, nome, comercios}` and `Comercio` is
//! `{id, nome, responsavel, tipo, cidadeId}`. The city of a business
//! round-trips as its foreign key.

use models::{cidade, comercio, TipoComercio};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cidade {
    /// Unset until the store assigns it on insert.
    pub id: Option<i32>,
    pub nome: String,
    /// Owned businesses, ordered by id. Read-only: ignored on save.
    #[serde(default)]
    pub comercios: Vec<Comercio>,
}

impl Cidade {
    pub fn new(nome: impl Into<String>) -> Self {
        Self { id: None, nome: nome.into(), comercios: Vec::new() }
    }

    pub fn from_parts(model: cidade::Model, comercios: Vec<comercio::Model>) -> Self {
        Self {
            id: Some(model.id),
            nome: model.nome,
            comercios: comercios.into_iter().map(Comercio::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comercio {
    pub id: Option<i32>,
    pub nome: String,
    pub responsavel: String,
    pub tipo: TipoComercio,
    pub cidade_id: i32,
}

impl Comercio {
    pub fn new(
        nome: impl Into<String>,
        responsavel: impl Into<String>,
        tipo: TipoComercio,
        cidade_id: i32,
    ) -> Self {
        Self { id: None, nome: nome.into(), responsavel: responsavel.into(), tipo, cidade_id }
    }
}

impl From<comercio::Model> for Comercio {
    fn from(m: comercio::Model) -> Self {
        Self {
            id: Some(m.id),
            nome: m.nome,
            responsavel: m.responsavel,
            tipo: m.tipo,
            cidade_id: m.cidade_id,
        }
    }
}
