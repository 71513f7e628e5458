use std::str::FromStr;

use sea_orm::sea_query::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::errors::ModelError;

/// Closed set of business categories. Persisted and serialized by symbolic name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoComercio {
    #[sea_orm(string_value = "FARMACIA")]
    Farmacia,
    #[sea_orm(string_value = "PADARIA")]
    Padaria,
    #[sea_orm(string_value = "POSTO_GASOLINA")]
    PostoGasolina,
    #[sea_orm(string_value = "LANCHONETE")]
    Lanchonete,
}

impl TipoComercio {
    pub const ALL: [TipoComercio; 4] = [
        TipoComercio::Farmacia,
        TipoComercio::Padaria,
        TipoComercio::PostoGasolina,
        TipoComercio::Lanchonete,
    ];

    /// Decode a wire value. Matching is exact: `farmacia` is rejected.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        Self::from_str(raw).map_err(|_| {
            let expected = Self::ALL.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            ModelError::Validation(format!("unknown tipo '{raw}', expected one of: {expected}"))
        })
    }
}
