//! Tipos de erro do Ramo.

use thiserror::Error;

/// Tipo de resultado padrão do Ramo.
pub type RamoResult<T> = Result<T, RamoError>;

/// Erros possíveis no Ramo.
#[derive(Error, Debug)]
pub enum RamoError {
    #[error("Cap de memoização inválido: {0}")]
    InvalidCap(i64),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Nenhum resolvedor de estilo registrado para o elemento '{0}'")]
    StyleNotRegistered(String),

    #[error("Falha ao computar valor memoizado: {0}")]
    Compute(String),

    #[error("Falha ao resolver chave de cache: {0}")]
    Resolver(String),

    #[error("{0}")]
    Other(String),
}

impl RamoError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de cômputo memoizado.
    pub fn compute<S: Into<String>>(msg: S) -> Self {
        Self::Compute(msg.into())
    }

    /// Cria um erro de resolução de chave.
    pub fn resolver<S: Into<String>>(msg: S) -> Self {
        Self::Resolver(msg.into())
    }
}
