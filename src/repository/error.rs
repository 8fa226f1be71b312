// ==========================================
// Sistema de Cadastro de Pessoas - Erros do repositório
// ==========================================
// Ferramenta: macro derive do thiserror
// A violação de unicidade do CPF ganha variante própria para a
// camada de comandos poder traduzi-la em mensagem de negócio
// ==========================================

use thiserror::Error;

/// Erros da camada de repositório
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Erros de banco de dados =====
    #[error("Registro não encontrado: {entity} com id={id}")]
    NotFound { entity: String, id: String },

    #[error("Falha na conexão com o banco: {0}")]
    DatabaseConnectionError(String),

    #[error("Falha ao obter lock do banco: {0}")]
    LockError(String),

    #[error("Falha na transação: {0}")]
    DatabaseTransactionError(String),

    #[error("Falha na consulta: {0}")]
    DatabaseQueryError(String),

    // ===== Regras de unicidade =====
    #[error("CPF já cadastrado")]
    CpfDuplicado(String),

    // ===== Genéricos =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    // A única coluna UNIQUE do schema é pessoa.cpf
                    RepositoryError::CpfDuplicado(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Desconhecido".to_string(),
                id: "Desconhecido".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Alias de Result da camada
pub type RepositoryResult<T> = Result<T, RepositoryError>;
