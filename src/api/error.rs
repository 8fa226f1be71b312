// ==========================================
// Sistema de Cadastro de Pessoas - Erros da camada de API
// ==========================================
// Responsabilidade: converter erros das camadas internas em
// mensagens prontas para exibição ao usuário
// ==========================================

use crate::command::CommandError;
use crate::importer::ImportacaoError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// Erros da camada de API
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Erros de regra de negócio
    // ==========================================
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),

    #[error("Recurso não encontrado: {0}")]
    NotFound(String),

    /// Mensagem de validação repassada sem prefixo: é o texto que o
    /// usuário final lê (ex.: "CPF já cadastrado")
    #[error("{0}")]
    ValidationError(String),

    // ==========================================
    // Erros de acesso a dados
    // ==========================================
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(String),

    #[error("Falha na conexão com o banco: {0}")]
    DatabaseConnectionError(String),

    // ==========================================
    // Erros de importação
    // ==========================================
    #[error("Falha na importação: {0}")]
    ImportError(String),

    // ==========================================
    // Erros genéricos
    // ==========================================
    #[error("Erro interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// Conversão a partir de RepositoryError
// Objetivo: traduzir o erro técnico do repositório em mensagem de
// negócio para o usuário
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={}) não existe", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("Falha ao obter lock do banco: {}", msg))
            }
            RepositoryError::DatabaseTransactionError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::CpfDuplicado(_) => {
                ApiError::ValidationError("CPF já cadastrado".to_string())
            }
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// Conversão a partir de CommandError
// ==========================================
impl From<CommandError> for ApiError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validacao(msg) => ApiError::ValidationError(msg),
            CommandError::Infraestrutura(msg) => ApiError::InternalError(msg),
            CommandError::Outro(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// Conversão a partir de ImportacaoError
// ==========================================
impl From<ImportacaoError> for ApiError {
    fn from(err: ImportacaoError) -> Self {
        match err {
            ImportacaoError::ArquivoNaoEncontrado(caminho) => {
                ApiError::NotFound(format!("Arquivo não encontrado: {}", caminho))
            }
            outro => ApiError::ImportError(outro.to_string()),
        }
    }
}

/// Alias de Result da camada
pub type ApiResult<T> = Result<T, ApiError>;
