// ==========================================
// Sistema de Cadastro de Pessoas - Camada de API
// ==========================================
// Responsabilidade: expor as operações de negócio para a CLI
// ==========================================

pub mod error;
pub mod importacao_api;
pub mod pessoa_api;

// Reexporta tipos centrais
pub use error::{ApiError, ApiResult};
pub use importacao_api::{ImportacaoApi, ModeloImportacaoResponse};
pub use pessoa_api::PessoaApi;
