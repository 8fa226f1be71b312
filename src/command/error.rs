// ==========================================
// Sistema de Cadastro de Pessoas - Erros de comando
// ==========================================
// A variante Validacao exibe a mensagem crua: ela é repassada
// para o usuário (e para DetalheErro.mensagem na importação)
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// Erros da camada de comandos
#[derive(Error, Debug)]
pub enum CommandError {
    // ===== Regras de negócio =====
    #[error("{0}")]
    Validacao(String),

    // ===== Infraestrutura =====
    #[error("Falha de infraestrutura: {0}")]
    Infraestrutura(String),

    // ===== Genéricos =====
    #[error(transparent)]
    Outro(#[from] anyhow::Error),
}

impl From<RepositoryError> for CommandError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // Cobre também a corrida entre a checagem de unicidade e a escrita
            RepositoryError::CpfDuplicado(_) => {
                CommandError::Validacao("CPF já cadastrado".to_string())
            }
            outro => CommandError::Infraestrutura(outro.to_string()),
        }
    }
}
