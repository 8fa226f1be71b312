// ==========================================
// Sistema de Cadastro de Pessoas - Erros de importação
// ==========================================
// Ferramenta: macro derive do thiserror
// Só falha no nível da chamada chega aqui como Err: erro de linha
// não aborta o lote, vira DetalheErro dentro do resultado
// ==========================================

use crate::command::CommandError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// Erros da camada de importação
#[derive(Error, Debug)]
pub enum ImportacaoError {
    // ===== Arquivo =====
    #[error("Arquivo não encontrado: {0}")]
    ArquivoNaoEncontrado(String),

    #[error("Falha ao ler o arquivo: {0}")]
    LeituraArquivo(String),

    #[error("Conteúdo do arquivo não está em UTF-8 válido: {0}")]
    CodificacaoInvalida(String),

    #[error("Falha ao processar o CSV: {0}")]
    CsvInvalido(String),

    // ===== Linha =====
    // Uso interno do processamento linha a linha; a mensagem é o que
    // aparece em DetalheErro.mensagem
    #[error("{0}")]
    Linha(String),

    // ===== Genéricos =====
    #[error(transparent)]
    Outro(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportacaoError {
    fn from(err: std::io::Error) -> Self {
        ImportacaoError::LeituraArquivo(err.to_string())
    }
}

impl From<std::str::Utf8Error> for ImportacaoError {
    fn from(err: std::str::Utf8Error) -> Self {
        ImportacaoError::CodificacaoInvalida(err.to_string())
    }
}

impl From<csv::Error> for ImportacaoError {
    fn from(err: csv::Error) -> Self {
        ImportacaoError::CsvInvalido(err.to_string())
    }
}

impl From<CommandError> for ImportacaoError {
    fn from(err: CommandError) -> Self {
        ImportacaoError::Linha(err.to_string())
    }
}

impl From<RepositoryError> for ImportacaoError {
    fn from(err: RepositoryError) -> Self {
        ImportacaoError::Linha(err.to_string())
    }
}

/// Alias de Result da camada
pub type ImportacaoResult<T> = Result<T, ImportacaoError>;
