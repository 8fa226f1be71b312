// ==========================================
// Sistema de Cadastro de Pessoas - Importador Trait
// ==========================================
// Responsabilidade: interface da importação em lote (sem implementação)
// ==========================================

use crate::domain::ImportacaoResultado;
use crate::importer::error::ImportacaoError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

// ==========================================
// ImportadorPessoas Trait
// ==========================================
// Implementação de produção: ImportadorPessoasImpl
#[async_trait]
pub trait ImportadorPessoas: Send + Sync {
    /// Importa pessoas a partir dos bytes de um arquivo CSV
    ///
    /// Cada linha é validada de forma independente; linha rejeitada
    /// vira DetalheErro e o lote continua. O Err só acontece quando o
    /// conteúdo em si é ilegível (fora de UTF-8).
    ///
    /// # Parâmetros
    /// - bytes: conteúdo do arquivo enviado
    ///
    /// # Retorno
    /// - Ok(ImportacaoResultado): contagens e detalhes por linha
    async fn importar_bytes(&self, bytes: &[u8]) -> Result<ImportacaoResultado, ImportacaoError>;

    /// Importa pessoas a partir de um arquivo no disco
    ///
    /// # Parâmetros
    /// - caminho: caminho do arquivo CSV
    ///
    /// # Retorno
    /// - Ok(ImportacaoResultado): resultado da importação
    /// - Err: arquivo inexistente, ilegível ou fora de UTF-8
    async fn importar_arquivo(&self, caminho: &Path)
        -> Result<ImportacaoResultado, ImportacaoError>;

    /// Importa vários arquivos de uma vez
    ///
    /// Cada arquivo produz um resultado independente, na ordem de
    /// entrada; falha em um arquivo não afeta os demais.
    ///
    /// # Parâmetros
    /// - caminhos: lista de arquivos CSV
    async fn importar_varios(
        &self,
        caminhos: &[PathBuf],
    ) -> Vec<Result<ImportacaoResultado, String>>;
}
