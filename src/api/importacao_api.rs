// ==========================================
// Sistema de Cadastro de Pessoas - API de importação
// ==========================================
// Responsabilidade: encapsular o fluxo de importação em lote e a
// geração do modelo de planilha para download
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::cache::{CacheStore, MemoryCache};
use crate::command::CriarPessoaHandler;
use crate::config::ConfigManager;
use crate::domain::ImportacaoResultado;
use crate::importer::{GeradorModelo, ImportadorPessoas, ImportadorPessoasImpl};
use crate::repository::PessoaRepositoryImpl;

/// Resposta da geração do modelo de importação
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeloImportacaoResponse {
    /// Nome de arquivo sugerido para o download
    pub nome_arquivo: String,
    /// Conteúdo CSV do modelo (UTF-8)
    pub conteudo: String,
}

/// API de importação
pub struct ImportacaoApi {
    db_path: String,
    cache: Arc<dyn CacheStore>,
}

impl ImportacaoApi {
    /// Cria uma nova instância de ImportacaoApi
    pub fn new(db_path: String) -> Self {
        Self {
            db_path,
            cache: Arc::new(MemoryCache::new()),
        }
    }

    /// Cria a API com um cache compartilhado
    ///
    /// Cada linha criada pela importação invalida a chave da listagem
    /// nesse cache, como na criação individual.
    pub fn with_cache(db_path: String, cache: Arc<dyn CacheStore>) -> Self {
        Self { db_path, cache }
    }

    /// Importa pessoas a partir do conteúdo bruto de um arquivo CSV
    ///
    /// # Parâmetros
    /// - bytes: conteúdo do arquivo
    ///
    /// # Retorno
    /// - Ok(ImportacaoResultado): contadores e detalhes de erro por linha
    /// - Err(ApiError): falha no nível da chamada (codificação, banco)
    pub async fn importar_bytes(&self, bytes: &[u8]) -> ApiResult<ImportacaoResultado> {
        let importador = self.criar_importador()?;
        let resultado = importador.importar_bytes(bytes).await?;
        Ok(resultado)
    }

    /// Importa pessoas a partir de um arquivo no disco
    ///
    /// # Parâmetros
    /// - caminho: caminho do arquivo CSV
    pub async fn importar_arquivo(&self, caminho: &Path) -> ApiResult<ImportacaoResultado> {
        let importador = self.criar_importador()?;
        let resultado = importador.importar_arquivo(caminho).await?;
        Ok(resultado)
    }

    /// Importa vários arquivos em sequência
    ///
    /// Cada arquivo produz o seu próprio resultado; a falha de um
    /// arquivo não interrompe os demais. A ordem das respostas segue a
    /// ordem dos caminhos recebidos.
    pub async fn importar_varios(
        &self,
        caminhos: &[PathBuf],
    ) -> ApiResult<Vec<Result<ImportacaoResultado, String>>> {
        let importador = self.criar_importador()?;
        Ok(importador.importar_varios(caminhos).await)
    }

    /// Gera o modelo de planilha para o usuário preencher
    ///
    /// # Retorno
    /// - Ok(ModeloImportacaoResponse): nome de arquivo e conteúdo CSV
    pub fn modelo_importacao(&self) -> ApiResult<ModeloImportacaoResponse> {
        let config = ConfigManager::new(&self.db_path)
            .map_err(|e| ApiError::DatabaseError(format!("Falha ao criar configuração: {}", e)))?;

        let nome_arquivo = config
            .modelo_nome_arquivo()
            .map_err(|e| ApiError::DatabaseError(format!("Falha ao ler configuração: {}", e)))?;

        let conteudo_bytes = GeradorModelo::gerar()
            .map_err(|e| ApiError::InternalError(format!("Falha ao gerar modelo: {}", e)))?;
        let conteudo = String::from_utf8(conteudo_bytes)
            .map_err(|e| ApiError::InternalError(format!("Modelo gerado fora de UTF-8: {}", e)))?;

        Ok(ModeloImportacaoResponse {
            nome_arquivo,
            conteudo,
        })
    }

    /// Monta o importador com repositório e despachante reais
    ///
    /// O despachante recebe o cache da API; sem isso a listagem
    /// serviria dados anteriores à importação.
    fn criar_importador(
        &self,
    ) -> ApiResult<ImportadorPessoasImpl<CriarPessoaHandler<PessoaRepositoryImpl>, PessoaRepositoryImpl>>
    {
        let repo = Arc::new(PessoaRepositoryImpl::new(&self.db_path)?);
        let dispatcher = CriarPessoaHandler::with_cache(repo.clone(), self.cache.clone());
        Ok(ImportadorPessoasImpl::new(dispatcher, repo))
    }
}
