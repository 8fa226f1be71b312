// ==========================================
// Sistema de Cadastro de Pessoas - API de pessoas
// ==========================================
// Responsabilidade: consulta do cadastro e criação individual
// A listagem passa pelo cache; o handler de criação invalida a
// chave a cada escrita
// ==========================================

use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::cache::{CacheStore, MemoryCache, CHAVE_LISTA_PESSOAS};
use crate::command::{CommandDispatcher, CriarPessoaCommand, CriarPessoaHandler};
use crate::config::ConfigManager;
use crate::domain::Pessoa;
use crate::repository::{PessoaRepository, PessoaRepositoryImpl};

/// API de pessoas
///
/// Responsabilidades:
/// 1. Listagem e contagem do cadastro
/// 2. Busca individual por CPF
/// 3. Criação individual via comando
pub struct PessoaApi {
    repo: Arc<PessoaRepositoryImpl>,
    cache: Arc<dyn CacheStore>,
    config: ConfigManager,
}

impl PessoaApi {
    /// Cria uma nova instância de PessoaApi
    ///
    /// # Parâmetros
    /// - db_path: caminho do arquivo SQLite
    pub fn new(db_path: &str) -> ApiResult<Self> {
        Self::with_cache(db_path, Arc::new(MemoryCache::new()))
    }

    /// Cria a API com um cache compartilhado
    pub fn with_cache(db_path: &str, cache: Arc<dyn CacheStore>) -> ApiResult<Self> {
        let repo = Arc::new(PessoaRepositoryImpl::new(db_path)?);
        let config = ConfigManager::new(db_path)
            .map_err(|e| ApiError::DatabaseError(format!("Falha ao criar configuração: {}", e)))?;
        Ok(Self {
            repo,
            cache,
            config,
        })
    }

    // ==========================================
    // Consultas
    // ==========================================

    /// Lista todas as pessoas ordenadas por nome
    ///
    /// O resultado serializado fica no cache; escritas posteriores
    /// invalidam a chave e a próxima listagem volta ao banco.
    pub async fn listar(&self) -> ApiResult<Vec<Pessoa>> {
        if let Some(json) = self.cache.obter(CHAVE_LISTA_PESSOAS) {
            match serde_json::from_str::<Vec<Pessoa>>(&json) {
                Ok(pessoas) => {
                    debug!(quantidade = pessoas.len(), "listagem servida do cache");
                    return Ok(pessoas);
                }
                Err(e) => {
                    // Entrada corrompida não derruba a consulta
                    warn!(error = %e, "cache da listagem ilegível, consultando o banco");
                    self.cache.invalidar(CHAVE_LISTA_PESSOAS);
                }
            }
        }

        let pessoas = self.repo.listar().await?;

        match serde_json::to_string(&pessoas) {
            Ok(json) => self.cache.definir(CHAVE_LISTA_PESSOAS, json),
            Err(e) => warn!(error = %e, "falha ao serializar listagem para o cache"),
        }

        Ok(pessoas)
    }

    /// Lista uma página do cadastro, ordenada por nome
    ///
    /// O tamanho da página vem da configuração
    /// `listagem/tamanho_pagina`. A consulta vai direto ao banco; o
    /// cache guarda apenas a listagem completa.
    ///
    /// # Parâmetros
    /// - pagina: número da página, a partir de 1
    pub async fn listar_paginado(&self, pagina: i64) -> ApiResult<Vec<Pessoa>> {
        if pagina < 1 {
            return Err(ApiError::InvalidInput(
                "Página deve ser maior ou igual a 1".to_string(),
            ));
        }

        let tamanho = self
            .config
            .tamanho_pagina()
            .map_err(|e| ApiError::DatabaseError(format!("Falha ao ler configuração: {}", e)))?;

        let deslocamento = (pagina - 1) * tamanho;
        let pessoas = self.repo.listar_paginado(tamanho, deslocamento).await?;

        debug!(pagina, tamanho, quantidade = pessoas.len(), "página listada");
        Ok(pessoas)
    }

    /// Conta as pessoas cadastradas
    pub async fn contar(&self) -> ApiResult<i64> {
        let total = self.repo.contar().await?;
        Ok(total)
    }

    /// Busca uma pessoa pelo CPF
    ///
    /// # Parâmetros
    /// - cpf: com ou sem máscara
    pub async fn buscar_por_cpf(&self, cpf: &str) -> ApiResult<Pessoa> {
        if cpf.trim().is_empty() {
            return Err(ApiError::InvalidInput("CPF não pode ser vazio".to_string()));
        }

        self.repo
            .buscar_por_cpf(cpf)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Pessoa com CPF {} não encontrada", cpf)))
    }

    // ==========================================
    // Escrita
    // ==========================================

    /// Cria uma pessoa individual
    ///
    /// # Retorno
    /// - Ok(String): id da pessoa criada
    /// - Err(ApiError): mensagem de validação ou falha de infraestrutura
    pub async fn criar(&self, comando: CriarPessoaCommand) -> ApiResult<String> {
        let handler = CriarPessoaHandler::with_cache(self.repo.clone(), self.cache.clone());
        let pessoa_id = handler.executar(comando).await?;
        Ok(pessoa_id)
    }
}
