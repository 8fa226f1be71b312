// ==========================================
// Sistema de Cadastro de Pessoas - Handler de criação
// ==========================================
// Validação final antes da escrita. A importação já valida linha a
// linha, mas o comando também é alcançável direto pela API individual,
// então as regras são reaplicadas aqui.
// ==========================================

use crate::cache::{CacheStore, CHAVE_LISTA_PESSOAS};
use crate::command::dispatcher_trait::{CommandDispatcher, CriarPessoaCommand};
use crate::command::error::CommandError;
use crate::domain::cpf;
use crate::domain::Pessoa;
use crate::repository::PessoaRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// CriarPessoaHandler
// ==========================================
pub struct CriarPessoaHandler<R: PessoaRepository> {
    repo: Arc<R>,
    cache: Option<Arc<dyn CacheStore>>,
}

impl<R: PessoaRepository> CriarPessoaHandler<R> {
    /// Cria o handler sem cache acoplado
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo, cache: None }
    }

    /// Cria o handler com um cache a invalidar após cada criação
    pub fn with_cache(repo: Arc<R>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            repo,
            cache: Some(cache),
        }
    }

    /// Monta a entidade a partir do comando
    ///
    /// Gera o id (UUID v4), normaliza o CPF e achata o endereço.
    fn montar_pessoa(comando: &CriarPessoaCommand) -> Pessoa {
        let endereco = comando.endereco.clone().unwrap_or_default();
        let agora = Utc::now();

        Pessoa {
            pessoa_id: Uuid::new_v4().to_string(),
            nome: comando.nome.trim().to_string(),
            email: comando.email.clone(),
            cpf: cpf::normalizar(&comando.cpf),
            data_nascimento: comando.data_nascimento,
            telefone: comando.telefone.clone(),
            sexo: comando.sexo,
            naturalidade: comando.naturalidade.clone(),
            nacionalidade: comando.nacionalidade.clone(),
            cep: endereco.cep,
            logradouro: endereco.logradouro,
            numero: endereco.numero,
            complemento: endereco.complemento,
            bairro: endereco.bairro,
            cidade: endereco.cidade,
            estado: endereco.estado,
            criado_em: agora,
            atualizado_em: agora,
        }
    }
}

#[async_trait]
impl<R: PessoaRepository> CommandDispatcher for CriarPessoaHandler<R> {
    async fn executar(&self, comando: CriarPessoaCommand) -> Result<String, CommandError> {
        debug!(cpf = %cpf::formatar(&comando.cpf), "executando criação de pessoa");

        if comando.nome.trim().is_empty() {
            return Err(CommandError::Validacao("Nome é obrigatório".to_string()));
        }

        if comando.cpf.trim().is_empty() {
            return Err(CommandError::Validacao("CPF é obrigatório".to_string()));
        }

        if !cpf::validar(&comando.cpf) {
            return Err(CommandError::Validacao(
                "CPF informado não é válido".to_string(),
            ));
        }

        if self.repo.existe_cpf(&comando.cpf).await? {
            return Err(CommandError::Validacao("CPF já cadastrado".to_string()));
        }

        let pessoa = Self::montar_pessoa(&comando);
        let pessoa_id = pessoa.pessoa_id.clone();

        // Duplicado entre a checagem e a escrita vira Validacao via From
        self.repo.criar(&pessoa).await?;

        if let Some(cache) = &self.cache {
            cache.invalidar(CHAVE_LISTA_PESSOAS);
        }

        info!(pessoa_id = %pessoa_id, "pessoa criada");
        Ok(pessoa_id)
    }
}
