// ==========================================
// Sistema de Cadastro de Pessoas - Despachante de comandos
// ==========================================
// Responsabilidade: interface de execução de comandos de escrita
// A importação e a API individual passam pelo mesmo despachante
// ==========================================

use crate::command::error::CommandError;
use crate::domain::types::Sexo;
use crate::domain::Endereco;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// CriarPessoaCommand - comando de criação
// ==========================================
// Payload montado pela importação ou pela API individual
// O endereço só vem preenchido se alguma coluna de endereço veio no CSV
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CriarPessoaCommand {
    pub nome: String,
    pub email: Option<String>,
    pub cpf: String,
    pub data_nascimento: Option<NaiveDate>,
    pub telefone: Option<String>,
    pub sexo: Option<Sexo>,
    pub naturalidade: Option<String>,
    pub nacionalidade: Option<String>,
    pub endereco: Option<Endereco>,
}

// ==========================================
// CommandDispatcher Trait
// ==========================================
// Implementação de produção: CriarPessoaHandler
// Executa o comando como unidade, com validação de domínio própria
#[async_trait]
pub trait CommandDispatcher: Send + Sync {
    /// Executa a criação de uma pessoa
    ///
    /// # Retorno
    /// - Ok(String): id da pessoa criada
    /// - Err(CommandError::Validacao): regra de negócio violada
    /// - Err(_): falha de infraestrutura
    async fn executar(&self, comando: CriarPessoaCommand) -> Result<String, CommandError>;
}
