// ==========================================
// Sistema de Cadastro de Pessoas - Repository Trait
// ==========================================
// Responsabilidade: interface de acesso a dados de pessoa
// Não contém regra de negócio, só CRUD e consultas
// ==========================================

use crate::domain::Pessoa;
use crate::repository::error::RepositoryError;
use async_trait::async_trait;

// ==========================================
// PessoaRepository Trait
// ==========================================
// Implementação de produção: PessoaRepositoryImpl (rusqlite)
// Os testes substituem por mocks em memória
#[async_trait]
pub trait PessoaRepository: Send + Sync {
    /// Verifica se já existe pessoa com o CPF informado
    ///
    /// # Parâmetros
    /// - cpf: com ou sem máscara; a comparação usa os 11 dígitos
    ///
    /// # Retorno
    /// - Ok(true): CPF já cadastrado
    /// - Ok(false): CPF livre
    async fn existe_cpf(&self, cpf: &str) -> Result<bool, RepositoryError>;

    /// Persiste uma nova pessoa
    ///
    /// # Retorno
    /// - Err(RepositoryError::CpfDuplicado): violação de unicidade do CPF
    async fn criar(&self, pessoa: &Pessoa) -> Result<(), RepositoryError>;

    /// Busca uma pessoa pelo CPF
    async fn buscar_por_cpf(&self, cpf: &str) -> Result<Option<Pessoa>, RepositoryError>;

    /// Lista todas as pessoas, ordenadas por nome
    async fn listar(&self) -> Result<Vec<Pessoa>, RepositoryError>;

    /// Lista uma página de pessoas, ordenadas por nome
    ///
    /// # Parâmetros
    /// - limite: máximo de linhas retornadas
    /// - deslocamento: linhas puladas a partir do início
    async fn listar_paginado(
        &self,
        limite: i64,
        deslocamento: i64,
    ) -> Result<Vec<Pessoa>, RepositoryError>;

    /// Total de pessoas cadastradas
    async fn contar(&self) -> Result<i64, RepositoryError>;
}
