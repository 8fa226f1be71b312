// ==========================================
// Sistema de Cadastro de Pessoas - Camada de repositório
// ==========================================
// Responsabilidade: acesso a dados (SQLite via rusqlite)
// Regras de negócio ficam na camada de comandos
// Restrição: toda consulta é parametrizada
// ==========================================

pub mod error;
pub mod pessoa_repo;
pub mod pessoa_repo_impl;

// Reexporta os tipos centrais
pub use error::{RepositoryError, RepositoryResult};
pub use pessoa_repo::PessoaRepository;
pub use pessoa_repo_impl::PessoaRepositoryImpl;
