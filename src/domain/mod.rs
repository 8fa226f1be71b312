// ==========================================
// Sistema de Cadastro de Pessoas - Camada de domínio
// ==========================================
// Responsabilidade: entidades, tipos e regras puras de domínio
// Não contém acesso a dados nem orquestração
// ==========================================

pub mod cpf;
pub mod importacao;
pub mod pessoa;
pub mod types;

// Reexporta os tipos centrais
pub use importacao::{DetalheErro, ImportacaoResultado, RegistroPessoaBruto};
pub use pessoa::{Endereco, Pessoa};
pub use types::Sexo;
