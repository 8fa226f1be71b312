// ==========================================
// Sistema de Cadastro de Pessoas - Camada de comandos
// ==========================================
// Responsabilidade: operações de escrita como unidades despacháveis
// Padrão: um despachante por comando, validação de domínio no handler
// ==========================================

pub mod criar_pessoa_impl;
pub mod dispatcher_trait;
pub mod error;

// Reexporta os tipos centrais
pub use criar_pessoa_impl::CriarPessoaHandler;
pub use dispatcher_trait::{CommandDispatcher, CriarPessoaCommand};
pub use error::CommandError;
