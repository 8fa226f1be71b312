// ==========================================
// Sistema de Cadastro de Pessoas - Camada de importação
// ==========================================
// Responsabilidade: importação em lote de pessoas a partir de CSV
// Entrada: bytes ou caminho de arquivo
// Saída: ImportacaoResultado com contadores e detalhes de erro
// ==========================================

// Declaração dos módulos
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importador_impl;
pub mod importador_trait;
pub mod template;
pub mod validator;

// Reexporta tipos centrais
pub use error::{ImportacaoError, ImportacaoResult};
pub use field_mapper::{FieldMapper, COLUNAS_MODELO};
pub use file_parser::{ArquivoCsv, CsvParser, LinhaCsv};
pub use importador_impl::ImportadorPessoasImpl;
pub use template::GeradorModelo;
pub use validator::ValidadorPessoa;

// Reexporta a interface trait
pub use importador_trait::ImportadorPessoas;
