// ==========================================
// Sistema de Cadastro de Pessoas - Biblioteca principal
// ==========================================
// Stack: Rust + SQLite
// Escopo: importação em lote de pessoas via CSV,
//         cadastro individual e consulta
// ==========================================

// Inicializa o sistema de internacionalização
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// Declaração de módulos
// ==========================================

// Camada de domínio - entidades e tipos
pub mod domain;

// Camada de repositório - acesso a dados
pub mod repository;

// Camada de comandos - escrita via despachante
pub mod command;

// Camada de importação - dados externos
pub mod importer;

// Cache em memória - listagens
pub mod cache;

// Camada de configuração
pub mod config;

// Infraestrutura de banco (conexão/PRAGMA unificados)
pub mod db;

// Sistema de logs
pub mod logging;

// Internacionalização
pub mod i18n;

// Camada de API - interface de negócio
pub mod api;

// ==========================================
// Reexportação de tipos centrais
// ==========================================

// Tipos de domínio
pub use domain::types::Sexo;

// Entidades de domínio
pub use domain::{
    DetalheErro, Endereco, ImportacaoResultado, Pessoa, RegistroPessoaBruto,
};

// Repositório
pub use repository::{PessoaRepository, PessoaRepositoryImpl, RepositoryError};

// Comandos
pub use command::{CommandDispatcher, CommandError, CriarPessoaCommand, CriarPessoaHandler};

// Importação
pub use importer::{ImportadorPessoas, ImportadorPessoasImpl};

// API
pub use api::{ImportacaoApi, PessoaApi};

// ==========================================
// Constantes
// ==========================================

// Versão do sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nome do sistema
pub const APP_NAME: &str = "Sistema de Cadastro de Pessoas";
