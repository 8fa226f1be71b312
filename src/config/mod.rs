// ==========================================
// Sistema de Cadastro de Pessoas - Camada de configuração
// ==========================================
// Responsabilidade: configurações do sistema
// Armazenamento: tabela config_kv
// ==========================================

pub mod config_manager;

pub use config_manager::ConfigManager;
