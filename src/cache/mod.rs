// ==========================================
// Sistema de Cadastro de Pessoas - Cache em memória
// ==========================================
// Responsabilidade: par chave-valor para listagens já serializadas
// Invalidação acontece nos handlers de escrita, não nas consultas
// ==========================================

use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Chave da listagem de pessoas
pub const CHAVE_LISTA_PESSOAS: &str = "pessoas:lista";

// ==========================================
// CacheStore Trait
// ==========================================
// Valores já serializados (JSON); quem grava decide o formato
pub trait CacheStore: Send + Sync {
    /// Busca um valor no cache
    fn obter(&self, chave: &str) -> Option<String>;

    /// Grava um valor no cache
    fn definir(&self, chave: &str, valor: String);

    /// Remove uma chave do cache
    fn invalidar(&self, chave: &str);
}

// ==========================================
// MemoryCache - implementação em memória
// ==========================================
pub struct MemoryCache {
    entradas: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entradas: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for MemoryCache {
    fn obter(&self, chave: &str) -> Option<String> {
        // Lock envenenado conta como cache miss
        match self.entradas.lock() {
            Ok(guard) => guard.get(chave).cloned(),
            Err(_) => None,
        }
    }

    fn definir(&self, chave: &str, valor: String) {
        if let Ok(mut guard) = self.entradas.lock() {
            guard.insert(chave.to_string(), valor);
        }
    }

    fn invalidar(&self, chave: &str) {
        if let Ok(mut guard) = self.entradas.lock() {
            if guard.remove(chave).is_some() {
                debug!(chave, "cache invalidado");
            }
        }
    }
}
