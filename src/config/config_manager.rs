// ==========================================
// Sistema de Cadastro de Pessoas - Gerenciador de configuração
// ==========================================
// Responsabilidade: leitura e gravação de configurações
// Armazenamento: tabela config_kv (chave-valor + escopo)
// ==========================================

use crate::db::{configure_sqlite_connection, init_schema, open_and_init};
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Nome padrão do arquivo de modelo de importação
pub const PADRAO_MODELO_NOME_ARQUIVO: &str = "modelo_importacao.csv";

/// Tamanho de página padrão das listagens
pub const PADRAO_TAMANHO_PAGINA: i64 = 50;

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Cria uma nova instância do ConfigManager
    ///
    /// # Parâmetros
    /// - db_path: caminho do arquivo de banco
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_and_init(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Cria o ConfigManager a partir de uma conexão existente
    ///
    /// Reaplica os PRAGMAs unificados na conexão recebida (idempotente).
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let guard = conn
                .lock()
                .map_err(|e| format!("Falha ao obter lock: {}", e))?;
            configure_sqlite_connection(&guard)?;
            init_schema(&guard)?;
        }

        Ok(Self { conn })
    }

    /// Lê um valor da tabela config_kv (scope_id='global')
    ///
    /// # Retorno
    /// - Some(String): valor configurado
    /// - None: chave não existe
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("Falha ao obter lock: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Lê um valor com fallback para o padrão informado
    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Grava um valor no escopo global (INSERT OR REPLACE)
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("Falha ao obter lock: {}", e))?;

        conn.execute(
            "INSERT OR REPLACE INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)",
            params![key, value],
        )?;

        Ok(())
    }

    /// Nome do arquivo servido pelo endpoint de modelo de importação
    pub fn modelo_nome_arquivo(&self) -> Result<String, Box<dyn Error>> {
        self.get_config_or_default(
            "importacao/modelo_nome_arquivo",
            PADRAO_MODELO_NOME_ARQUIVO,
        )
    }

    /// Tamanho de página das listagens
    ///
    /// Valor não numérico ou não positivo cai no padrão.
    pub fn tamanho_pagina(&self) -> Result<i64, Box<dyn Error>> {
        let bruto = self.get_config_or_default(
            "listagem/tamanho_pagina",
            &PADRAO_TAMANHO_PAGINA.to_string(),
        )?;

        let valor = bruto.trim().parse::<i64>().unwrap_or(PADRAO_TAMANHO_PAGINA);
        if valor <= 0 {
            return Ok(PADRAO_TAMANHO_PAGINA);
        }

        Ok(valor)
    }
}
