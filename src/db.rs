// ==========================================
// Sistema de Cadastro de Pessoas - Conexão SQLite
// ==========================================
// Objetivo:
// - Unificar o comportamento de PRAGMA em todos os Connection::open,
//   evitando "módulos com foreign_keys ligado e outros não"
// - Unificar o busy_timeout, reduzindo erros esporádicos de busy em
//   escritas concorrentes
// ==========================================

use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

/// busy_timeout padrão (milissegundos)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Nome do arquivo de banco padrão
pub const DEFAULT_DB_FILE: &str = "cadastro_pessoas.db";

/// Configura os PRAGMAs unificados de uma conexão SQLite
///
/// Nota:
/// - foreign_keys precisa ser ligado por conexão
/// - busy_timeout precisa ser configurado por conexão
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Abre uma conexão SQLite com a configuração unificada
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Cria as tabelas do sistema caso ainda não existam
///
/// Tabelas:
/// - pessoa: registro de pessoas (CPF normalizado, único)
/// - config_kv: configurações chave-valor por escopo
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS pessoa (
            pessoa_id TEXT PRIMARY KEY,
            nome TEXT NOT NULL,
            email TEXT,
            cpf TEXT NOT NULL UNIQUE,
            data_nascimento TEXT,
            telefone TEXT,
            sexo TEXT,
            naturalidade TEXT,
            nacionalidade TEXT,
            cep TEXT,
            logradouro TEXT,
            numero TEXT,
            complemento TEXT,
            bairro TEXT,
            cidade TEXT,
            estado TEXT,
            criado_em TEXT NOT NULL,
            atualizado_em TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_pessoa_nome ON pessoa(nome);

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id TEXT NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY (scope_id, key)
        );",
    )?;
    Ok(())
}

/// Abre a conexão e garante o schema criado
pub fn open_and_init(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = open_sqlite_connection(db_path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Resolve o caminho padrão do banco de dados
///
/// Ordem de resolução:
/// 1. Variável de ambiente CADASTRO_PESSOAS_DB_PATH (depuração/testes/CI)
/// 2. Diretório de dados do usuário (subdiretório de desenvolvimento em
///    builds de debug, para não poluir dados de produção)
/// 3. Arquivo no diretório corrente como último recurso
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var("CADASTRO_PESSOAS_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./cadastro_pessoas.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("cadastro-pessoas-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("cadastro-pessoas");
        }

        // Garante que o diretório exista
        std::fs::create_dir_all(&path).ok();
        path = path.join(DEFAULT_DB_FILE);
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_default_db_path() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }

    #[test]
    fn test_init_schema_idempotente() {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        init_schema(&conn).unwrap();
        // Rodar de novo não pode falhar
        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('pessoa', 'config_kv')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
    }
}
