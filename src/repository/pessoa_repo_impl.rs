// ==========================================
// Sistema de Cadastro de Pessoas - Repository Impl (SQLite)
// ==========================================
// Implementação com rusqlite sobre Arc<Mutex<Connection>>
// CPF sempre comparado e gravado normalizado (11 dígitos)
// ==========================================

use crate::db::{configure_sqlite_connection, init_schema, open_and_init};
use crate::domain::cpf;
use crate::domain::types::Sexo;
use crate::domain::Pessoa;
use crate::repository::error::RepositoryError;
use crate::repository::pessoa_repo::PessoaRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// PessoaRepositoryImpl
// ==========================================
pub struct PessoaRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl PessoaRepositoryImpl {
    /// Cria uma nova instância do repositório
    ///
    /// Abre a conexão, aplica os PRAGMAs unificados e garante o schema.
    ///
    /// # Parâmetros
    /// - db_path: caminho do arquivo de banco
    pub fn new(db_path: &str) -> Result<Self, RepositoryError> {
        let conn = open_and_init(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Cria o repositório a partir de uma conexão existente
    ///
    /// Reaplica os PRAGMAs unificados na conexão recebida (idempotente).
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, RepositoryError> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(format!("Falha ao obter lock: {}", e)))?;
            configure_sqlite_connection(&guard)?;
            init_schema(&guard)?;
        }

        Ok(Self { conn })
    }

    /// Mapeia uma linha do SELECT padrão para a entidade
    ///
    /// Ordem das colunas fixada em SELECT_PESSOA.
    fn mapear_pessoa(row: &Row) -> rusqlite::Result<Pessoa> {
        let sexo: Option<String> = row.get(6)?;

        Ok(Pessoa {
            pessoa_id: row.get(0)?,
            nome: row.get(1)?,
            email: row.get(2)?,
            cpf: row.get(3)?,
            data_nascimento: row.get(4)?,
            telefone: row.get(5)?,
            sexo: sexo.as_deref().and_then(Sexo::from_db),
            naturalidade: row.get(7)?,
            nacionalidade: row.get(8)?,
            cep: row.get(9)?,
            logradouro: row.get(10)?,
            numero: row.get(11)?,
            complemento: row.get(12)?,
            bairro: row.get(13)?,
            cidade: row.get(14)?,
            estado: row.get(15)?,
            criado_em: row.get(16)?,
            atualizado_em: row.get(17)?,
        })
    }
}

/// Colunas do SELECT padrão, na ordem esperada por mapear_pessoa
const SELECT_PESSOA: &str = "SELECT pessoa_id, nome, email, cpf, data_nascimento, telefone, \
     sexo, naturalidade, nacionalidade, cep, logradouro, numero, complemento, \
     bairro, cidade, estado, criado_em, atualizado_em FROM pessoa";

#[async_trait]
impl PessoaRepository for PessoaRepositoryImpl {
    async fn existe_cpf(&self, cpf: &str) -> Result<bool, RepositoryError> {
        let digitos = cpf::normalizar(cpf);

        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(format!("Falha ao obter lock: {}", e)))?;

        let existe: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM pessoa WHERE cpf = ?1)",
            params![digitos],
            |row| row.get(0),
        )?;

        Ok(existe)
    }

    async fn criar(&self, pessoa: &Pessoa) -> Result<(), RepositoryError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(format!("Falha ao obter lock: {}", e)))?;

        conn.execute(
            "INSERT INTO pessoa (
                pessoa_id, nome, email, cpf, data_nascimento, telefone,
                sexo, naturalidade, nacionalidade, cep, logradouro, numero,
                complemento, bairro, cidade, estado, criado_em, atualizado_em
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                ?13, ?14, ?15, ?16, ?17, ?18
            )",
            params![
                pessoa.pessoa_id,
                pessoa.nome,
                pessoa.email,
                cpf::normalizar(&pessoa.cpf),
                pessoa.data_nascimento,
                pessoa.telefone,
                pessoa.sexo.map(|s| s.as_str()),
                pessoa.naturalidade,
                pessoa.nacionalidade,
                pessoa.cep,
                pessoa.logradouro,
                pessoa.numero,
                pessoa.complemento,
                pessoa.bairro,
                pessoa.cidade,
                pessoa.estado,
                pessoa.criado_em,
                pessoa.atualizado_em,
            ],
        )?;

        Ok(())
    }

    async fn buscar_por_cpf(&self, cpf: &str) -> Result<Option<Pessoa>, RepositoryError> {
        let digitos = cpf::normalizar(cpf);

        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(format!("Falha ao obter lock: {}", e)))?;

        let sql = format!("{} WHERE cpf = ?1", SELECT_PESSOA);
        let resultado = conn.query_row(&sql, params![digitos], Self::mapear_pessoa);

        match resultado {
            Ok(pessoa) => Ok(Some(pessoa)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn listar(&self) -> Result<Vec<Pessoa>, RepositoryError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(format!("Falha ao obter lock: {}", e)))?;

        let sql = format!("{} ORDER BY nome", SELECT_PESSOA);
        let mut stmt = conn.prepare(&sql)?;

        let pessoas = stmt
            .query_map([], Self::mapear_pessoa)?
            .collect::<rusqlite::Result<Vec<Pessoa>>>()?;

        Ok(pessoas)
    }

    async fn listar_paginado(
        &self,
        limite: i64,
        deslocamento: i64,
    ) -> Result<Vec<Pessoa>, RepositoryError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(format!("Falha ao obter lock: {}", e)))?;

        let sql = format!("{} ORDER BY nome LIMIT ?1 OFFSET ?2", SELECT_PESSOA);
        let mut stmt = conn.prepare(&sql)?;

        let pessoas = stmt
            .query_map(params![limite, deslocamento], Self::mapear_pessoa)?
            .collect::<rusqlite::Result<Vec<Pessoa>>>()?;

        Ok(pessoas)
    }

    async fn contar(&self) -> Result<i64, RepositoryError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(format!("Falha ao obter lock: {}", e)))?;

        let total: i64 = conn.query_row("SELECT COUNT(*) FROM pessoa", [], |row| row.get(0))?;

        Ok(total)
    }
}
