// ==========================================
// Sistema de Cadastro de Pessoas - Tipos de domínio
// ==========================================
// Formato de serialização: SCREAMING_SNAKE_CASE
// (mesmo valor gravado no banco)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Sexo
// ==========================================
// No CSV de importação o campo vem como código ordinal:
// "0" = masculino, "1" = feminino; qualquer outro valor vira ausente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sexo {
    Masculino,
    Feminino,
}

impl Sexo {
    /// Converte o código ordinal usado no CSV
    ///
    /// # Parâmetros
    /// - codigo: "0" (masculino) ou "1" (feminino)
    ///
    /// # Retorno
    /// - Some(Sexo): código reconhecido
    /// - None: código desconhecido ou vazio
    pub fn from_codigo(codigo: &str) -> Option<Sexo> {
        match codigo.trim() {
            "0" => Some(Sexo::Masculino),
            "1" => Some(Sexo::Feminino),
            _ => None,
        }
    }

    /// Converte o valor gravado no banco
    pub fn from_db(valor: &str) -> Option<Sexo> {
        match valor {
            "MASCULINO" => Some(Sexo::Masculino),
            "FEMININO" => Some(Sexo::Feminino),
            _ => None,
        }
    }

    /// Valor textual gravado no banco
    pub fn as_str(&self) -> &'static str {
        match self {
            Sexo::Masculino => "MASCULINO",
            Sexo::Feminino => "FEMININO",
        }
    }
}

impl fmt::Display for Sexo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
