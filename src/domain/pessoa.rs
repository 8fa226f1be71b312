// ==========================================
// Sistema de Cadastro de Pessoas - Entidade Pessoa
// ==========================================
// Alinhado à tabela pessoa (ver db::init_schema)
// CPF gravado normalizado: 11 dígitos, sem máscara
// ==========================================

use crate::domain::cpf;
use crate::domain::types::Sexo;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Pessoa - registro de pessoa
// ==========================================
// Uso: camada de comandos escreve, consultas leem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pessoa {
    // ===== Chave =====
    pub pessoa_id: String, // UUID v4

    // ===== Dados pessoais =====
    pub nome: String,
    pub email: Option<String>,
    pub cpf: String, // 11 dígitos, sem máscara
    pub data_nascimento: Option<NaiveDate>,
    pub telefone: Option<String>,
    pub sexo: Option<Sexo>,
    pub naturalidade: Option<String>,
    pub nacionalidade: Option<String>,

    // ===== Endereço (todas opcionais) =====
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,

    // ===== Auditoria =====
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

impl Pessoa {
    /// CPF com máscara de exibição (XXX.XXX.XXX-XX)
    pub fn cpf_formatado(&self) -> String {
        cpf::formatar(&self.cpf)
    }
}

// ==========================================
// Endereco - objeto de valor
// ==========================================
// Uso: parte opcional do comando de criação; a entidade Pessoa
// guarda os campos achatados, como na tabela
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endereco {
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
}

impl Endereco {
    /// Nenhum campo preenchido
    pub fn esta_vazio(&self) -> bool {
        self.cep.is_none()
            && self.logradouro.is_none()
            && self.numero.is_none()
            && self.complemento.is_none()
            && self.bairro.is_none()
            && self.cidade.is_none()
            && self.estado.is_none()
    }
}
