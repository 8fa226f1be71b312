// ==========================================
// Sistema de Cadastro de Pessoas - Mapeador de campos
// ==========================================
// Etapa 1 do pipeline: células cruas → RegistroPessoaBruto
// Casamento por nome exato de coluna (sensível a maiúsculas);
// a ordem das colunas no arquivo é livre
// ==========================================

use crate::domain::RegistroPessoaBruto;
use std::collections::HashMap;

// ===== Nomes das colunas do arquivo de importação =====
pub const COLUNA_NOME: &str = "Nome";
pub const COLUNA_EMAIL: &str = "Email";
pub const COLUNA_CPF: &str = "CPF";
pub const COLUNA_DATA_NASCIMENTO: &str = "DataNascimento";
pub const COLUNA_TELEFONE: &str = "Telefone";
pub const COLUNA_SEXO: &str = "Sexo";
pub const COLUNA_NATURALIDADE: &str = "Naturalidade";
pub const COLUNA_NACIONALIDADE: &str = "Nacionalidade";
pub const COLUNA_CEP: &str = "CEP";
pub const COLUNA_LOGRADOURO: &str = "Logradouro";
pub const COLUNA_NUMERO: &str = "Numero";
pub const COLUNA_COMPLEMENTO: &str = "Complemento";
pub const COLUNA_BAIRRO: &str = "Bairro";
pub const COLUNA_CIDADE: &str = "Cidade";
pub const COLUNA_ESTADO: &str = "Estado";

/// Colunas do modelo de importação, na ordem do cabeçalho
pub const COLUNAS_MODELO: [&str; 15] = [
    COLUNA_NOME,
    COLUNA_EMAIL,
    COLUNA_CPF,
    COLUNA_DATA_NASCIMENTO,
    COLUNA_TELEFONE,
    COLUNA_SEXO,
    COLUNA_NATURALIDADE,
    COLUNA_NACIONALIDADE,
    COLUNA_CEP,
    COLUNA_LOGRADOURO,
    COLUNA_NUMERO,
    COLUNA_COMPLEMENTO,
    COLUNA_BAIRRO,
    COLUNA_CIDADE,
    COLUNA_ESTADO,
];

// ==========================================
// FieldMapper
// ==========================================
// Construído uma vez por arquivo, a partir do cabeçalho
pub struct FieldMapper {
    indices: HashMap<String, usize>,
}

impl FieldMapper {
    /// Monta o mapeador a partir do cabeçalho do arquivo
    ///
    /// Coluna ausente do cabeçalho vira campo ausente em todas as
    /// linhas (o erro aparece na validação de cada linha, não aqui).
    /// Nome de coluna repetido fica com a primeira ocorrência.
    pub fn new(colunas: &[String]) -> Self {
        let mut indices = HashMap::new();
        for (i, coluna) in colunas.iter().enumerate() {
            indices.entry(coluna.clone()).or_insert(i);
        }

        Self { indices }
    }

    /// Mapeia as células de uma linha para o registro intermediário
    ///
    /// Toda célula é aparada; célula em branco vira None.
    pub fn mapear(&self, valores: &[String]) -> RegistroPessoaBruto {
        RegistroPessoaBruto {
            nome: self.obter(valores, COLUNA_NOME),
            email: self.obter(valores, COLUNA_EMAIL),
            cpf: self.obter(valores, COLUNA_CPF),
            data_nascimento: self.obter(valores, COLUNA_DATA_NASCIMENTO),
            telefone: self.obter(valores, COLUNA_TELEFONE),
            sexo: self.obter(valores, COLUNA_SEXO),
            naturalidade: self.obter(valores, COLUNA_NATURALIDADE),
            nacionalidade: self.obter(valores, COLUNA_NACIONALIDADE),
            cep: self.obter(valores, COLUNA_CEP),
            logradouro: self.obter(valores, COLUNA_LOGRADOURO),
            numero: self.obter(valores, COLUNA_NUMERO),
            complemento: self.obter(valores, COLUNA_COMPLEMENTO),
            bairro: self.obter(valores, COLUNA_BAIRRO),
            cidade: self.obter(valores, COLUNA_CIDADE),
            estado: self.obter(valores, COLUNA_ESTADO),
        }
    }

    /// Extrai uma célula pela coluna; aparada, em branco vira None
    fn obter(&self, valores: &[String], coluna: &str) -> Option<String> {
        let idx = *self.indices.get(coluna)?;
        let valor = valores.get(idx)?.trim();

        if valor.is_empty() {
            None
        } else {
            Some(valor.to_string())
        }
    }
}
