// ==========================================
// Sistema de Cadastro de Pessoas - Validador de linha
// ==========================================
// Etapa 2 do pipeline: checagens sintáticas de uma linha mapeada
// Funções puras, uma mensagem de negócio por regra
// As checagens de duplicidade ficam no orquestrador (dependem de
// estado do lote e do cadastro)
// ==========================================

use crate::domain::cpf;
use crate::domain::RegistroPessoaBruto;
use crate::importer::error::ImportacaoError;
use chrono::NaiveDate;

// ==========================================
// ValidadorPessoa
// ==========================================
pub struct ValidadorPessoa;

impl ValidadorPessoa {
    /// Nome presente e não em branco
    pub fn validar_nome(registro: &RegistroPessoaBruto) -> Result<(), ImportacaoError> {
        match &registro.nome {
            Some(nome) if !nome.trim().is_empty() => Ok(()),
            _ => Err(ImportacaoError::Linha("Nome é obrigatório".to_string())),
        }
    }

    /// CPF presente e não em branco
    ///
    /// # Retorno
    /// - Ok(&str): o CPF cru, como veio no arquivo
    pub fn validar_cpf_presente(
        registro: &RegistroPessoaBruto,
    ) -> Result<&str, ImportacaoError> {
        match registro.cpf.as_deref() {
            Some(valor) if !valor.trim().is_empty() => Ok(valor),
            _ => Err(ImportacaoError::Linha("CPF é obrigatório".to_string())),
        }
    }

    /// Dígitos verificadores do CPF
    pub fn validar_cpf_digitos(valor: &str) -> Result<(), ImportacaoError> {
        if cpf::validar(valor) {
            Ok(())
        } else {
            Err(ImportacaoError::Linha(
                "CPF informado não é válido".to_string(),
            ))
        }
    }

    /// Data de nascimento presente e em formato aceito
    ///
    /// Formatos aceitos: ISO (1990-05-20) e brasileiro (20/05/1990).
    /// Ausente ou fora de formato rejeita a linha.
    pub fn validar_data_nascimento(
        registro: &RegistroPessoaBruto,
    ) -> Result<NaiveDate, ImportacaoError> {
        let texto = registro
            .data_nascimento
            .as_deref()
            .map(str::trim)
            .unwrap_or("");

        NaiveDate::parse_from_str(texto, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(texto, "%d/%m/%Y"))
            .map_err(|_| ImportacaoError::Linha("Data de nascimento inválida".to_string()))
    }
}
