// ==========================================
// Sistema de Cadastro de Pessoas - Modelos de importação
// ==========================================
// Produtos do pipeline de importação:
// análise do arquivo → mapeamento de campos → validação → despacho
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ==========================================
// RegistroPessoaBruto - registro intermediário
// ==========================================
// Uso: saída do mapeamento de campos, entrada da validação
// Ciclo de vida: somente dentro do fluxo de importação
// Campos ausentes ou em branco viram None (célula já aparada)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistroPessoaBruto {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub data_nascimento: Option<String>, // texto cru, validado adiante
    pub telefone: Option<String>,
    pub sexo: Option<String>, // código ordinal ("0"/"1")
    pub naturalidade: Option<String>,
    pub nacionalidade: Option<String>,
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
}

// ==========================================
// DetalheErro - linha rejeitada
// ==========================================
// Uso: uma entrada por linha que falhou, na ordem do arquivo
// Serialização JSON: chaves em camelCase
// (linha, mensagem, valoresOriginais, registroOriginal)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetalheErro {
    pub linha: u64,     // número físico da linha no arquivo (cabeçalho = 1)
    pub mensagem: String,
    pub valores_originais: Map<String, Value>, // coluna → valor cru, na ordem do cabeçalho
    pub registro_original: String, // valores crus unidos por vírgula
}

impl DetalheErro {
    /// Monta o detalhe a partir dos valores crus da linha
    ///
    /// # Parâmetros
    /// - linha: número físico da linha no arquivo
    /// - mensagem: mensagem de erro da linha
    /// - colunas: nomes das colunas, na ordem do cabeçalho
    /// - valores: células cruas da linha (pode ser mais curta que o cabeçalho)
    pub fn novo(
        linha: u64,
        mensagem: impl Into<String>,
        colunas: &[String],
        valores: &[String],
    ) -> Self {
        let mut valores_originais = Map::new();
        for (i, coluna) in colunas.iter().enumerate() {
            let valor = valores.get(i).cloned().unwrap_or_default();
            valores_originais.insert(coluna.clone(), Value::String(valor));
        }

        let registro_original = valores_originais
            .values()
            .filter_map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(",");

        Self {
            linha,
            mensagem: mensagem.into(),
            valores_originais,
            registro_original,
        }
    }
}

// ==========================================
// ImportacaoResultado - resultado agregado
// ==========================================
// Invariante: total == sucesso + erros e erros == detalhes.len()
// Construído uma vez por chamada de importação; não é persistido
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportacaoResultado {
    pub total: usize,
    pub sucesso: usize,
    pub erros: usize,
    pub detalhes: Vec<DetalheErro>,
}

impl ImportacaoResultado {
    /// Resultado vazio (nenhuma linha processada)
    pub fn novo() -> Self {
        Self {
            total: 0,
            sucesso: 0,
            erros: 0,
            detalhes: Vec::new(),
        }
    }

    /// Contabiliza uma linha importada com sucesso
    pub fn registrar_sucesso(&mut self) {
        self.total += 1;
        self.sucesso += 1;
    }

    /// Contabiliza uma linha rejeitada
    pub fn registrar_erro(&mut self, detalhe: DetalheErro) {
        self.total += 1;
        self.erros += 1;
        self.detalhes.push(detalhe);
    }
}

impl Default for ImportacaoResultado {
    fn default() -> Self {
        Self::novo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colunas(nomes: &[&str]) -> Vec<String> {
        nomes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_detalhe_erro_ordem_das_colunas() {
        let detalhe = DetalheErro::novo(
            3,
            "CPF informado não é válido",
            &colunas(&["Nome", "Email", "CPF"]),
            &["Maria".to_string(), "m@ex.com".to_string(), "123".to_string()],
        );

        let chaves: Vec<&String> = detalhe.valores_originais.keys().collect();
        assert_eq!(chaves, vec!["Nome", "Email", "CPF"]);
        assert_eq!(detalhe.registro_original, "Maria,m@ex.com,123");
    }

    #[test]
    fn test_detalhe_erro_linha_mais_curta_que_cabecalho() {
        let detalhe = DetalheErro::novo(
            2,
            "Nome é obrigatório",
            &colunas(&["Nome", "Email", "CPF"]),
            &["".to_string()],
        );

        assert_eq!(detalhe.valores_originais.len(), 3);
        assert_eq!(detalhe.valores_originais["Email"], Value::String(String::new()));
        assert_eq!(detalhe.registro_original, ",,");
    }

    #[test]
    fn test_detalhe_erro_sem_valores() {
        let detalhe = DetalheErro::novo(5, "Nome é obrigatório", &[], &[]);
        assert!(detalhe.valores_originais.is_empty());
        assert_eq!(detalhe.registro_original, "");
    }

    #[test]
    fn test_serializacao_camel_case() {
        let detalhe = DetalheErro::novo(
            4,
            "Data de nascimento inválida",
            &colunas(&["Nome"]),
            &["Ana".to_string()],
        );
        let json = serde_json::to_value(&detalhe).unwrap();

        assert_eq!(json["linha"], 4);
        assert_eq!(json["mensagem"], "Data de nascimento inválida");
        assert!(json.get("valoresOriginais").is_some());
        assert!(json.get("registroOriginal").is_some());
        // As chaves snake_case não podem vazar para o JSON
        assert!(json.get("valores_originais").is_none());
        assert!(json.get("registro_original").is_none());
    }

    #[test]
    fn test_resultado_mantem_invariante() {
        let mut resultado = ImportacaoResultado::novo();
        resultado.registrar_sucesso();
        resultado.registrar_sucesso();
        resultado.registrar_erro(DetalheErro::novo(4, "CPF é obrigatório", &[], &[]));

        assert_eq!(resultado.total, 3);
        assert_eq!(resultado.sucesso, 2);
        assert_eq!(resultado.erros, 1);
        assert_eq!(resultado.total, resultado.sucesso + resultado.erros);
        assert_eq!(resultado.erros, resultado.detalhes.len());
    }
}
