// ==========================================
// Sistema de Cadastro de Pessoas - Analisador de arquivo
// ==========================================
// Etapa 0 do pipeline: bytes → linhas cruas com número físico
// Dialeto: vírgula como separador, aspas duplas com escape ""
// ==========================================

use crate::importer::error::ImportacaoError;
use csv::ReaderBuilder;

// ==========================================
// LinhaCsv - linha de dados crua
// ==========================================
// As células são mantidas sem aparar: DetalheErro precisa dos
// valores exatamente como vieram no arquivo
#[derive(Debug, Clone)]
pub struct LinhaCsv {
    pub numero: u64,          // linha física no arquivo (cabeçalho = 1)
    pub valores: Vec<String>, // células cruas, na ordem do arquivo
}

// ==========================================
// ArquivoCsv - resultado da análise
// ==========================================
#[derive(Debug, Clone)]
pub struct ArquivoCsv {
    pub colunas: Vec<String>, // nomes do cabeçalho, aparados, na ordem do arquivo
    pub linhas: Vec<LinhaCsv>,
}

// ==========================================
// CsvParser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// Analisa os bytes de um arquivo CSV
    ///
    /// A primeira linha não em branco é o cabeçalho. Linhas com todas
    /// as células em branco são puladas e não contam no resultado.
    /// Uma célula entre aspas pode conter vírgulas e quebras de linha;
    /// o número informado é o da linha física onde o registro começa.
    ///
    /// # Retorno
    /// - Ok(ArquivoCsv): cabeçalho e linhas de dados
    /// - Err(ImportacaoError::CodificacaoInvalida): bytes fora de UTF-8
    pub fn analisar(&self, bytes: &[u8]) -> Result<ArquivoCsv, ImportacaoError> {
        // Única falha de chamada: conteúdo ilegível
        let texto = std::str::from_utf8(bytes)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // permite linhas com contagem de células diferente
            .from_reader(texto.as_bytes());

        let mut colunas: Vec<String> = Vec::new();
        let mut linhas = Vec::new();
        let mut cabecalho_lido = false;

        for resultado in reader.records() {
            let record = resultado?;
            let numero = record.position().map(|p| p.line()).unwrap_or(0);

            if !cabecalho_lido {
                colunas = record.iter().map(|c| c.trim().to_string()).collect();
                cabecalho_lido = true;
                continue;
            }

            let valores: Vec<String> = record.iter().map(|c| c.to_string()).collect();

            // Pula linhas totalmente em branco
            if valores.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            linhas.push(LinhaCsv { numero, valores });
        }

        Ok(ArquivoCsv { colunas, linhas })
    }
}
