// ==========================================
// Sistema de Cadastro de Pessoas - Modelo de importação
// ==========================================
// Gera o CSV de modelo: cabeçalho completo, nenhuma linha de dados
// Serve de gabarito para quem vai preparar um arquivo de importação
// ==========================================

use crate::importer::error::ImportacaoError;
use crate::importer::field_mapper::COLUNAS_MODELO;

// ==========================================
// GeradorModelo
// ==========================================
pub struct GeradorModelo;

impl GeradorModelo {
    /// Gera os bytes do CSV de modelo
    ///
    /// # Retorno
    /// - Ok(Vec<u8>): uma linha de cabeçalho com as 15 colunas,
    ///   terminada por quebra de linha, em UTF-8
    pub fn gerar() -> Result<Vec<u8>, ImportacaoError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&COLUNAS_MODELO)?;
        writer.flush()?;

        writer
            .into_inner()
            .map_err(|e| ImportacaoError::CsvInvalido(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gerar_somente_cabecalho() {
        let bytes = GeradorModelo::gerar().unwrap();
        let texto = String::from_utf8(bytes).unwrap();

        assert_eq!(
            texto,
            "Nome,Email,CPF,DataNascimento,Telefone,Sexo,Naturalidade,Nacionalidade,\
             CEP,Logradouro,Numero,Complemento,Bairro,Cidade,Estado\n"
        );
    }

    #[test]
    fn test_modelo_reanalisavel() {
        use crate::importer::file_parser::CsvParser;

        let bytes = GeradorModelo::gerar().unwrap();
        let arquivo = CsvParser.analisar(&bytes).unwrap();

        assert_eq!(arquivo.colunas.len(), COLUNAS_MODELO.len());
        assert_eq!(arquivo.colunas[0], "Nome");
        assert_eq!(arquivo.colunas[14], "Estado");
        assert!(arquivo.linhas.is_empty());
    }
}
