// ==========================================
// Sistema de Cadastro de Pessoas - Importador de pessoas
// ==========================================
// Responsabilidade: integrar o fluxo de importação de ponta a ponta
// Fluxo: análise → mapeamento → validação → despacho → agregação
// ==========================================
// Regra central: nenhuma linha malformada aborta o lote; a falha é
// registrada e o processamento segue para a próxima linha
// ==========================================

use crate::command::{CommandDispatcher, CriarPessoaCommand};
use crate::domain::cpf;
use crate::domain::types::Sexo;
use crate::domain::{DetalheErro, Endereco, ImportacaoResultado, RegistroPessoaBruto};
use crate::importer::error::ImportacaoError;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::CsvParser;
use crate::importer::importador_trait::ImportadorPessoas;
use crate::importer::validator::ValidadorPessoa;
use crate::repository::PessoaRepository;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// ImportadorPessoasImpl
// ==========================================
pub struct ImportadorPessoasImpl<D, R>
where
    D: CommandDispatcher,
    R: PessoaRepository,
{
    // Despachante do comando de criação
    dispatcher: D,

    // Consulta de unicidade contra o cadastro
    repo: Arc<R>,

    // Analisador de arquivo
    parser: CsvParser,
}

impl<D, R> ImportadorPessoasImpl<D, R>
where
    D: CommandDispatcher,
    R: PessoaRepository,
{
    /// Cria um novo importador
    ///
    /// # Parâmetros
    /// - dispatcher: despachante do comando de criação
    /// - repo: repositório para a checagem de CPF já cadastrado
    pub fn new(dispatcher: D, repo: Arc<R>) -> Self {
        Self {
            dispatcher,
            repo,
            parser: CsvParser,
        }
    }

    /// Processa uma linha já mapeada
    ///
    /// Checagens em ordem fixa, parando na primeira falha (no máximo
    /// um erro por linha). O despachante só é chamado quando a linha
    /// passou em todas as checagens anteriores.
    ///
    /// # Parâmetros
    /// - cpfs_importados: CPFs já criados neste lote (normalizados)
    ///
    /// # Retorno
    /// - Ok(String): id da pessoa criada
    /// - Err: mensagem que vira DetalheErro.mensagem
    async fn processar_linha(
        &self,
        registro: &RegistroPessoaBruto,
        cpfs_importados: &mut HashSet<String>,
    ) -> Result<String, ImportacaoError> {
        ValidadorPessoa::validar_nome(registro)?;
        let cpf_bruto = ValidadorPessoa::validar_cpf_presente(registro)?;
        ValidadorPessoa::validar_cpf_digitos(cpf_bruto)?;

        let cpf_normalizado = cpf::normalizar(cpf_bruto);

        // Duplicado dentro do próprio lote (linha anterior já criada)
        if cpfs_importados.contains(&cpf_normalizado) {
            return Err(ImportacaoError::Linha("CPF já cadastrado".to_string()));
        }

        // Duplicado contra o cadastro existente
        if self.repo.existe_cpf(&cpf_normalizado).await? {
            return Err(ImportacaoError::Linha("CPF já cadastrado".to_string()));
        }

        let data_nascimento = ValidadorPessoa::validar_data_nascimento(registro)?;

        let comando = Self::montar_comando(registro, data_nascimento);
        let pessoa_id = self.dispatcher.executar(comando).await?;

        // Linha que falhou não reserva o CPF; só criação efetivada conta
        cpfs_importados.insert(cpf_normalizado);

        Ok(pessoa_id)
    }

    /// Monta o comando de criação a partir do registro validado
    ///
    /// O endereço só entra no comando se alguma das sete colunas de
    /// endereço veio preenchida.
    fn montar_comando(
        registro: &RegistroPessoaBruto,
        data_nascimento: NaiveDate,
    ) -> CriarPessoaCommand {
        let endereco = Endereco {
            cep: registro.cep.clone(),
            logradouro: registro.logradouro.clone(),
            numero: registro.numero.clone(),
            complemento: registro.complemento.clone(),
            bairro: registro.bairro.clone(),
            cidade: registro.cidade.clone(),
            estado: registro.estado.clone(),
        };
        let endereco = if endereco.esta_vazio() {
            None
        } else {
            Some(endereco)
        };

        CriarPessoaCommand {
            nome: registro.nome.clone().unwrap_or_default(),
            email: registro.email.clone(),
            cpf: registro.cpf.clone().unwrap_or_default(),
            data_nascimento: Some(data_nascimento),
            telefone: registro.telefone.clone(),
            sexo: registro.sexo.as_deref().and_then(Sexo::from_codigo),
            naturalidade: registro.naturalidade.clone(),
            nacionalidade: registro.nacionalidade.clone(),
            endereco,
        }
    }
}

#[async_trait::async_trait]
impl<D, R> ImportadorPessoas for ImportadorPessoasImpl<D, R>
where
    D: CommandDispatcher,
    R: PessoaRepository,
{
    #[instrument(skip(self, bytes))]
    async fn importar_bytes(&self, bytes: &[u8]) -> Result<ImportacaoResultado, ImportacaoError> {
        let inicio = Instant::now();
        info!(tamanho_bytes = bytes.len(), "iniciando importação de pessoas");

        // === Etapa 1: análise do arquivo ===
        debug!("etapa 1: análise do arquivo");
        let arquivo = self.parser.analisar(bytes).map_err(|e| {
            error!(error = %e, "falha na análise do arquivo");
            e
        })?;
        info!(
            linhas = arquivo.linhas.len(),
            colunas = arquivo.colunas.len(),
            "análise concluída"
        );

        // === Etapa 2: processamento linha a linha ===
        debug!("etapa 2: processamento das linhas");
        let mapper = FieldMapper::new(&arquivo.colunas);
        let mut resultado = ImportacaoResultado::novo();
        let mut cpfs_importados: HashSet<String> = HashSet::new();

        for linha in &arquivo.linhas {
            let registro = mapper.mapear(&linha.valores);

            match self.processar_linha(&registro, &mut cpfs_importados).await {
                Ok(pessoa_id) => {
                    debug!(linha = linha.numero, pessoa_id = %pessoa_id, "linha importada");
                    resultado.registrar_sucesso();
                }
                Err(e) => {
                    let mensagem = e.to_string();
                    warn!(linha = linha.numero, mensagem = %mensagem, "linha rejeitada");
                    resultado.registrar_erro(DetalheErro::novo(
                        linha.numero,
                        mensagem,
                        &arquivo.colunas,
                        &linha.valores,
                    ));
                }
            }
        }

        info!(
            total = resultado.total,
            sucesso = resultado.sucesso,
            erros = resultado.erros,
            duracao_ms = inicio.elapsed().as_millis() as u64,
            "importação concluída"
        );

        Ok(resultado)
    }

    async fn importar_arquivo(
        &self,
        caminho: &Path,
    ) -> Result<ImportacaoResultado, ImportacaoError> {
        if !caminho.exists() {
            return Err(ImportacaoError::ArquivoNaoEncontrado(
                caminho.display().to_string(),
            ));
        }

        let bytes = std::fs::read(caminho)?;
        self.importar_bytes(&bytes).await
    }

    async fn importar_varios(
        &self,
        caminhos: &[PathBuf],
    ) -> Vec<Result<ImportacaoResultado, String>> {
        info!(arquivos = caminhos.len(), "iniciando importação de vários arquivos");

        let futuros = caminhos.iter().map(|caminho| async move {
            self.importar_arquivo(caminho)
                .await
                .map_err(|e| e.to_string())
        });

        futures::future::join_all(futuros).await
    }
}
