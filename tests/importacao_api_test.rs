// ==========================================
// Camada de API - testes de integração
// ==========================================
// Alvo: ImportacaoApi e PessoaApi sobre banco SQLite temporário
// ==========================================


use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;

use cadastro_pessoas::api::{ApiError, ImportacaoApi, PessoaApi};
use cadastro_pessoas::cache::{CacheStore, MemoryCache};
use cadastro_pessoas::command::CriarPessoaCommand;
use cadastro_pessoas::config::ConfigManager;
use cadastro_pessoas::domain::types::Sexo;
use cadastro_pessoas::domain::Endereco;
use cadastro_pessoas::logging;
use test_helpers::{create_test_db, montar_csv_basico};

/// Comando mínimo válido para os testes de criação
fn comando_basico(nome: &str, cpf: &str) -> CriarPessoaCommand {
    CriarPessoaCommand {
        nome: nome.to_string(),
        email: None,
        cpf: cpf.to_string(),
        data_nascimento: None,
        telefone: None,
        sexo: None,
        naturalidade: None,
        nacionalidade: None,
        endereco: None,
    }
}

// ==========================================
// ImportacaoApi
// ==========================================

#[tokio::test]
async fn test_importar_bytes_pela_api() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = ImportacaoApi::new(db_path.clone());

    let csv = montar_csv_basico(&[
        "Maria Silva,maria@exemplo.com,52998224725,1990-05-20",
        "João Souza,joao@exemplo.com,11144477735,1985-03-15",
    ]);

    let resultado = api
        .importar_bytes(csv.as_bytes())
        .await
        .expect("Importação deveria ter sucesso");

    assert_eq!(resultado.total, 2);
    assert_eq!(resultado.sucesso, 2);

    let pessoas = PessoaApi::new(&db_path).expect("Failed to create api");
    assert_eq!(pessoas.contar().await.unwrap(), 2);
}

#[tokio::test]
async fn test_importar_arquivo_inexistente_vira_not_found() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = ImportacaoApi::new(db_path);

    let resultado = api
        .importar_arquivo(Path::new("/tmp/nao-existe-mesmo.csv"))
        .await;

    match resultado {
        Err(ApiError::NotFound(mensagem)) => {
            assert!(mensagem.contains("Arquivo não encontrado"));
        }
        outro => panic!("Esperava NotFound, veio {:?}", outro.map(|r| r.total)),
    }
}

#[tokio::test]
async fn test_importar_varios_pela_api() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = ImportacaoApi::new(db_path);

    let caminhos = vec![
        PathBuf::from("tests/fixtures/pessoas_validas.csv"),
        PathBuf::from("/tmp/nao-existe-mesmo.csv"),
    ];

    let resultados = api
        .importar_varios(&caminhos)
        .await
        .expect("A chamada em si não deveria falhar");

    assert_eq!(resultados.len(), 2);
    assert_eq!(resultados[0].as_ref().unwrap().sucesso, 4);
    assert!(resultados[1]
        .as_ref()
        .unwrap_err()
        .contains("Arquivo não encontrado"));
}

#[tokio::test]
async fn test_importacao_invalida_o_cache_da_listagem() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");

    // As duas APIs compartilham o mesmo cache sobre o mesmo banco
    let cache: Arc<dyn CacheStore> = Arc::new(MemoryCache::new());
    let pessoas = PessoaApi::with_cache(&db_path, cache.clone()).expect("Failed to create api");
    let importacao = ImportacaoApi::with_cache(db_path, cache);

    // A listagem vazia povoa o cache
    assert!(pessoas.listar().await.unwrap().is_empty());

    let csv = montar_csv_basico(&["Maria Silva,maria@exemplo.com,52998224725,1990-05-20"]);
    let resultado = importacao
        .importar_bytes(csv.as_bytes())
        .await
        .expect("Importação deveria ter sucesso");
    assert_eq!(resultado.sucesso, 1);

    // A linha criada pela importação invalida a chave; a listagem
    // seguinte deve enxergá-la em vez de servir o cache antigo
    let nomes: Vec<String> = pessoas
        .listar()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.nome)
        .collect();

    assert_eq!(nomes, vec!["Maria Silva"]);
    assert_eq!(pessoas.contar().await.unwrap(), 1);
}

#[tokio::test]
async fn test_modelo_importacao_padrao() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = ImportacaoApi::new(db_path);

    let modelo = api.modelo_importacao().expect("Modelo deveria ser gerado");

    assert_eq!(modelo.nome_arquivo, "modelo_importacao.csv");
    assert!(modelo.conteudo.starts_with("Nome,Email,CPF,DataNascimento"));
    assert!(modelo.conteudo.ends_with("Estado\n"));
    // Só o cabeçalho, nenhuma linha de dados
    assert_eq!(modelo.conteudo.lines().count(), 1);
}

#[tokio::test]
async fn test_modelo_importacao_nome_vindo_da_config() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");

    let config = ConfigManager::new(&db_path).expect("Failed to create config");
    config
        .set_config_value("importacao/modelo_nome_arquivo", "gabarito_pessoas.csv")
        .expect("Failed to set config");

    let api = ImportacaoApi::new(db_path);
    let modelo = api.modelo_importacao().expect("Modelo deveria ser gerado");

    assert_eq!(modelo.nome_arquivo, "gabarito_pessoas.csv");
    // O conteúdo não muda com o nome
    assert!(modelo.conteudo.starts_with("Nome,Email,CPF"));
}

// ==========================================
// PessoaApi
// ==========================================

#[tokio::test]
async fn test_criar_e_buscar_pela_api() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = PessoaApi::new(&db_path).expect("Failed to create api");

    let comando = CriarPessoaCommand {
        nome: "Maria Silva".to_string(),
        email: Some("maria@exemplo.com".to_string()),
        cpf: "529.982.247-25".to_string(),
        data_nascimento: NaiveDate::from_ymd_opt(1990, 5, 20),
        telefone: Some("11 98888-7777".to_string()),
        sexo: Some(Sexo::Feminino),
        naturalidade: Some("São Paulo".to_string()),
        nacionalidade: Some("Brasileira".to_string()),
        endereco: Some(Endereco {
            cep: Some("01001-000".to_string()),
            logradouro: Some("Praça da Sé".to_string()),
            numero: Some("100".to_string()),
            complemento: None,
            bairro: Some("Sé".to_string()),
            cidade: Some("São Paulo".to_string()),
            estado: Some("SP".to_string()),
        }),
    };

    let pessoa_id = api.criar(comando).await.expect("Criação deveria ter sucesso");
    assert!(!pessoa_id.is_empty());

    // A busca aceita CPF com ou sem máscara
    let pessoa = api
        .buscar_por_cpf("52998224725")
        .await
        .expect("Pessoa deveria existir");

    assert_eq!(pessoa.pessoa_id, pessoa_id);
    assert_eq!(pessoa.nome, "Maria Silva");
    assert_eq!(pessoa.cpf, "52998224725");
    assert_eq!(pessoa.sexo, Some(Sexo::Feminino));
    assert_eq!(pessoa.bairro.as_deref(), Some("Sé"));
}

#[tokio::test]
async fn test_criar_cpf_duplicado_vira_erro_de_validacao() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = PessoaApi::new(&db_path).expect("Failed to create api");

    api.criar(comando_basico("Maria Silva", "52998224725"))
        .await
        .expect("Primeira criação deveria ter sucesso");

    let resultado = api
        .criar(comando_basico("Maria Duplicada", "529.982.247-25"))
        .await;

    match resultado {
        Err(ApiError::ValidationError(mensagem)) => {
            assert_eq!(mensagem, "CPF já cadastrado");
        }
        outro => panic!("Esperava ValidationError, veio {:?}", outro),
    }
}

#[tokio::test]
async fn test_criar_sem_nome_vira_erro_de_validacao() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = PessoaApi::new(&db_path).expect("Failed to create api");

    let resultado = api.criar(comando_basico("   ", "52998224725")).await;

    match resultado {
        Err(ApiError::ValidationError(mensagem)) => {
            assert_eq!(mensagem, "Nome é obrigatório");
        }
        outro => panic!("Esperava ValidationError, veio {:?}", outro),
    }
}

#[tokio::test]
async fn test_buscar_por_cpf_vazio_e_inexistente() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = PessoaApi::new(&db_path).expect("Failed to create api");

    assert!(matches!(
        api.buscar_por_cpf("").await,
        Err(ApiError::InvalidInput(_))
    ));
    assert!(matches!(
        api.buscar_por_cpf("   ").await,
        Err(ApiError::InvalidInput(_))
    ));
    assert!(matches!(
        api.buscar_por_cpf("39053344705").await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_listar_reflete_criacoes_e_ordena_por_nome() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = PessoaApi::new(&db_path).expect("Failed to create api");

    assert!(api.listar().await.unwrap().is_empty());

    api.criar(comando_basico("Zuleica Prado", "52998224725"))
        .await
        .expect("Criação deveria ter sucesso");

    // Primeira listagem povoa o cache
    let depois_da_primeira = api.listar().await.unwrap();
    assert_eq!(depois_da_primeira.len(), 1);

    // Nova criação invalida o cache; a listagem seguinte deve enxergá-la
    api.criar(comando_basico("Ana Beatriz", "11144477735"))
        .await
        .expect("Criação deveria ter sucesso");

    let nomes: Vec<String> = api
        .listar()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.nome)
        .collect();

    assert_eq!(nomes, vec!["Ana Beatriz", "Zuleica Prado"]);
    assert_eq!(api.contar().await.unwrap(), 2);
}

#[tokio::test]
async fn test_listar_paginado_honra_tamanho_configurado() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");

    let config = ConfigManager::new(&db_path).expect("Failed to create config");
    config
        .set_config_value("listagem/tamanho_pagina", "2")
        .expect("Failed to set config");

    let api = PessoaApi::new(&db_path).expect("Failed to create api");

    // Inserção fora de ordem alfabética
    for (nome, cpf) in [
        ("Carlos Lima", "52998224725"),
        ("Ana Pereira", "11144477735"),
        ("Beatriz Costa", "12345678909"),
    ] {
        api.criar(comando_basico(nome, cpf))
            .await
            .expect("Criação deveria ter sucesso");
    }

    let primeira: Vec<String> = api
        .listar_paginado(1)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.nome)
        .collect();
    assert_eq!(primeira, vec!["Ana Pereira", "Beatriz Costa"]);

    let segunda: Vec<String> = api
        .listar_paginado(2)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.nome)
        .collect();
    assert_eq!(segunda, vec!["Carlos Lima"]);

    // Depois do fim do cadastro a página vem vazia; zero é inválido
    assert!(api.listar_paginado(3).await.unwrap().is_empty());
    assert!(matches!(
        api.listar_paginado(0).await,
        Err(ApiError::InvalidInput(_))
    ));
}
