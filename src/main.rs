// ==========================================
// Sistema de Cadastro de Pessoas - Entrada principal
// ==========================================
// Stack: Rust + SQLite
// Uso:
//   cadastro-pessoas importar <arquivo.csv>... [--db <caminho>]
//   cadastro-pessoas modelo [--db <caminho>]
//   cadastro-pessoas listar [--pagina <n>] [--db <caminho>]
// ==========================================

use std::path::{Path, PathBuf};

use cadastro_pessoas::api::{ImportacaoApi, PessoaApi};
use cadastro_pessoas::db::get_default_db_path;
use cadastro_pessoas::i18n::{t, t_with_args};
use cadastro_pessoas::{logging, APP_NAME, VERSION};

const USO: &str = "Uso:
  cadastro-pessoas importar <arquivo.csv>... [--db <caminho>]
  cadastro-pessoas modelo [--db <caminho>]
  cadastro-pessoas listar [--pagina <n>] [--db <caminho>]";

#[tokio::main]
async fn main() {
    // Inicializa o sistema de logs
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(e) = executar(args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

// ==========================================
// Despacho de subcomandos
// ==========================================
async fn executar(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(comando) = args.first() else {
        eprintln!("{}", USO);
        return Err("Nenhum comando informado".into());
    };

    // Separa caminho do banco (--db <caminho>) dos demais argumentos
    let (restantes, db_path) = extrair_db_path(&args[1..])?;
    let db_path = db_path.unwrap_or_else(get_default_db_path);
    tracing::info!(db_path = %db_path, "usando banco de dados");

    match comando.as_str() {
        "importar" => comando_importar(&restantes, &db_path).await,
        "modelo" => comando_modelo(&db_path),
        "listar" => comando_listar(&restantes, &db_path).await,
        outro => {
            eprintln!("{}", USO);
            Err(format!("Comando desconhecido: {}", outro).into())
        }
    }
}

/// Remove o par `--db <caminho>` da lista de argumentos
fn extrair_db_path(args: &[String]) -> Result<(Vec<String>, Option<String>), String> {
    let mut restantes = Vec::new();
    let mut db_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--db" {
            match iter.next() {
                Some(caminho) => db_path = Some(caminho.clone()),
                None => return Err("Faltou o caminho após --db".to_string()),
            }
        } else {
            restantes.push(arg.clone());
        }
    }

    Ok((restantes, db_path))
}

// ==========================================
// importar: processa um ou mais arquivos CSV
// ==========================================
async fn comando_importar(
    arquivos: &[String],
    db_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if arquivos.is_empty() {
        eprintln!("{}", USO);
        return Err("Informe ao menos um arquivo para importar".into());
    }

    // Valida a existência antes de abrir o banco
    for arquivo in arquivos {
        if !PathBuf::from(arquivo).exists() {
            return Err(t_with_args("import.file_not_found", &[("path", arquivo)]).into());
        }
    }

    let api = ImportacaoApi::new(db_path.to_string());

    if arquivos.len() == 1 {
        let resultado = api.importar_arquivo(Path::new(&arquivos[0])).await?;
        println!("{}", serde_json::to_string_pretty(&resultado)?);
        println!(
            "{}",
            t_with_args(
                "import.summary",
                &[
                    ("sucesso", &resultado.sucesso.to_string()),
                    ("total", &resultado.total.to_string()),
                ],
            )
        );
        return Ok(());
    }

    let caminhos: Vec<PathBuf> = arquivos.iter().map(PathBuf::from).collect();
    let resultados = api.importar_varios(&caminhos).await?;

    let mut houve_falha = false;
    for (caminho, resultado) in caminhos.iter().zip(resultados) {
        match resultado {
            Ok(r) => {
                println!("=== {} ===", caminho.display());
                println!("{}", serde_json::to_string_pretty(&r)?);
            }
            Err(mensagem) => {
                houve_falha = true;
                eprintln!("=== {} ===", caminho.display());
                eprintln!("{}", mensagem);
            }
        }
    }

    if houve_falha {
        return Err(t("common.error").into());
    }
    Ok(())
}

// ==========================================
// modelo: imprime o modelo de importação
// ==========================================
fn comando_modelo(db_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let api = ImportacaoApi::new(db_path.to_string());
    let modelo = api.modelo_importacao()?;

    tracing::info!(nome_arquivo = %modelo.nome_arquivo, "modelo gerado");
    print!("{}", modelo.conteudo);
    Ok(())
}

// ==========================================
// listar: imprime uma página do cadastro em JSON
// ==========================================
// O tamanho da página vem da configuração listagem/tamanho_pagina
async fn comando_listar(args: &[String], db_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let pagina = extrair_pagina(args)?;

    let api = PessoaApi::new(db_path)?;
    let pessoas = api.listar_paginado(pagina).await?;

    if pessoas.is_empty() {
        println!("{}", t("listagem.empty"));
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&pessoas)?);
    tracing::info!(pagina, quantidade = pessoas.len(), "listagem concluída");
    Ok(())
}

/// Lê o `--pagina <n>` opcional (padrão: primeira página)
fn extrair_pagina(args: &[String]) -> Result<i64, String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--pagina" {
            let Some(valor) = iter.next() else {
                return Err("Faltou o número após --pagina".to_string());
            };
            return valor
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("Página inválida: {}", valor));
        }
    }
    Ok(1)
}
