// ==========================================
// Gerador de dados de teste
// ==========================================
// Uso: gera conjuntos de CSV de importação
// Saída: tests/fixtures/datasets/*.csv
// ==========================================

use csv::Writer;
use std::error::Error;
use std::fs;
use std::fs::File;

// Cabeçalho do modelo de importação
const CSV_CABECALHO: &[&str] = &[
    "Nome",
    "Email",
    "CPF",
    "DataNascimento",
    "Telefone",
    "Sexo",
    "Naturalidade",
    "Nacionalidade",
    "CEP",
    "Logradouro",
    "Numero",
    "Complemento",
    "Bairro",
    "Cidade",
    "Estado",
];

const NOMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Diego", "Elisa", "Fabio", "Gabriela", "Heitor", "Iara", "Jorge",
    "Larissa", "Marcos", "Natalia", "Otavio", "Patricia", "Rafael", "Sofia", "Thiago",
    "Valentina", "Wagner",
];

const SOBRENOMES: &[&str] = &[
    "Almeida", "Barbosa", "Cardoso", "Duarte", "Esteves", "Ferreira", "Gomes", "Henriques",
    "Lima", "Machado", "Nogueira", "Oliveira", "Pereira", "Queiroz", "Ribeiro", "Santos",
    "Teixeira", "Vieira",
];

const CIDADES: &[(&str, &str)] = &[
    ("São Paulo", "SP"),
    ("Rio de Janeiro", "RJ"),
    ("Belo Horizonte", "MG"),
    ("Curitiba", "PR"),
    ("Porto Alegre", "RS"),
    ("Salvador", "BA"),
    ("Recife", "PE"),
    ("Fortaleza", "CE"),
];

// Registro de pessoa (todas as células como texto, igual ao CSV)
#[derive(Clone)]
struct RegistroPessoa {
    nome: String,
    email: String,
    cpf: String,
    data_nascimento: String,
    telefone: String,
    sexo: String,
    naturalidade: String,
    nacionalidade: String,
    cep: String,
    logradouro: String,
    numero: String,
    complemento: String,
    bairro: String,
    cidade: String,
    estado: String,
}

impl RegistroPessoa {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.nome.clone(),
            self.email.clone(),
            self.cpf.clone(),
            self.data_nascimento.clone(),
            self.telefone.clone(),
            self.sexo.clone(),
            self.naturalidade.clone(),
            self.nacionalidade.clone(),
            self.cep.clone(),
            self.logradouro.clone(),
            self.numero.clone(),
            self.complemento.clone(),
            self.bairro.clone(),
            self.cidade.clone(),
            self.estado.clone(),
        ]
    }
}

// Dígito verificador de CPF (pesos decrescentes até 2)
fn digito_verificador(prefixo: &[u32]) -> u32 {
    let tamanho = prefixo.len() as u32;
    let soma: u32 = prefixo
        .iter()
        .enumerate()
        .map(|(i, d)| d * (tamanho + 1 - i as u32))
        .sum();

    let resto = soma % 11;
    if resto < 2 {
        0
    } else {
        11 - resto
    }
}

// Gera um CPF válido a partir de uma base de 9 dígitos
fn gerar_cpf(base: u32) -> String {
    let mut digitos: Vec<u32> = format!("{:09}", base)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    let d1 = digito_verificador(&digitos);
    digitos.push(d1);
    let d2 = digito_verificador(&digitos);

    format!("{:09}{}{}", base, d1, d2)
}

// Gera um CPF com o último dígito verificador errado
fn gerar_cpf_invalido(base: u32) -> String {
    let valido = gerar_cpf(base);
    let ultimo = valido.chars().last().and_then(|c| c.to_digit(10)).unwrap_or(0);
    format!("{}{}", &valido[..10], (ultimo + 1) % 10)
}

// Gera um registro válido determinístico
fn gerar_registro_normal(indice: usize) -> RegistroPessoa {
    let base = 300_000_001 + indice as u32 * 7;
    let (cidade, uf) = CIDADES[indice % CIDADES.len()];

    let ano = 1950 + indice % 50;
    let mes = 1 + indice % 12;
    let dia = 1 + indice % 28;

    // Alterna os dois formatos de data aceitos
    let data_nascimento = if indice % 4 == 3 {
        format!("{:02}/{:02}/{}", dia, mes, ano)
    } else {
        format!("{}-{:02}-{:02}", ano, mes, dia)
    };

    // Um terço dos registros fica sem endereço
    let sem_endereco = indice % 3 == 2;

    RegistroPessoa {
        nome: format!(
            "{} {}",
            NOMES[indice % NOMES.len()],
            SOBRENOMES[indice % SOBRENOMES.len()]
        ),
        email: format!("pessoa{:05}@exemplo.com", indice),
        cpf: gerar_cpf(base),
        data_nascimento,
        telefone: format!("11 9{:04}-{:04}", 8000 + indice % 2000, 1000 + indice % 9000),
        sexo: ["1", "0"][indice % 2].to_string(),
        naturalidade: cidade.to_string(),
        nacionalidade: "Brasileira".to_string(),
        cep: if sem_endereco {
            String::new()
        } else {
            format!("{:05}-{:03}", 1000 + indice % 90000, indice % 1000)
        },
        logradouro: if sem_endereco {
            String::new()
        } else {
            format!("Rua {}", SOBRENOMES[(indice + 5) % SOBRENOMES.len()])
        },
        numero: if sem_endereco {
            String::new()
        } else {
            format!("{}", 10 + indice % 990)
        },
        complemento: String::new(),
        bairro: if sem_endereco {
            String::new()
        } else {
            "Centro".to_string()
        },
        cidade: if sem_endereco {
            String::new()
        } else {
            cidade.to_string()
        },
        estado: if sem_endereco {
            String::new()
        } else {
            uf.to_string()
        },
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("Gerando conjuntos de dados de teste...");

    fs::create_dir_all("tests/fixtures/datasets")?;

    // 1. Dados normais (100 registros)
    gerar_dados_normais()?;

    // 2. Volume (1000 registros)
    gerar_volume()?;

    // 3. CPFs repetidos dentro do lote
    gerar_duplicados_no_lote()?;

    // 4. Campos obrigatórios ausentes
    gerar_campos_obrigatorios()?;

    // 5. Problemas mistos
    gerar_problemas_mistos()?;

    println!("✓ Todos os conjuntos gerados!");
    Ok(())
}

fn gerar_dados_normais() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/01_dados_normais.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_CABECALHO)?;

    for i in 0..100 {
        let registro = gerar_registro_normal(i);
        wtr.write_record(&registro.to_row())?;
    }

    wtr.flush()?;
    println!("✓ Gerado 01_dados_normais.csv (100 registros)");
    Ok(())
}

fn gerar_volume() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/02_volume.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_CABECALHO)?;

    for i in 0..1000 {
        let registro = gerar_registro_normal(i + 10000); // sem colisão com os outros conjuntos
        wtr.write_record(&registro.to_row())?;
    }

    wtr.flush()?;
    println!("✓ Gerado 02_volume.csv (1000 registros)");
    Ok(())
}

fn gerar_duplicados_no_lote() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/03_duplicados_no_lote.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_CABECALHO)?;

    // 15 registros únicos
    for i in 0..15 {
        let registro = gerar_registro_normal(i + 20000);
        wtr.write_record(&registro.to_row())?;
    }

    // 5 repetições de CPFs já presentes acima
    for i in [0, 3, 6, 9, 12] {
        let registro = gerar_registro_normal(i + 20000);
        wtr.write_record(&registro.to_row())?;
    }

    wtr.flush()?;
    println!("✓ Gerado 03_duplicados_no_lote.csv (20 registros, 5 repetidos)");
    Ok(())
}

fn gerar_campos_obrigatorios() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/04_campos_obrigatorios.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_CABECALHO)?;

    // Sem nome
    for i in 0..3 {
        let mut registro = gerar_registro_normal(i + 30000);
        registro.nome = "".to_string();
        wtr.write_record(&registro.to_row())?;
    }

    // Sem CPF
    for i in 0..3 {
        let mut registro = gerar_registro_normal(i + 30003);
        registro.cpf = "".to_string();
        wtr.write_record(&registro.to_row())?;
    }

    // Sem data de nascimento
    for i in 0..3 {
        let mut registro = gerar_registro_normal(i + 30006);
        registro.data_nascimento = "".to_string();
        wtr.write_record(&registro.to_row())?;
    }

    wtr.flush()?;
    println!("✓ Gerado 04_campos_obrigatorios.csv (9 registros com campos ausentes)");
    Ok(())
}

fn gerar_problemas_mistos() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/05_problemas_mistos.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_CABECALHO)?;

    // Registros normais (10)
    for i in 0..10 {
        let registro = gerar_registro_normal(i + 40000);
        wtr.write_record(&registro.to_row())?;
    }

    // CPFs repetidos (5)
    for i in [0, 2, 4, 6, 8] {
        let registro = gerar_registro_normal(i + 40000);
        wtr.write_record(&registro.to_row())?;
    }

    // Sem nome (5)
    for i in 0..5 {
        let mut registro = gerar_registro_normal(i + 40010);
        registro.nome = "".to_string();
        wtr.write_record(&registro.to_row())?;
    }

    // CPF com dígito verificador errado (5)
    for i in 0..5 {
        let mut registro = gerar_registro_normal(i + 40015);
        registro.cpf = gerar_cpf_invalido(300_000_001 + (i + 40015) as u32 * 7);
        wtr.write_record(&registro.to_row())?;
    }

    // Data de nascimento ilegível (5)
    for i in 0..5 {
        let mut registro = gerar_registro_normal(i + 40020);
        registro.data_nascimento = "31-02-1990".to_string();
        wtr.write_record(&registro.to_row())?;
    }

    wtr.flush()?;
    println!("✓ Gerado 05_problemas_mistos.csv (30 registros, problemas variados)");
    Ok(())
}
