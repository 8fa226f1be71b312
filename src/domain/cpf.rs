// ==========================================
// Sistema de Cadastro de Pessoas - Validação de CPF
// ==========================================
// Algoritmo dos dígitos verificadores:
// - soma ponderada dos 9 primeiros dígitos (pesos 10..2), resto mod 11,
//   dígito = 0 se resto < 2, senão 11 - resto
// - segundo dígito repete a conta com pesos 11..2 sobre 10 dígitos
// ==========================================
// Funções puras: sem I/O, sem estado compartilhado
// ==========================================

/// Remove tudo que não for dígito
pub fn normalizar(cpf: &str) -> String {
    cpf.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Valida um CPF pelos dígitos verificadores
///
/// Aceita entrada com ou sem máscara (pontos e hífen).
///
/// # Retorno
/// - true: CPF válido
/// - false: tamanho diferente de 11 dígitos, sequência de dígitos
///   repetidos ou dígito verificador incorreto
pub fn validar(cpf: &str) -> bool {
    let digitos = normalizar(cpf);
    if digitos.len() != 11 {
        return false;
    }

    let valores: Vec<u32> = digitos.chars().filter_map(|c| c.to_digit(10)).collect();

    // Sequências como 111.111.111-11 fecham a conta, mas são inválidas
    if valores.iter().all(|d| *d == valores[0]) {
        return false;
    }

    valores[9] == digito_verificador(&valores[..9])
        && valores[10] == digito_verificador(&valores[..10])
}

/// Formata um CPF como XXX.XXX.XXX-XX
///
/// Não valida os dígitos verificadores. Se a entrada não tiver
/// exatamente 11 dígitos, é devolvida sem alteração.
pub fn formatar(cpf: &str) -> String {
    let digitos = normalizar(cpf);
    if digitos.len() != 11 {
        return cpf.to_string();
    }

    format!(
        "{}.{}.{}-{}",
        &digitos[..3],
        &digitos[3..6],
        &digitos[6..9],
        &digitos[9..]
    )
}

/// Calcula o dígito verificador do prefixo informado
///
/// Os pesos decrescem de (tamanho do prefixo + 1) até 2.
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
