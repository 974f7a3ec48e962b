//! # Test Vectors
//!
//! End-to-end payloads checked byte for byte, plus the properties every
//! assembled payload must satisfy.

use brcode_core::crc::checksum;
use brcode_core::key::format_key;
use brcode_core::payload::parse;
use brcode_core::text::normalize;
use brcode_core::*;

fn assemble_ok(request: &PayloadRequest) -> String {
    assemble(request).expect("request should assemble")
}

/// Phone key, no amount, explicit city
#[test]
fn test_bella_arte_open_amount() {
    let request = PayloadRequest::new("11987654321", PixKeyType::Phone, "Bella Arte")
        .with_city("SAO PAULO");

    let first = assemble_ok(&request);
    let second = assemble_ok(&request);

    assert_eq!(first, second);
    assert_eq!(
        first,
        "00020126360014br.gov.bcb.pix0114+55119876543215204000053039865802BR5910BELLA ARTE6009SAO PAULO62070503***63043E12"
    );
    assert!(!first.contains("5405"));
}

/// Self-check: trailing four characters are the CRC of everything before them
#[test]
fn test_checksum_recomputes_independently() {
    let payload = assemble_ok(
        &PayloadRequest::new("11987654321", PixKeyType::Phone, "Bella Arte").with_city("SAO PAULO"),
    );
    let (body, crc) = payload.split_at(payload.len() - 4);
    assert!(body.ends_with("6304"));
    assert_eq!(checksum(body), crc);
}

/// CPF key, accented name and city, amount and description
#[test]
fn test_cpf_with_everything() {
    let request = PayloadRequest::new(
        "123.456.789-09",
        PixKeyType::Cpf,
        "José da Silva Conceição Pereira Azevedo",
    )
    .with_city("São José dos Campos")
    .with_amount(Amount::from_centavos(2599))
    .with_description("Pedido 42 - Salão");

    assert_eq!(
        assemble_ok(&request),
        "00020126540014br.gov.bcb.pix0111123456789090217PEDIDO 42 - SALAO520400005303986540525.995802BR5925JOSE DA SILVA CONCEICAO P6015SAO JOSE DOS CA62070503***6304FDCE"
    );
}

/// CNPJ key with a round amount
#[test]
fn test_cnpj_round_amount() {
    let request = PayloadRequest::new("12.345.678/0001-95", PixKeyType::Cnpj, "Bella Arte Estúdio")
        .with_city("Curitiba")
        .with_amount("150".parse().unwrap())
        .with_description("Reserva");

    assert_eq!(
        assemble_ok(&request),
        "00020126470014br.gov.bcb.pix0114123456780001950207RESERVA5204000053039865406150.005802BR5918BELLA ARTE ESTUDIO6008CURITIBA62070503***63045186"
    );
}

/// E-mail key, default city
#[test]
fn test_email_default_city() {
    let request = PayloadRequest::new("loja@example.com", PixKeyType::Email, "Café Ipê");
    assert_eq!(
        assemble_ok(&request),
        "00020126380014br.gov.bcb.pix0116loja@example.com5204000053039865802BR5908CAFE IPE6009SAO PAULO62070503***6304C23C"
    );
}

/// Random key matching the manual's example layout (name uppercased)
#[test]
fn test_random_key() {
    let request = PayloadRequest::new(
        "123e4567-e12b-12d1-a456-426655440000",
        PixKeyType::Random,
        "Fulano de Tal",
    )
    .with_city("BRASILIA");

    assert_eq!(
        assemble_ok(&request),
        "00020126580014br.gov.bcb.pix0136123e4567-e12b-12d1-a456-4266554400005204000053039865802BR5913FULANO DE TAL6008BRASILIA62070503***6304F012"
    );
}

/// Amount 10.5 is emitted as tag 54, length 05, value 10.50
#[test]
fn test_amount_field() {
    let base =
        PayloadRequest::new("11987654321", PixKeyType::Phone, "Bella Arte").with_city("SAO PAULO");

    let amount = Amount::try_from_decimal(10.5).unwrap();
    let with_amount = assemble_ok(&base.clone().with_amount(amount));
    let idx = with_amount.find("540510.50").expect("amount field present");
    assert!(idx > with_amount.find("26").unwrap());
    assert!(with_amount.ends_with("63045F3E"));

    let zero = assemble_ok(&base.clone().with_amount(Amount::from_centavos(0)));
    assert!(parse(&zero).unwrap().iter().all(|f| f.tag != "54"));
}

/// Description of exactly 25 characters fits; 26 is truncated, never an error
#[test]
fn test_description_boundary() {
    let base = PayloadRequest::new("(11) 98765-4321", PixKeyType::Phone, "Bella Arte");

    let exact = assemble_ok(&base.clone().with_description("A".repeat(25)));
    assert!(exact.contains(&format!("0225{}", "A".repeat(25))));
    assert!(exact.ends_with("6304104D"));

    let over = assemble_ok(&base.clone().with_description("B".repeat(26)));
    assert!(over.contains(&format!("0225{}52", "B".repeat(25))));
    assert!(over.ends_with("6304FDC0"));
}

/// Name truncation keeps a 25-character diacritic-free prefix
#[test]
fn test_name_truncation() {
    let name = normalize("José da Silva Conceição Pereira Azevedo", 25);
    assert_eq!(name.chars().count(), 25);
    assert!(name.starts_with("JOSE DA SILVA CONCEICAO "));
    assert_eq!(name, name.to_ascii_uppercase());
}

/// Key formatting examples
#[test]
fn test_key_formatting_examples() {
    assert_eq!(format_key("11987654321", PixKeyType::Phone), "+5511987654321");
    assert_eq!(format_key("55 11 98765-4321", PixKeyType::Phone), "+5511987654321");
    assert_eq!(format_key("123.456.789-09", PixKeyType::Cpf), "12345678909");
}

/// Every valid request verifies, and any single-character change before the
/// checksum is detected
#[test]
fn test_payloads_verify_and_detect_changes() {
    let requests = [
        PayloadRequest::new("11987654321", PixKeyType::Phone, "Bella Arte"),
        PayloadRequest::new("123.456.789-09", PixKeyType::Cpf, "Ateliê Ação")
            .with_amount(Amount::from_centavos(1))
            .with_description("Sinal"),
        PayloadRequest::new("loja@example.com", PixKeyType::Email, "Loja")
            .with_city("Belém")
            .with_amount(Amount::from_centavos(123_456_789)),
    ];

    for request in &requests {
        let payload = assemble_ok(request);
        assert!(payload.is_ascii());
        assert!(crc::verify(&payload).is_ok());

        let body_len = payload.len() - 4;
        for i in (0..body_len).step_by(7) {
            let mut bytes = payload.clone().into_bytes();
            bytes[i] = if bytes[i] == b'0' { b'1' } else { b'0' };
            let changed = String::from_utf8(bytes).unwrap();
            assert!(crc::verify(&changed).is_err(), "change at {i} went unnoticed");
        }
    }
}

/// Requests deserialized from storefront JSON assemble the same way
#[test]
fn test_storefront_json_request() {
    let json = r#"{
        "key": "11987654321",
        "keyType": "phone",
        "merchantName": "Bella Arte",
        "merchantCity": "SAO PAULO",
        "amount": 1050
    }"#;
    let request: PayloadRequest = serde_json::from_str(json).unwrap();
    assert!(assemble_ok(&request).ends_with("63045F3E"));
}

/// Validation errors surface before anything is encoded
#[test]
fn test_error_taxonomy() {
    assert!(matches!(
        assemble(&PayloadRequest::new("", PixKeyType::Email, "Loja")),
        Err(PayloadError::MissingRequiredField { .. })
    ));
    assert!(matches!(
        assemble(&PayloadRequest::new("---", PixKeyType::Cnpj, "Loja")),
        Err(PayloadError::MissingRequiredField { .. })
    ));
    assert!(matches!(
        "boleto".parse::<PixKeyType>(),
        Err(PayloadError::InvalidKeyType(_))
    ));
    assert!(matches!(
        Amount::try_from_decimal(f64::NAN),
        Err(PayloadError::InvalidAmount { .. })
    ));
    assert!(matches!(
        assemble(&PayloadRequest::new("x".repeat(80), PixKeyType::Random, "Loja")),
        Err(PayloadError::FieldTooLong { .. })
    ));
}
