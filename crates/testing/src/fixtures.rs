//! Test fixtures for generating create payloads with realistic data.
//!
//! Values follow the shape of the production data set: Brazilian cities and
//! states, high-income professions and real sports-car models.

use chrono::{NaiveDate, NaiveDateTime};
use fake::{
    faker::{internet::en::FreeEmail, name::en::Name, phone_number::en::PhoneNumber},
    Fake,
};
use sportscar_sales_domain::{
    CustomerId, NewCustomer, NewPostSaleService, NewSale, NewSalesperson, NewTestDrive,
    NewVehicle, SaleId, SalespersonId, VehicleId,
};

const PROFESSIONS: &[&str] = &[
    "Empresário",
    "Médico",
    "Advogado",
    "Engenheiro",
    "Investidor",
    "Piloto",
    "Cirurgião",
];

const CITIES: &[(&str, &str)] = &[
    ("São Paulo", "SP"),
    ("Rio de Janeiro", "RJ"),
    ("Brasília", "DF"),
    ("Belo Horizonte", "MG"),
    ("Curitiba", "PR"),
    ("Porto Alegre", "RS"),
    ("Florianópolis", "SC"),
];

const REGIONS: &[&str] = &["Sul", "Sudeste", "Centro-Oeste", "Norte", "Nordeste"];

/// (marca, modelo, potencia_cv, cilindradas, preco_base, categoria)
const MODELS: &[(&str, &str, i64, f64, f64, &str)] = &[
    ("Ferrari", "Roma", 620, 3.9, 950_000.0, "Gran Turismo"),
    ("Lamborghini", "Huracán", 640, 5.2, 1_100_000.0, "Superesportivo"),
    ("Porsche", "911 Carrera", 385, 3.0, 550_000.0, "Esportivo"),
    ("McLaren", "720S", 720, 4.0, 1_400_000.0, "Superesportivo"),
    ("Chevrolet", "Corvette C8", 495, 6.2, 450_000.0, "Esportivo"),
    ("Ford", "Mustang GT", 460, 5.0, 400_000.0, "Muscle Car"),
];

const COLORS: &[&str] = &["Vermelho", "Preto", "Branco", "Prata", "Azul", "Amarelo"];

const PAYMENT_METHODS: &[&str] = &["À vista", "Financiamento", "Consórcio", "Leasing"];

const SERVICE_TYPES: &[&str] = &[
    "Revisão",
    "Manutenção",
    "Reparo",
    "Personalização",
    "Garantia",
    "Detalhamento",
];

fn pick<T: Copy>(values: &[T]) -> T {
    values[(0..values.len()).fake::<usize>()]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

fn random_date(years: std::ops::Range<i32>) -> NaiveDate {
    date(years.fake(), (1..13).fake(), (1..29).fake())
}

fn money(range: std::ops::Range<f64>) -> f64 {
    (range.fake::<f64>() * 100.0).round() / 100.0
}

/// Create a test customer with every field populated
pub fn create_test_customer() -> NewCustomer {
    let (cidade, estado) = pick(CITIES);
    NewCustomer {
        nome: Some(Name().fake()),
        email: Some(FreeEmail().fake()),
        telefone: Some(PhoneNumber().fake()),
        data_nascimento: Some(random_date(1960..2000)),
        genero: Some(pick(&["Masculino", "Feminino"]).to_string()),
        cidade: Some(cidade.to_string()),
        estado: Some(estado.to_string()),
        renda_anual: Some(money(150_000.0..1_500_000.0)),
        profissao: Some(pick(PROFESSIONS).to_string()),
    }
}

/// Create a test customer living in a specific state
pub fn create_test_customer_in(estado: &str) -> NewCustomer {
    NewCustomer {
        estado: Some(estado.to_string()),
        ..create_test_customer()
    }
}

/// Create an active test salesperson
pub fn create_test_salesperson() -> NewSalesperson {
    NewSalesperson {
        nome: Some(Name().fake()),
        email: Some(FreeEmail().fake()),
        data_contratacao: Some(random_date(2019..2024)),
        comissao_percentual: Some(money(2.0..5.0)),
        regiao_atuacao: Some(pick(REGIONS).to_string()),
        ativo: Some(true),
    }
}

/// Create a test vehicle from the catalogue of real models
pub fn create_test_vehicle() -> NewVehicle {
    let (marca, modelo, potencia, cilindradas, preco, categoria) = pick(MODELS);
    NewVehicle {
        marca: Some(marca.to_string()),
        modelo: Some(modelo.to_string()),
        ano_fabricacao: Some((2022..2026).fake()),
        cor: Some(pick(COLORS).to_string()),
        tipo_motor: Some(format!("{:.1}L", cilindradas)),
        potencia_cv: Some(potencia),
        cilindradas: Some(cilindradas),
        transmissao: Some("Automatizada".to_string()),
        tracao: Some(pick(&["Traseira", "Integral", "AWD"]).to_string()),
        preco_base: Some(preco),
        estoque: Some((1..6).fake()),
        categoria: Some(categoria.to_string()),
    }
}

/// Create a completed test sale linking existing rows
pub fn create_test_sale(
    cliente_id: CustomerId,
    veiculo_id: VehicleId,
    vendedor_id: SalespersonId,
) -> NewSale {
    let valor_venda = money(350_000.0..2_000_000.0);
    NewSale {
        cliente_id: Some(cliente_id),
        veiculo_id: Some(veiculo_id),
        vendedor_id: Some(vendedor_id),
        data_venda: Some(random_date(2023..2025)),
        valor_venda: Some(valor_venda),
        desconto_percentual: Some(money(0.0..8.0)),
        forma_pagamento: Some(pick(PAYMENT_METHODS).to_string()),
        numero_parcelas: Some(pick(&[12, 24, 36, 48, 60])),
        valor_entrada: Some((valor_venda * 0.3 * 100.0).round() / 100.0),
        status_venda: Some("Concluída".to_string()),
    }
}

/// Create a test drive of an existing vehicle
pub fn create_test_test_drive(
    cliente_id: CustomerId,
    veiculo_id: VehicleId,
    vendedor_responsavel_id: SalespersonId,
    resultou_venda: bool,
) -> NewTestDrive {
    let day = random_date(2023..2025);
    let data_test_drive: NaiveDateTime = day
        .and_hms_opt((9..18).fake(), pick(&[0, 30]), 0)
        .expect("fixture times are valid");

    NewTestDrive {
        cliente_id: Some(cliente_id),
        veiculo_id: Some(veiculo_id),
        data_test_drive: Some(data_test_drive),
        avaliacao: Some((1..6).fake()),
        comentario: Some("Experiência incrível, carro muito potente".to_string()),
        resultou_venda: Some(resultou_venda),
        vendedor_responsavel_id: Some(vendedor_responsavel_id),
    }
}

/// Create a post-sale service for an existing sale
pub fn create_test_service(venda_id: SaleId) -> NewPostSaleService {
    NewPostSaleService {
        venda_id: Some(venda_id),
        tipo_servico: Some(pick(SERVICE_TYPES).to_string()),
        data_servico: Some(random_date(2024..2026)),
        valor_servico: Some(money(500.0..50_000.0)),
        satisfacao_cliente: Some((1..6).fake()),
        observacoes: Some("Serviço realizado conforme agendado".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_customer() {
        let customer = create_test_customer();
        assert!(customer.nome.is_some());
        assert!(customer.email.as_deref().is_some_and(|e| e.contains('@')));
        assert_eq!(customer.estado.as_ref().map(String::len), Some(2));
    }

    #[test]
    fn test_create_test_vehicle_uses_catalogue() {
        let vehicle = create_test_vehicle();
        let marca = vehicle.marca.unwrap();
        assert!(MODELS.iter().any(|(m, ..)| *m == marca));
        assert!((2022..2026).contains(&vehicle.ano_fabricacao.unwrap()));
    }

    #[test]
    fn test_create_test_sale_links_ids() {
        let sale = create_test_sale(CustomerId::new(1), VehicleId::new(2), SalespersonId::new(3));
        assert_eq!(sale.cliente_id, Some(CustomerId::new(1)));
        assert_eq!(sale.veiculo_id, Some(VehicleId::new(2)));
        assert_eq!(sale.vendedor_id, Some(SalespersonId::new(3)));
        assert!(sale.valor_entrada.unwrap() < sale.valor_venda.unwrap());
    }

    #[test]
    fn test_create_test_service_ratings_in_range() {
        for _ in 0..20 {
            let service = create_test_service(SaleId::new(1));
            assert!((1..=5).contains(&service.satisfacao_cliente.unwrap()));
        }
    }
}
