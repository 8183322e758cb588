//! Fluent builder pattern for constructing create payloads.
//!
//! Builders start from an empty payload, so every field left unset is sent
//! as absent and stored as NULL.

use chrono::NaiveDate;
use sportscar_sales_domain::{
    CustomerId, NewCustomer, NewSale, NewVehicle, SalespersonId, VehicleId,
};

/// Builder for vehicle payloads
#[derive(Clone, Default)]
pub struct VehicleBuilder {
    vehicle: NewVehicle,
}

impl VehicleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marca(mut self, marca: impl Into<String>) -> Self {
        self.vehicle.marca = Some(marca.into());
        self
    }

    pub fn with_modelo(mut self, modelo: impl Into<String>) -> Self {
        self.vehicle.modelo = Some(modelo.into());
        self
    }

    pub fn with_ano_fabricacao(mut self, ano: i64) -> Self {
        self.vehicle.ano_fabricacao = Some(ano);
        self
    }

    pub fn with_potencia_cv(mut self, potencia: i64) -> Self {
        self.vehicle.potencia_cv = Some(potencia);
        self
    }

    pub fn with_preco_base(mut self, preco: f64) -> Self {
        self.vehicle.preco_base = Some(preco);
        self
    }

    pub fn with_estoque(mut self, estoque: i64) -> Self {
        self.vehicle.estoque = Some(estoque);
        self
    }

    pub fn with_categoria(mut self, categoria: impl Into<String>) -> Self {
        self.vehicle.categoria = Some(categoria.into());
        self
    }

    pub fn build(self) -> NewVehicle {
        self.vehicle
    }
}

/// Builder for customer payloads
#[derive(Clone, Default)]
pub struct CustomerBuilder {
    customer: NewCustomer,
}

impl CustomerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nome(mut self, nome: impl Into<String>) -> Self {
        self.customer.nome = Some(nome.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.customer.email = Some(email.into());
        self
    }

    pub fn with_cidade(mut self, cidade: impl Into<String>, estado: impl Into<String>) -> Self {
        self.customer.cidade = Some(cidade.into());
        self.customer.estado = Some(estado.into());
        self
    }

    pub fn with_renda_anual(mut self, renda: f64) -> Self {
        self.customer.renda_anual = Some(renda);
        self
    }

    pub fn build(self) -> NewCustomer {
        self.customer
    }
}

/// Builder for sale payloads
#[derive(Clone, Default)]
pub struct SaleBuilder {
    sale: NewSale,
}

impl SaleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cliente(mut self, id: CustomerId) -> Self {
        self.sale.cliente_id = Some(id);
        self
    }

    pub fn with_veiculo(mut self, id: VehicleId) -> Self {
        self.sale.veiculo_id = Some(id);
        self
    }

    pub fn with_vendedor(mut self, id: SalespersonId) -> Self {
        self.sale.vendedor_id = Some(id);
        self
    }

    pub fn with_data_venda(mut self, data: NaiveDate) -> Self {
        self.sale.data_venda = Some(data);
        self
    }

    pub fn with_valor_venda(mut self, valor: f64) -> Self {
        self.sale.valor_venda = Some(valor);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.sale.status_venda = Some(status.into());
        self
    }

    /// Mark the sale as completed
    pub fn completed(self) -> Self {
        self.with_status("Concluída")
    }

    /// Mark the sale as cancelled
    pub fn cancelled(self) -> Self {
        self.with_status("Cancelada")
    }

    pub fn build(self) -> NewSale {
        self.sale
    }
}
