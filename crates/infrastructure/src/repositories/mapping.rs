//! Parameter binding and read-back hints for each entity.

use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

use sportscar_sales_domain::{
    Customer, CustomerId, NewCustomer, NewPostSaleService, NewSale, NewSalesperson, NewTestDrive,
    NewVehicle, PostSaleService, Resource, Sale, SaleId, Salesperson, SalespersonId, TestDrive,
    Vehicle, VehicleId,
};

/// A positional SQLite statement under construction.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A [`Resource`] that knows how to move itself in and out of SQLite.
///
/// Rows are read back by storage class rather than decoded into the record
/// type, since a table may hold values written outside the API.
pub trait SqliteResource: Resource + Sized {
    /// `BOOLEAN` columns. Stored `0`/`1` in these columns read back as JSON
    /// booleans; any other stored value is returned as is.
    const FLAG_COLUMNS: &'static [&'static str] = &[];

    /// Bind every insertable column of the payload, in `COLUMNS` order.
    fn bind_new<'q>(new: &'q Self::New, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

impl SqliteResource for Customer {
    fn bind_new<'q>(new: &'q NewCustomer, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(new.nome.as_deref())
            .bind(new.email.as_deref())
            .bind(new.telefone.as_deref())
            .bind(new.data_nascimento)
            .bind(new.genero.as_deref())
            .bind(new.cidade.as_deref())
            .bind(new.estado.as_deref())
            .bind(new.renda_anual)
            .bind(new.profissao.as_deref())
    }
}

impl SqliteResource for Salesperson {
    const FLAG_COLUMNS: &'static [&'static str] = &["ativo"];

    fn bind_new<'q>(new: &'q NewSalesperson, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(new.nome.as_deref())
            .bind(new.email.as_deref())
            .bind(new.data_contratacao)
            .bind(new.comissao_percentual)
            .bind(new.regiao_atuacao.as_deref())
            .bind(new.ativo)
    }
}

impl SqliteResource for Vehicle {
    fn bind_new<'q>(new: &'q NewVehicle, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(new.marca.as_deref())
            .bind(new.modelo.as_deref())
            .bind(new.ano_fabricacao)
            .bind(new.cor.as_deref())
            .bind(new.tipo_motor.as_deref())
            .bind(new.potencia_cv)
            .bind(new.cilindradas)
            .bind(new.transmissao.as_deref())
            .bind(new.tracao.as_deref())
            .bind(new.preco_base)
            .bind(new.estoque)
            .bind(new.categoria.as_deref())
    }
}

impl SqliteResource for Sale {
    fn bind_new<'q>(new: &'q NewSale, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(new.cliente_id.map(CustomerId::get))
            .bind(new.veiculo_id.map(VehicleId::get))
            .bind(new.vendedor_id.map(SalespersonId::get))
            .bind(new.data_venda)
            .bind(new.valor_venda)
            .bind(new.desconto_percentual)
            .bind(new.forma_pagamento.as_deref())
            .bind(new.numero_parcelas)
            .bind(new.valor_entrada)
            .bind(new.status_venda.as_deref())
    }
}

impl SqliteResource for TestDrive {
    const FLAG_COLUMNS: &'static [&'static str] = &["resultou_venda"];

    fn bind_new<'q>(new: &'q NewTestDrive, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(new.cliente_id.map(CustomerId::get))
            .bind(new.veiculo_id.map(VehicleId::get))
            .bind(new.data_test_drive)
            .bind(new.avaliacao)
            .bind(new.comentario.as_deref())
            .bind(new.resultou_venda)
            .bind(new.vendedor_responsavel_id.map(SalespersonId::get))
    }
}

impl SqliteResource for PostSaleService {
    fn bind_new<'q>(new: &'q NewPostSaleService, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(new.venda_id.map(SaleId::get))
            .bind(new.tipo_servico.as_deref())
            .bind(new.data_servico)
            .bind(new.valor_servico)
            .bind(new.satisfacao_cliente)
            .bind(new.observacoes.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_columns_are_insertable_columns() {
        fn check<R: SqliteResource>() {
            for column in R::FLAG_COLUMNS {
                assert!(R::COLUMNS.contains(column), "{}.{}", R::TABLE, column);
            }
        }

        check::<Customer>();
        check::<Salesperson>();
        check::<Vehicle>();
        check::<Sale>();
        check::<TestDrive>();
        check::<PostSaleService>();
    }
}
