//! Schema bootstrap.
//!
//! Creates the six tables and the named views when they are missing. Every
//! statement is `IF NOT EXISTS`, so running the bootstrap against an existing
//! database leaves its data and definitions untouched. This is not a
//! migration system: existing tables are never altered.

use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use crate::Result;

/// Table definitions, in dependency order.
pub const TABLES: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS clientes (
        cliente_id INTEGER PRIMARY KEY AUTOINCREMENT,
        nome TEXT,
        email TEXT,
        telefone TEXT,
        data_nascimento DATE,
        genero TEXT,
        cidade TEXT,
        estado TEXT,
        renda_anual REAL,
        profissao TEXT,
        data_cadastro DATETIME DEFAULT CURRENT_TIMESTAMP
    )"#,
    r#"CREATE TABLE IF NOT EXISTS vendedores (
        vendedor_id INTEGER PRIMARY KEY AUTOINCREMENT,
        nome TEXT,
        email TEXT,
        data_contratacao DATE,
        comissao_percentual REAL,
        regiao_atuacao TEXT,
        ativo BOOLEAN
    )"#,
    r#"CREATE TABLE IF NOT EXISTS veiculos (
        veiculo_id INTEGER PRIMARY KEY AUTOINCREMENT,
        marca TEXT,
        modelo TEXT,
        ano_fabricacao INTEGER,
        cor TEXT,
        tipo_motor TEXT,
        potencia_cv INTEGER,
        cilindradas REAL,
        transmissao TEXT,
        tracao TEXT,
        preco_base REAL,
        estoque INTEGER,
        categoria TEXT
    )"#,
    r#"CREATE TABLE IF NOT EXISTS vendas (
        venda_id INTEGER PRIMARY KEY AUTOINCREMENT,
        cliente_id INTEGER REFERENCES clientes (cliente_id),
        veiculo_id INTEGER REFERENCES veiculos (veiculo_id),
        vendedor_id INTEGER REFERENCES vendedores (vendedor_id),
        data_venda DATE,
        valor_venda REAL,
        desconto_percentual REAL,
        forma_pagamento TEXT,
        numero_parcelas INTEGER,
        valor_entrada REAL,
        status_venda TEXT
    )"#,
    r#"CREATE TABLE IF NOT EXISTS test_drives (
        test_drive_id INTEGER PRIMARY KEY AUTOINCREMENT,
        cliente_id INTEGER REFERENCES clientes (cliente_id),
        veiculo_id INTEGER REFERENCES veiculos (veiculo_id),
        data_test_drive DATETIME,
        avaliacao INTEGER,
        comentario TEXT,
        resultou_venda BOOLEAN,
        vendedor_responsavel_id INTEGER REFERENCES vendedores (vendedor_id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS servicos_pos_venda (
        servico_id INTEGER PRIMARY KEY AUTOINCREMENT,
        venda_id INTEGER REFERENCES vendas (venda_id),
        tipo_servico TEXT,
        data_servico DATE,
        valor_servico REAL,
        satisfacao_cliente INTEGER,
        observacoes TEXT
    )"#,
];

/// Named view definitions, one per `NamedView` variant.
pub const VIEWS: &[&str] = &[
    r#"CREATE VIEW IF NOT EXISTS vw_vendas_por_estado AS
        SELECT c.estado AS estado,
               COUNT(v.venda_id) AS total_vendas,
               ROUND(COALESCE(SUM(v.valor_venda), 0), 2) AS valor_total
        FROM vendas v
        JOIN clientes c ON c.cliente_id = v.cliente_id
        GROUP BY c.estado
        ORDER BY total_vendas DESC, estado"#,
    r#"CREATE VIEW IF NOT EXISTS vw_ticket_medio_vendedor AS
        SELECT vd.vendedor_id AS vendedor_id,
               vd.nome AS nome,
               COUNT(v.venda_id) AS total_vendas,
               ROUND(AVG(v.valor_venda), 2) AS ticket_medio
        FROM vendedores vd
        JOIN vendas v ON v.vendedor_id = vd.vendedor_id
        GROUP BY vd.vendedor_id, vd.nome
        ORDER BY ticket_medio DESC, vendedor_id"#,
    r#"CREATE VIEW IF NOT EXISTS vw_vendas_por_marca AS
        SELECT ve.marca AS marca,
               COUNT(v.venda_id) AS total_vendas,
               ROUND(COALESCE(SUM(v.valor_venda), 0), 2) AS receita_total
        FROM vendas v
        JOIN veiculos ve ON ve.veiculo_id = v.veiculo_id
        WHERE v.status_venda = 'Concluída'
        GROUP BY ve.marca
        ORDER BY receita_total DESC, marca"#,
    r#"CREATE VIEW IF NOT EXISTS vw_conversao_test_drives AS
        SELECT ve.veiculo_id AS veiculo_id,
               ve.marca AS marca,
               ve.modelo AS modelo,
               COUNT(td.test_drive_id) AS total_test_drives,
               SUM(CASE WHEN td.resultou_venda THEN 1 ELSE 0 END) AS vendas_resultantes,
               ROUND(100.0 * SUM(CASE WHEN td.resultou_venda THEN 1 ELSE 0 END)
                     / COUNT(td.test_drive_id), 2) AS taxa_conversao,
               ROUND(AVG(td.avaliacao), 2) AS avaliacao_media
        FROM test_drives td
        JOIN veiculos ve ON ve.veiculo_id = td.veiculo_id
        GROUP BY ve.veiculo_id, ve.marca, ve.modelo
        ORDER BY taxa_conversao DESC, veiculo_id"#,
    r#"CREATE VIEW IF NOT EXISTS vw_satisfacao_servicos AS
        SELECT tipo_servico,
               COUNT(*) AS total_servicos,
               ROUND(COALESCE(SUM(valor_servico), 0), 2) AS valor_total,
               ROUND(AVG(satisfacao_cliente), 2) AS satisfacao_media
        FROM servicos_pos_venda
        GROUP BY tipo_servico
        ORDER BY total_servicos DESC, tipo_servico"#,
];

/// Create any missing tables and views in a single transaction.
#[instrument(skip(pool))]
pub async fn bootstrap(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    for statement in TABLES.iter().chain(VIEWS) {
        debug!(statement = %first_line(statement), "Applying schema statement");
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    info!(
        tables = TABLES.len(),
        views = VIEWS.len(),
        "Schema bootstrap complete"
    );
    Ok(())
}

fn first_line(statement: &str) -> &str {
    statement.lines().next().unwrap_or(statement).trim()
}
