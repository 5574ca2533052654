use backend_domain::{ColumnSource, EventColumn, TableName, RAW_PAYLOAD_COLUMN};

/// Renders the single-row `INSERT ... SELECT` for `columns`.
///
/// The statement takes exactly one bound parameter, the payload JSON text, which a
/// derived subquery exposes as `RAW_PAYLOAD`. Every other column is computed from it
/// inside ClickHouse:
///
/// * text paths become `Nullable(String)`: NULL when the path is missing or JSON
///   `null`, the unquoted contents for JSON strings, raw JSON text otherwise;
/// * timestamp paths go through `parseDateTime64BestEffortOrNull`, so an
///   unparseable value stores NULL instead of failing the insert;
/// * the identifier comes from `generateUUIDv4()` at insert time.
pub fn render_insert(table: &TableName, columns: &[EventColumn]) -> String {
    let names = columns
        .iter()
        .map(|column| column.name)
        .collect::<Vec<_>>()
        .join(", ");
    let projections = columns
        .iter()
        .map(|column| format!("    {}", projection(column)))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "INSERT INTO {table} ({names})\nSELECT\n{projections}\nFROM (SELECT ? AS {RAW_PAYLOAD_COLUMN})"
    )
}

fn projection(column: &EventColumn) -> String {
    let expr = match column.source {
        ColumnSource::GeneratedId => "generateUUIDv4()".to_string(),
        ColumnSource::Text(path) => text_expr(path),
        ColumnSource::Timestamp(path) => {
            format!("parseDateTime64BestEffortOrNull({}, 3, 'UTC')", text_expr(path))
        }
        ColumnSource::RawPayload => RAW_PAYLOAD_COLUMN.to_string(),
    };
    if expr == column.name {
        expr
    } else {
        format!("{} AS {}", expr, column.name)
    }
}

fn text_expr(path: &[&str]) -> String {
    let args = path_args(path);
    format!(
        "multiIf(JSONType({args}) = 'Null', CAST(NULL, 'Nullable(String)'), \
JSONType({args}) = 'String', JSONExtractString({args}), JSONExtractRaw({args}))"
    )
}

fn path_args(path: &[&str]) -> String {
    let mut args = vec![RAW_PAYLOAD_COLUMN.to_string()];
    args.extend(path.iter().map(|segment| quote_literal(segment)));
    args.join(", ")
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
