use std::io::IsTerminal;

use colored::Colorize;
use comfy_table::{presets::ASCII_FULL, Cell, Table};

use crate::food::analysis::carbs::{plain_number, ReportRow};
use crate::food::analysis::input::LookupRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

pub fn header_line(request: &LookupRequest) -> String {
    format!(
        "Carbohydrate information for {}g of \"{}\":",
        plain_number(request.weight_grams),
        request.food_name
    )
}

pub fn render_table(rows: &[ReportRow]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("(index)"),
        Cell::new("food_name"),
        Cell::new("carbs_in_provided_weight"),
        Cell::new("requested_weight"),
        Cell::new("carbs_per_100g"),
        Cell::new("original_serving"),
    ]);

    for (index, row) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(&row.food_name),
            Cell::new(&row.carbs_in_provided_weight),
            Cell::new(&row.requested_weight),
            Cell::new(&row.carbs_per_100g),
            Cell::new(&row.original_serving),
        ]);
    }

    table.to_string()
}

pub fn print_report(request: &LookupRequest, rows: &[ReportRow], format: ReportFormat) {
    match format {
        ReportFormat::Json => match serde_json::to_string_pretty(rows) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to serialize report: {}", e),
        },
        ReportFormat::Table => {
            let header = header_line(request);
            if std::io::stdout().is_terminal() {
                println!("{}", header.bold());
            } else {
                println!("{}", header);
            }
            println!("{}", render_table(rows));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> ReportRow {
        ReportRow {
            food_name: name.to_string(),
            carbs_in_provided_weight: "50.00g".to_string(),
            requested_weight: "200g".to_string(),
            carbs_per_100g: "25.00g".to_string(),
            original_serving: "25g per 1 medium (3in) (100g)".to_string(),
        }
    }

    #[test]
    fn test_header_names_weight_and_query() {
        let request = LookupRequest {
            food_name: "apple".to_string(),
            weight_grams: 200.0,
        };
        assert_eq!(header_line(&request), "Carbohydrate information for 200g of \"apple\":");

        let request = LookupRequest {
            food_name: "apple".to_string(),
            weight_grams: -0.0,
        };
        assert_eq!(header_line(&request), "Carbohydrate information for 0g of \"apple\":");
    }

    #[test]
    fn test_table_lists_rows_in_order() {
        let rendered = render_table(&[row("apple"), row("apple juice")]);
        let first = rendered.find("| apple ").unwrap();
        let second = rendered.find("| apple juice").unwrap();
        assert!(first < second);
        assert!(rendered.contains("carbs_in_provided_weight"));
        assert!(rendered.contains("25g per 1 medium (3in) (100g)"));
    }

    #[test]
    fn test_json_uses_report_field_names() {
        let json = serde_json::to_value(vec![row("apple")]).unwrap();
        assert_eq!(json[0]["carbs_per_100g"], "25.00g");
        assert_eq!(json[0]["requested_weight"], "200g");
    }
}
