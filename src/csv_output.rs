//! CSV output format for footprint results

use crate::result::{Category, FootprintResult};

/// CSV record for one category (or the total row)
#[derive(Debug, Clone)]
pub struct CsvRow {
    pub category: String,
    pub tons_co2e: f64,
    pub percent: f64,
}

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput {
    rows: Vec<CsvRow>,
    include_impact: bool,
    impact: Option<String>,
}

impl CsvOutput {
    /// Create a new CSV output formatter
    pub fn new(include_impact: bool) -> Self {
        Self {
            rows: Vec::new(),
            include_impact,
            impact: None,
        }
    }

    /// Build the category rows plus a `total` row from a result
    pub fn from_result(result: &FootprintResult, include_impact: bool) -> Self {
        let mut output = Self::new(include_impact);
        for share in result.shares() {
            output.add_row(CsvRow {
                category: share.category.key().to_string(),
                tons_co2e: share.tons,
                percent: share.percent,
            });
        }
        output.add_row(CsvRow {
            category: "total".to_string(),
            tons_co2e: result.total,
            percent: if result.total > 0.0 { 100.0 } else { 0.0 },
        });
        if include_impact {
            output.impact = Some(result.impact_level().label().to_string());
        }
        output
    }

    /// Append a row; categories from callers may contain any text and are escaped
    pub fn add_row(&mut self, row: CsvRow) {
        self.rows.push(row);
    }

    fn header(&self) -> String {
        let mut headers = vec!["category", "tons_co2e", "percent"];

        if self.include_impact {
            headers.push("impact_level");
        }

        headers.join(",")
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(&self, row: &CsvRow) -> String {
        let mut fields = vec![
            Self::escape_field(&row.category),
            format!("{:.4}", row.tons_co2e),
            format!("{:.2}", row.percent),
        ];

        if self.include_impact {
            // Impact applies to the total only
            if row.category == "total" {
                fields.push(self.impact.clone().unwrap_or_default());
            } else {
                fields.push(String::new());
            }
        }

        fields.join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.header());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.format_row(row));
            output.push('\n');
        }

        output
    }
}
