//! Search query construction for weather readings

use weatherdata_core::SearchBounds;

use crate::schema::Table;

/// Substitution point for the table identifier in a query template
pub const TABLE_PLACEHOLDER: &str = "{table}";

const SELECT_READINGS: &str = "SELECT humidity, temperature, timestamp FROM {table}";
const ORDER_BY_TIMESTAMP: &str = " ORDER BY timestamp ASC";

/// Parameterised search query: a template plus its bind values, in
/// placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub template: String,
    pub params: Vec<String>,
}

impl SearchQuery {
    /// SQL text with the table identifier filled in
    pub fn render(&self, table: Table) -> String {
        self.template.replacen(TABLE_PLACEHOLDER, table.name(), 1)
    }

    /// Number of positional `?` placeholders in the template
    pub fn placeholder_count(&self) -> usize {
        self.template.matches('?').count()
    }
}

/// Build the search query for the given bounds.
///
/// Both bounds produce a single inclusive `BETWEEN`; a lone bound produces
/// `>=` or `<=`; no bounds produce no `WHERE` clause.
pub fn build_search_query(bounds: &SearchBounds) -> SearchQuery {
    let mut template = String::from(SELECT_READINGS);
    let mut params = Vec::with_capacity(2);

    match (bounds.start_date(), bounds.end_date()) {
        (Some(start), Some(end)) => {
            template.push_str(" WHERE timestamp BETWEEN ? AND ?");
            params.push(start.to_string());
            params.push(end.to_string());
        }
        (Some(start), None) => {
            template.push_str(" WHERE timestamp >= ?");
            params.push(start.to_string());
        }
        (None, Some(end)) => {
            template.push_str(" WHERE timestamp <= ?");
            params.push(end.to_string());
        }
        (None, None) => {}
    }

    template.push_str(ORDER_BY_TIMESTAMP);
    SearchQuery { template, params }
}
