use chrono::{DateTime, Utc};
use gadget_catalog::pricing::round_price;
use gadget_catalog::{Collection, ItemRef, ItemType};
use serde::Serialize;
use uuid::Uuid;

/// One purchase in the sorted listing
#[derive(Debug, Clone, Serialize)]
pub struct ReportLine {
    pub sort_key: String,
    pub id: Uuid,
    pub item_type: ItemType,
    pub is_wired: bool,
    pub price: f64,
    pub extras: usize,
    pub price_with_extras: f64,
}

/// Purchase summary printed by the demo
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseReport {
    pub generated_at: DateTime<Utc>,
    pub items: Vec<ReportLine>,
    pub total_price: f64,
    pub highlight: String,
    pub highlight_price_with_extras: f64,
}

impl PurchaseReport {
    pub fn new(purchases: &Collection, highlight: &str, highlighted: &ItemRef) -> Self {
        let items = purchases
            .sorted_items()
            .into_iter()
            .map(|(key, item)| ReportLine {
                sort_key: key.to_string(),
                id: item.id(),
                item_type: item.item_type(),
                is_wired: item.is_wired(),
                price: item.price_only(),
                extras: item.extras().map_or(0, |extras| extras.item_count()),
                price_with_extras: round_price(item.price_with_extras()),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            items,
            total_price: round_price(purchases.price()),
            highlight: highlight.to_string(),
            highlight_price_with_extras: round_price(highlighted.price_with_extras()),
        }
    }

    pub fn render_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Purchases ({})\n", self.generated_at.to_rfc3339()));
        for line in &self.items {
            output.push_str(&format!(
                "  [{}] {:<10} {:<8} {:>8.2}  extras: {} ({:.2})\n",
                line.sort_key,
                line.item_type.to_string(),
                if line.is_wired { "wired" } else { "wireless" },
                line.price,
                line.extras,
                line.price_with_extras,
            ));
        }
        output.push_str(&format!("\nTotal Pricing: {:.2}\n", self.total_price));
        output.push_str(&format!(
            "\n{} Total Price: {:.2}\n",
            self.highlight, self.highlight_price_with_extras
        ));

        output
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
