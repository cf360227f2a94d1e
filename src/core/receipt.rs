use crate::core::{Catalog, Order, ShopProfile};
use crate::utils::money::format_money;
use rust_decimal::Decimal;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub id: u32,
    pub title: String,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// 訂單結算結果；找不到商品或金額溢位的明細會被略過並計數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total: Decimal,
    pub skipped: usize,
}

impl Receipt {
    pub fn build(order: &Order, catalog: &Catalog) -> Self {
        let mut lines = Vec::with_capacity(order.len());
        let mut total = Decimal::ZERO;
        let mut skipped = 0;

        for entry in order.lines() {
            let Some(item) = catalog.find(entry.id) else {
                tracing::warn!("⚠️ Order references unknown item #{}, skipping", entry.id);
                skipped += 1;
                continue;
            };

            let Some((line_total, new_total)) = Decimal::from(entry.quantity)
                .checked_mul(item.price)
                .and_then(|line_total| Some((line_total, total.checked_add(line_total)?)))
            else {
                tracing::warn!(
                    "⚠️ Total overflow at {} x #{}, skipping",
                    entry.quantity,
                    entry.id
                );
                skipped += 1;
                continue;
            };
            total = new_total;
            lines.push(ReceiptLine {
                id: item.id,
                title: item.title.clone(),
                quantity: entry.quantity,
                line_total,
            });
        }

        tracing::info!("Receipt total {} over {} line(s)", total, lines.len());

        Self {
            lines,
            total,
            skipped,
        }
    }

    pub fn render<W: Write, P: ShopProfile + ?Sized>(&self, out: &mut W, profile: &P) -> io::Result<()> {
        writeln!(out, "Thank you for your order. You have ordered:")?;
        writeln!(out)?;

        for line in &self.lines {
            writeln!(out, "- {} {}", line.quantity, line.title)?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Your total is {}.",
            format_money(profile.currency_symbol(), self.total)
        )?;
        writeln!(out, "{}", profile.payment_instruction())?;
        writeln!(out)?;
        writeln!(out, "Thank you!")?;
        writeln!(out, "{}", profile.sign_off())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::ShopConfig;
    use crate::core::{CatalogItem, OrderLine};
    use std::str::FromStr;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogItem {
                id: 1,
                title: "Animal Cupcake".to_string(),
                description: "Cute little cupcakes shaped like animals".to_string(),
                price: Decimal::from_str("0.99").unwrap(),
            },
            CatalogItem {
                id: 2,
                title: "Basboosa Semolina Cake".to_string(),
                description: "Semolina and yogurt soaked in rose water syrup".to_string(),
                price: Decimal::from_str("3.99").unwrap(),
            },
        ])
    }

    #[test]
    fn test_total_and_render() {
        let order = Order::from(vec![
            OrderLine { id: 1, quantity: 8 },
            OrderLine { id: 2, quantity: 1 },
        ]);
        let receipt = Receipt::build(&order, &catalog());
        assert_eq!(receipt.total, Decimal::from_str("11.91").unwrap());

        let mut out = Vec::new();
        receipt.render(&mut out, &ShopConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Thank you for your order. You have ordered:\n\n\
             - 8 Animal Cupcake\n\
             - 1 Basboosa Semolina Cake\n\n\
             Your total is $11.91.\n\
             Please pay with Bitcoin before picking-up.\n\n\
             Thank you!\n\
             -The Python Cookie Shop Robot.\n"
        );
    }

    #[test]
    fn test_unknown_item_is_skipped() {
        let order = Order::from(vec![
            OrderLine { id: 42, quantity: 3 },
            OrderLine { id: 2, quantity: 2 },
        ]);
        let receipt = Receipt::build(&order, &catalog());

        assert_eq!(receipt.skipped, 1);
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.total, Decimal::from_str("7.98").unwrap());
    }

    #[test]
    fn test_empty_order() {
        let receipt = Receipt::build(&Order::new(), &catalog());
        assert!(receipt.lines.is_empty());

        let mut out = Vec::new();
        receipt.render(&mut out, &ShopConfig::default()).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Your total is $0.00."));
    }

    #[test]
    fn test_repeated_ids_not_merged() {
        let order = Order::from(vec![
            OrderLine { id: 1, quantity: 2 },
            OrderLine { id: 1, quantity: 3 },
        ]);
        let receipt = Receipt::build(&order, &catalog());

        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.total, Decimal::from_str("4.95").unwrap());
    }

    #[test]
    fn test_overflowing_line_is_skipped() {
        let catalog = Catalog::new(vec![
            CatalogItem {
                id: 1,
                title: "Golden Cookie".to_string(),
                description: "Covered in edible gold leaf".to_string(),
                price: Decimal::from_str("99999999999999999999").unwrap(),
            },
            CatalogItem {
                id: 2,
                title: "Animal Cupcake".to_string(),
                description: "Cute little cupcakes shaped like animals".to_string(),
                price: Decimal::from_str("0.99").unwrap(),
            },
        ]);
        let order = Order::from(vec![
            OrderLine { id: 2, quantity: 1 },
            OrderLine { id: 1, quantity: u32::MAX },
        ]);
        let receipt = Receipt::build(&order, &catalog);

        assert_eq!(receipt.skipped, 1);
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.total, Decimal::from_str("0.99").unwrap());
    }
}
