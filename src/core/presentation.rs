use crate::core::{Catalog, CatalogItem, ShopProfile};
use crate::utils::money::format_money;
use std::io::{self, Write};

pub fn welcome<W: Write, P: ShopProfile + ?Sized>(out: &mut W, profile: &P) -> io::Result<()> {
    writeln!(out, "Welcome to the {}!", profile.shop_name())?;
    writeln!(out, "{}", profile.tagline())
}

pub fn display_catalog<W: Write, P: ShopProfile + ?Sized>(
    out: &mut W,
    catalog: &Catalog,
    profile: &P,
) -> io::Result<()> {
    display_catalog_filtered(out, catalog, profile, |_| true)
}

/// 只列出 `keep` 回傳 true 的商品，目錄本身不受影響
pub fn display_catalog_filtered<W, P, F>(
    out: &mut W,
    catalog: &Catalog,
    profile: &P,
    keep: F,
) -> io::Result<()>
where
    W: Write,
    P: ShopProfile + ?Sized,
    F: Fn(&CatalogItem) -> bool,
{
    writeln!(out, "Here are the cookies we have in the shop for you:")?;
    writeln!(out)?;

    for item in catalog.iter().filter(|item| keep(item)) {
        writeln!(out, "#{} - {}", item.id, item.title)?;
        writeln!(out, "{}", item.description)?;
        writeln!(out, "Price: {}", format_money(profile.currency_symbol(), item.price))?;
        writeln!(out)?;
    }

    Ok(())
}

/// 飲食限制：標題或描述提到任何一個字（不分大小寫）就不列出
#[derive(Debug, Clone, Default)]
pub struct DietaryFilter {
    avoid: Vec<String>,
}

impl DietaryFilter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let avoid = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { avoid }
    }

    pub fn is_empty(&self) -> bool {
        self.avoid.is_empty()
    }

    pub fn allows(&self, item: &CatalogItem) -> bool {
        let title = item.title.to_lowercase();
        let description = item.description.to_lowercase();
        !self
            .avoid
            .iter()
            .any(|word| title.contains(word.as_str()) || description.contains(word.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::ShopConfig;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogItem {
                id: 1,
                title: "Basboosa Semolina Cake".to_string(),
                description: "Semolina and yogurt soaked in rose water syrup".to_string(),
                price: Decimal::from_str("3.99").unwrap(),
            },
            CatalogItem {
                id: 2,
                title: "Vanilla Chai Cookie".to_string(),
                description: "Crisp with a smooth inside and a hint of Nuts".to_string(),
                price: Decimal::from_str("5.5").unwrap(),
            },
        ])
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_welcome() {
        let config = ShopConfig::default();
        let text = render(|out| welcome(out, &config));
        assert_eq!(
            text,
            "Welcome to the Python Cookie Shop!\nWe feed each according to their need.\n"
        );
    }

    #[test]
    fn test_display_catalog_format() {
        let config = ShopConfig::default();
        let text = render(|out| display_catalog(out, &catalog(), &config));

        assert_eq!(
            text,
            "Here are the cookies we have in the shop for you:\n\n\
             #1 - Basboosa Semolina Cake\n\
             Semolina and yogurt soaked in rose water syrup\n\
             Price: $3.99\n\n\
             #2 - Vanilla Chai Cookie\n\
             Crisp with a smooth inside and a hint of Nuts\n\
             Price: $5.50\n\n"
        );
    }

    #[test]
    fn test_dietary_filter_hides_matching_items() {
        let config = ShopConfig::default();
        let filter = DietaryFilter::new(["nuts"]);
        let text =
            render(|out| display_catalog_filtered(out, &catalog(), &config, |i| filter.allows(i)));

        assert!(text.contains("#1 - Basboosa Semolina Cake"));
        assert!(!text.contains("Vanilla Chai Cookie"));
    }

    #[test]
    fn test_empty_filter_allows_everything() {
        let filter = DietaryFilter::new(["", "  "]);
        assert!(filter.is_empty());
        assert!(catalog().iter().all(|i| filter.allows(i)));
    }
}
