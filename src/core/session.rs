use crate::core::order::OrderCollector;
use crate::core::presentation::{display_catalog_filtered, welcome};
use crate::core::receipt::Receipt;
use crate::core::{Catalog, CatalogItem, Order, ShopProfile};
use std::io::{self, BufRead, Write};

type ItemFilter = Box<dyn Fn(&CatalogItem) -> bool>;

/// 一次完整的購物流程：歡迎 → 列出商品 → 點餐 → 收據
pub struct Session<P: ShopProfile> {
    catalog: Catalog,
    profile: P,
    filter: Option<ItemFilter>,
}

impl<P: ShopProfile> Session<P> {
    pub fn new(catalog: Catalog, profile: P) -> Self {
        Self {
            catalog,
            profile,
            filter: None,
        }
    }

    /// 只影響商品列表的顯示，點餐仍可使用任何 ID
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&CatalogItem) -> bool + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<Order> {
        tracing::info!("🍪 Starting shop session with {} items", self.catalog.len());

        welcome(output, &self.profile)?;
        let keep = |item: &CatalogItem| self.filter.as_ref().map_or(true, |f| f(item));
        display_catalog_filtered(output, &self.catalog, &self.profile, keep)?;

        let order = OrderCollector::new(&self.catalog, &self.profile).collect(input, output)?;

        Receipt::build(&order, &self.catalog).render(output, &self.profile)?;
        output.flush()?;

        tracing::info!("✅ Session finished");
        Ok(order)
    }

    pub fn run_stdio(&self) -> io::Result<Order> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(&mut stdin.lock(), &mut stdout.lock())
    }
}
