use rust_decimal::Decimal;

/// 目錄中的一項商品，載入後不可變
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: Decimal,
}

/// 依來源檔順序排列的商品清單
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// 呼叫端需自行保證 id 不重複（載入器會檢查）
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// 線性搜尋，回傳第一筆符合的商品
    pub fn find(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub id: u32,
    pub quantity: u32,
}

/// 顧客輸入順序的訂單明細，不合併相同 id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OrderLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<OrderLine>> for Order {
    fn from(lines: Vec<OrderLine>) -> Self {
        Self { lines }
    }
}
