//! 互動式點餐流程
//!
//! 狀態：等待商品 ID → 等待數量 → 等待商品 ID → … → 完成。
//! 不合法的輸入只會顯示訊息並重新詢問，沒有次數上限。

use crate::core::{Catalog, CatalogItem, Order, OrderLine, ShopProfile};
use crate::utils::error::InputError;
use crate::utils::money::format_money;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

pub const TERMINATION_KEYWORDS: [&str; 4] = ["finished", "done", "quit", "exit"];

pub const ITEM_ID_PROMPT: &str =
    "Enter the ID of the cookie you want to order (or 'finished', 'done', 'quit', 'exit' to end): ";

/// 商品 ID 提示的解析結果
#[derive(Debug, PartialEq)]
pub enum ItemChoice<'a> {
    Finish,
    Item(&'a CatalogItem),
}

#[derive(Debug)]
enum CollectorState<'a> {
    AwaitingItemId,
    AwaitingQuantity(&'a CatalogItem),
    Done,
}

pub fn is_termination_keyword(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    TERMINATION_KEYWORDS.contains(&normalized.as_str())
}

pub fn parse_item_choice<'a>(input: &str, catalog: &'a Catalog) -> Result<ItemChoice<'a>, InputError> {
    if is_termination_keyword(input) {
        return Ok(ItemChoice::Finish);
    }

    let trimmed = input.trim();
    let id: i64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidItemId(trimmed.to_string()))?;

    u32::try_from(id)
        .ok()
        .and_then(|id| catalog.find(id))
        .map(ItemChoice::Item)
        .ok_or(InputError::UnknownItem(id))
}

pub fn parse_quantity(input: &str) -> Result<u32, InputError> {
    let trimmed = input.trim();
    let quantity: i64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidQuantity(trimmed.to_string()))?;

    if quantity < 0 {
        return Err(InputError::NegativeQuantity(quantity));
    }

    u32::try_from(quantity).map_err(|_| InputError::InvalidQuantity(trimmed.to_string()))
}

pub struct OrderCollector<'a, P: ShopProfile + ?Sized> {
    catalog: &'a Catalog,
    profile: &'a P,
}

impl<'a, P: ShopProfile + ?Sized> OrderCollector<'a, P> {
    pub fn new(catalog: &'a Catalog, profile: &'a P) -> Self {
        Self { catalog, profile }
    }

    /// 持續詢問直到顧客輸入結束關鍵字或輸入結束（EOF）
    pub fn collect<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<Order> {
        let mut order = Order::new();
        let mut state = CollectorState::AwaitingItemId;

        loop {
            state = match state {
                CollectorState::AwaitingItemId => match prompt(input, output, ITEM_ID_PROMPT)? {
                    Some(line) => self.on_item_id(&line, output)?,
                    None => {
                        tracing::debug!("Input closed while waiting for an item ID");
                        writeln!(output)?;
                        CollectorState::Done
                    }
                },
                CollectorState::AwaitingQuantity(item) => {
                    let question = format!("My favorite! How many {} would you like? ", item.title);
                    match prompt(input, output, &question)? {
                        Some(line) => self.on_quantity(item, &line, &mut order, output)?,
                        None => {
                            tracing::debug!(
                                "Input closed while waiting for a quantity of #{}",
                                item.id
                            );
                            writeln!(output)?;
                            CollectorState::Done
                        }
                    }
                }
                CollectorState::Done => {
                    tracing::info!("Order collected with {} line(s)", order.len());
                    return Ok(order);
                }
            };
        }
    }

    fn on_item_id<W: Write>(&self, line: &str, output: &mut W) -> io::Result<CollectorState<'a>> {
        match parse_item_choice(line, self.catalog) {
            Ok(ItemChoice::Finish) => Ok(CollectorState::Done),
            Ok(ItemChoice::Item(item)) => Ok(CollectorState::AwaitingQuantity(item)),
            Err(e) => {
                tracing::debug!("Rejected item ID {:?}: {:?}", line.trim(), e);
                writeln!(output, "{}", e)?;
                Ok(CollectorState::AwaitingItemId)
            }
        }
    }

    fn on_quantity<W: Write>(
        &self,
        item: &'a CatalogItem,
        line: &str,
        order: &mut Order,
        output: &mut W,
    ) -> io::Result<CollectorState<'a>> {
        let quantity = match parse_quantity(line) {
            Ok(quantity) => quantity,
            Err(e) => {
                tracing::debug!("Rejected quantity {:?} for #{}: {:?}", line.trim(), item.id, e);
                writeln!(output, "{}", e)?;
                return Ok(CollectorState::AwaitingQuantity(item));
            }
        };

        let Some(subtotal) = Decimal::from(quantity).checked_mul(item.price) else {
            tracing::debug!("Subtotal overflow for {} x #{}", quantity, item.id);
            writeln!(output, "{}", InputError::InvalidQuantity(line.trim().to_string()))?;
            return Ok(CollectorState::AwaitingQuantity(item));
        };
        writeln!(
            output,
            "Your subtotal for {} {} is {}.",
            quantity,
            item.title,
            format_money(self.profile.currency_symbol(), subtotal)
        )?;

        order.push(OrderLine {
            id: item.id,
            quantity,
        });
        Ok(CollectorState::AwaitingItemId)
    }
}

/// 顯示提示並讀一行；EOF 時回傳 None
///
/// 非 UTF-8 的位元組以替代字元取代，交給一般的輸入驗證處理。
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
