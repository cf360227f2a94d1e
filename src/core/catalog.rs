use crate::config::cli::LocalStorage;
use crate::core::{Catalog, CatalogItem, Storage};
use crate::utils::error::{RecordRef, Result, ShopError};
use crate::utils::money::parse_price;
use crate::utils::validation::{validate_min_length, validate_non_negative};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

const FIELD_COUNT: usize = 4;
const MIN_TITLE_LENGTH: usize = 2;
const MIN_DESCRIPTION_LENGTH: usize = 10;

pub struct CatalogLoader<S: Storage> {
    storage: S,
}

impl<S: Storage> CatalogLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self, path: &str) -> Result<Catalog> {
        tracing::info!("📁 Loading catalog from: {}", path);
        let data = self.storage.read_file(path)?;
        let catalog = parse_catalog(data.as_slice())?;
        tracing::info!("✅ Loaded {} catalog items", catalog.len());
        Ok(catalog)
    }
}

/// 從檔案系統路徑載入目錄
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref().to_string_lossy();
    CatalogLoader::new(LocalStorage::default()).load(&path)
}

/// 解析 `id,title,description,price` 格式的 CSV，第一行為標題列
///
/// 任何一筆資料不合法即整批失敗，錯誤會指出該筆的 id（或 id 無法解析時的行號）與欄位。
pub fn parse_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    let mut seen: HashMap<u32, u64> = HashMap::new();

    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        // 標題列是第 1 行
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);

        let item = parse_record(&record, line)?;

        if let Some(&first_line) = seen.get(&item.id) {
            return Err(ShopError::DuplicateIdError {
                id: item.id,
                first_line,
                line,
            });
        }
        seen.insert(item.id, line);

        tracing::debug!("Parsed #{} {} @ {}", item.id, item.title, item.price);
        items.push(item);
    }

    Ok(Catalog::new(items))
}

fn parse_record(record: &StringRecord, line: u64) -> Result<CatalogItem> {
    if record.len() != FIELD_COUNT {
        return Err(ShopError::FormatError {
            record: RecordRef::Line(line),
            field: "record".to_string(),
            value: format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        });
    }

    let raw_id = &record[0];
    let id: u32 = raw_id.parse().map_err(|_| ShopError::FormatError {
        record: RecordRef::Line(line),
        field: "id".to_string(),
        value: raw_id.to_string(),
    })?;
    if id == 0 {
        return Err(ShopError::ValidationError {
            record: RecordRef::Line(line),
            field: "id".to_string(),
            reason: "ID must be a positive integer".to_string(),
        });
    }

    let record_ref = RecordRef::Id(id);
    let title = &record[1];
    let description = &record[2];
    let raw_price = &record[3];

    let price = parse_price(raw_price).ok_or_else(|| ShopError::FormatError {
        record: record_ref,
        field: "price".to_string(),
        value: raw_price.to_string(),
    })?;

    validate_min_length(record_ref, "title", title, MIN_TITLE_LENGTH)?;
    validate_min_length(record_ref, "description", description, MIN_DESCRIPTION_LENGTH)?;
    validate_non_negative(record_ref, "price", price)?;

    Ok(CatalogItem {
        id,
        title: title.to_string(),
        description: description.to_string(),
        price,
    })
}
