use crate::utils::error::Result;

/// 讀取目錄來源的儲存介面
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

/// 顧客看到的固定文字
pub trait ShopProfile {
    fn shop_name(&self) -> &str;
    fn tagline(&self) -> &str;
    fn currency_symbol(&self) -> &str;
    fn payment_instruction(&self) -> &str;
    fn sign_off(&self) -> &str;
}
