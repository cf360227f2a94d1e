use clap::Parser;
use cookie_shop::utils::error::ErrorSeverity;
use cookie_shop::utils::{logger, validation::Validate};
use cookie_shop::{CatalogLoader, CliConfig, DietaryFilter, LocalStorage, Session, ShopConfig, ShopError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting cookie-shop");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => ShopConfig::from_file(path),
        None => Ok(ShopConfig::default()),
    }
    .and_then(|config| config.validate().map(|_| config))
    .unwrap_or_else(|e| fail(e));

    let catalog_path = config.catalog_path(cli.data.as_deref()).to_string();
    let catalog = CatalogLoader::new(LocalStorage::default())
        .load(&catalog_path)
        .unwrap_or_else(|e| fail(e));

    if cli.check {
        println!("✅ Catalog OK: {} items in {}", catalog.len(), catalog_path);
        return Ok(());
    }

    let mut session = Session::new(catalog, config);
    let filter = DietaryFilter::new(&cli.avoid);
    if !filter.is_empty() {
        tracing::info!("🥗 Dietary filter active: {:?}", cli.avoid);
        session = session.with_filter(move |item| filter.allows(item));
    }

    session.run_stdio()?;
    Ok(())
}

/// 載入階段的錯誤都是致命的：顯示訊息後依嚴重程度結束
fn fail(e: ShopError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
