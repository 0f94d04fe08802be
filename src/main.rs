use clap::Parser;
use procurve_dokuwiki::utils::logger;
use procurve_dokuwiki::{
    CliConfig, ConvertEngine, ConvertError, MarkupPipeline, StdinSource, StdoutSink,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證設定
    let options = match config.to_options() {
        Ok(options) => options,
        Err(e) => fail(&e),
    };

    let pipeline = MarkupPipeline::new(StdinSource, StdoutSink, options);
    let engine = ConvertEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Rendered {} VLANs into {} rows ({} bytes)",
                summary.vlans,
                summary.rows,
                summary.bytes
            );
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &ConvertError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
