use std::sync::mpsc;

use anyhow::Result;
use devfolio::config::Config;
use devfolio::persist::ThemeHandler;
use devfolio::portfolio::PortfolioLoader;
use devfolio::runtime::RealRuntime;
use devfolio::services;
use devfolio::ui::PortfolioApp;
use log::warn;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let runtime = RealRuntime;
    let config = Config::load(&runtime);
    let source = services::build_source(&config)?;
    let loader = PortfolioLoader::new(source, &config.account, config.has_credential());

    let (tx, rx) = mpsc::channel();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("devfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "devfolio",
        native_options,
        Box::new(move |cc| {
            // The fetch cycle runs exactly once per launch, off the UI
            // thread; the result crosses back over the channel.
            let ctx = cc.egui_ctx.clone();
            tokio::spawn(async move {
                let portfolio = loader.load().await;
                if tx.send(portfolio).is_err() {
                    warn!("UI closed before the fetch cycle finished");
                }
                ctx.request_repaint();
            });

            Ok(Box::new(PortfolioApp::new(
                cc,
                rx,
                ThemeHandler::new(RealRuntime),
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start UI: {e}"))?;

    Ok(())
}
