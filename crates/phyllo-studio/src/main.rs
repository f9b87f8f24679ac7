mod app;
mod frame;

use anyhow::Result;
use winit::dpi::LogicalSize;

use phyllo_engine::device::GpuInit;
use phyllo_engine::logging::{init_logging, LoggingConfig};
use phyllo_engine::window::{Runtime, RuntimeConfig};
use phyllo_viz::VizConfig;

use crate::app::StudioApp;

const TITLE: &str = "Phyllotaxis";

fn main() -> Result<()> {
    // Startup banner, printed before the window opens.
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          PHYLLOTAXIS  STUDIO           ║");
    println!("  ║   golden angle  ·  137.5°  ·  wgpu     ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  wheel / PgUp / PgDn / arrows  scroll  ║");
    println!("  ║  Home / End                    jump    ║");
    println!("  ║  Esc                           quit    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title:        TITLE.to_string(),
        initial_size: LogicalSize::new(1280.0, 800.0),
    };
    Runtime::run(config, GpuInit::default(), StudioApp::new(TITLE, VizConfig::default()))
}
