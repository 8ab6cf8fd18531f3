//! 传感器读数打印
//!
//! 连接机器人，周期性刷新传感器缓存并打印快照，Ctrl-C 后停车并释放会话。
//!
//! ```bash
//! cargo run -p rovio-sdk --example sensor_dump --features native -- --address 192.168.10.18
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rovio_sdk::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "sensor_dump", about = "Print Rovio sensor snapshots")]
struct Args {
    /// 机器人地址（覆盖配置文件）
    #[arg(short, long)]
    address: Option<String>,

    /// 机器人 ID（覆盖配置文件）
    #[arg(short, long)]
    id: Option<i32>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 刷新间隔（毫秒）
    #[arg(long, default_value_t = 500)]
    interval_ms: u64,

    /// 打开头灯
    #[arg(long)]
    headlight: bool,
}

fn main() -> Result<()> {
    rovio_sdk::init_logging();
    let args = Args::parse();

    let mut builder = match &args.config {
        Some(path) => RobotBuilder::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RobotBuilder::new(),
    };
    if let Some(address) = args.address {
        builder = builder.address(address);
    }
    if let Some(id) = args.id {
        builder = builder.id(id);
    }

    let mut robot = builder.connect().context("Failed to connect to robot")?;

    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    if args.headlight && !robot.turn_on_headlight() {
        eprintln!("⚠️ headlight command rejected");
    }

    while running.load(Ordering::SeqCst) {
        if robot.update_sensor_cache() {
            println!("{}", robot.snapshot());
        } else {
            eprintln!("⚠️ sensor update failed");
        }
        std::thread::sleep(Duration::from_millis(args.interval_ms));
    }

    if !robot.stop() {
        eprintln!("⚠️ stop command rejected");
    }
    if args.headlight && !robot.turn_off_headlight() {
        eprintln!("⚠️ headlight command rejected");
    }
    robot.close();
    Ok(())
}
