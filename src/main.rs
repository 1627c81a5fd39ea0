use anyhow::Result;
use mental_math_quiz::utils::logging;
use mental_math_quiz::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志（详细开关来自配置）
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let mut app = App::initialize(config);
    app.run().await
}
