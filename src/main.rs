use anyhow::Result;
use question_bank_merge::utils::logging;
use question_bank_merge::{App, Config};

fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).run()?;

    Ok(())
}
