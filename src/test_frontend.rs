// 前端测试工具 - 独立查看一句话的完整处理结果
use anyhow::Result;
use melo_frontend::{Frontend, FrontendConfig};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    println!("=== 中英混合 TTS 前端测试工具 ===\n");

    // 1. 加载配置与词典
    let config = FrontendConfig::load()?;
    println!("✓ 数据目录: {:?}", config.language_data_root);
    let frontend = Frontend::from_config(&config)?;
    println!("✓ 前端初始化完成\n");

    // 2. 获取输入文本：优先命令行参数，否则从标准输入读取
    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        println!("请输入文本:");
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        input.trim().to_string()
    } else {
        args.join(" ")
    };

    if text.is_empty() {
        anyhow::bail!("输入文本不能为空");
    }

    // 3. 规范化
    let normalized = frontend.normalize(&text);
    println!("规范化: {}\n", normalized);

    // 4. 逐块处理
    for (index, chunk) in frontend.split(&text).iter().enumerate() {
        println!("--- 第 {} 块: {} ---", index + 1, chunk);

        let tokens = frontend.tokenize(chunk);
        let tokens: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
        println!("分词: {}", tokens.join(""));

        let units = frontend.pronounce(chunk);
        let units: Vec<String> = units.iter().map(|unit| unit.to_string()).collect();
        println!("发音: {}", units.join(""));

        let input = frontend.preprocess(chunk);
        println!("模型输入: {}\n", serde_json::to_string(&input)?);
    }

    println!("=== 处理完成 ===");
    Ok(())
}
