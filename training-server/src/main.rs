use training_server::{Server, ServerState, print_banner, print_endpoints, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!("🍽️ Restaurant API Training Server starting...");

    // 2. 初始化服务器状态 (数据库、迁移、示例数据)
    let state = ServerState::initialize(&config).await?;

    print_endpoints(&config);

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
