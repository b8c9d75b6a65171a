use anyhow::Result;
use dot3_client::config::Config;
use std::path::PathBuf;

pub async fn init_config(path: PathBuf) -> Result<()> {
    let config = Config::default();
    let config_path = path.join("dot3.toml");
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    let toml_content = format!(
        r#"# dot3 client configuration

[server]
base_url = "{}"
user_agent = "{}"
# timeout_secs = 30

[session]
# file = "{}"
persist = {}

[query]
top_k = {}

[logging]
format = "text"
level = "{}"
"#,
        config.server.base_url,
        config.server.user_agent,
        config.session.file.display(),
        config.session.persist,
        config.query.top_k,
        config.logging.level,
    );

    std::fs::create_dir_all(&path)?;
    std::fs::write(&config_path, toml_content)?;
    println!("Created configuration file: {}", config_path.display());

    Ok(())
}
