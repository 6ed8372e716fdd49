use clap::Parser;
use thriftrpc_harness::core::runtime;
use thriftrpc_harness::{
    create_client_from, create_obj_req, create_st_request, CliConfig, Context, FixtureKind,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let provider = match config.resolve() {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {}", e);
            std::process::exit(1);
        }
    };

    let mut settings = provider.runtime_settings();
    if config.verbose {
        settings.log_level = "debug".to_string();
    }
    let settings = runtime::init_with(settings);
    tracing::info!(worker_threads = settings.worker_threads, "harness initialized");

    let client = match create_client_from(provider.as_ref()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        service = client.service_name(),
        protocol = %client.protocol(),
        options = ?client.applied_options(),
        "client ready"
    );

    let rt = settings.build_runtime()?;
    let output = rt.block_on(async move {
        match config.fixture {
            FixtureKind::St => {
                let (ctx, req) = create_st_request(Context::new());
                tracing::debug!(headers = ?ctx.to_headers(), "st request annotated");
                serde_json::to_string_pretty(&req).map_err(anyhow::Error::from)
            }
            FixtureKind::Obj => {
                let (ctx, req) = create_obj_req(Context::new());
                tracing::debug!(headers = ?ctx.to_headers(), "obj request annotated");
                Ok(format!("{:#?}", req))
            }
        }
    })?;

    println!("{}", output);
    Ok(())
}
