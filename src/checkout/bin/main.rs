use lambda_http::{run, Error};
use tracing::info;
use book_lending::core::controller::{AppState, build_router};
use book_lending::core::domain::Configuration;
use book_lending::core::repository::LibraryStore;
use book_lending::utils::logs::setup_tracing;
use book_lending::utils::seed::seed_library;

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = if DEV_MODE {
        Configuration::from_env("dev")
    } else {
        Configuration::from_env("prod")
    };
    setup_tracing(config.log_level.as_str());

    let store = LibraryStore::new();
    if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        let summary = seed_library(&store, config.seed_titles, config.seed_requesters).await?;
        info!(titles = summary.titles, copies = summary.copies, requesters = summary.requesters,
            "seeded demo library");
    }

    let app = build_router(AppState::new(config, store));
    run(app).await
}
