mod config;
mod data;
mod pipeline;

use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    pipeline::run(
        Path::new(config::ARFF_PATH),
        Path::new(config::FEATURES_PATH),
        Path::new(config::LABELS_PATH),
        config::SHUFFLE_SEED,
    )
}
