//! log4rs initialisation.
//!
//! Uses `log4rs.yml` from the working directory when present, otherwise a
//! console appender on stderr. Stdout is reserved for the report.

use crate::config::{LOG_CONFIG_FILE, LOG_LEVEL_ENV};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub fn init() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {LOG_CONFIG_FILE}: {e}"))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level_from_env()))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Level from `AWS_EC2_LIST_LOG`, `warn` when unset or invalid.
fn level_from_env() -> LevelFilter {
    parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}
