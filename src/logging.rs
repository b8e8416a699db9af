use tracing_subscriber::EnvFilter;

use crate::error::Error;

pub fn init() -> crate::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| Error::Other(String::from("Unable to build log filter"), Box::new(e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Other(String::from("Unable to initialize logging"), e))?;

    Ok(())
}
