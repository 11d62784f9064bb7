use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::DcaResult;

// Configuration service, delegates to whichever adapter it was given
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> DcaResult<AppConfig> {
        let config = self.config_port.get_config()?;
        log::debug!("resolved configuration: {:?}", config);
        Ok(config)
    }
}

// Fixed configuration, used by callers that build the batch in code
pub struct StaticConfigAdapter {
    config: AppConfig,
}

impl StaticConfigAdapter {
    pub fn new(config: AppConfig) -> Self {
        StaticConfigAdapter { config }
    }
}

impl ConfigPort for StaticConfigAdapter {
    fn get_config(&self) -> DcaResult<AppConfig> {
        Ok(self.config.clone())
    }
}
