use crate::{
    api::Api,
    config::Config,
    server::status::{Status, StatusLevel},
};
use handlebars::Handlebars;
use std::sync::RwLock;

pub struct AppState {
    pub config: Config,
    pub status: RwLock<Status>,
    pub api: Api,
    pub templates: Handlebars<'static>,
}

impl AppState {
    pub fn new(config: Config, api: Api, templates: Handlebars<'static>) -> Self {
        let version = config.version.to_string();
        Self {
            config,
            status: RwLock::new(Status {
                version,
                level: StatusLevel::Available,
            }),
            api,
            templates,
        }
    }
}
