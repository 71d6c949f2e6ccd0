#[macro_use]
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate async_trait;
#[macro_use]
extern crate nanoid;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate bson;

mod result;
pub use result::*;

pub mod config;
pub mod database;
pub mod derive;
pub mod events;
pub mod files;
pub mod r#impl;
pub mod models;
pub mod util;

pub use config::Config;
pub use database::{Database, Migration};
pub use events::CampusEvent;
pub use files::FileStore;

use async_std::channel::Sender;

/// Campus state
#[derive(Default, Clone)]
pub struct Campus {
    pub config: Config,
    pub database: Database,
    pub files: FileStore,
    pub event_channel: Option<Sender<CampusEvent>>,
}

impl Campus {
    pub async fn publish_event(&self, event: CampusEvent) {
        if let Some(sender) = &self.event_channel {
            if let Err(err) = sender.send(event).await {
                error!("Failed to publish a Campus event: {:?}", err);
            }
        }
    }
}
